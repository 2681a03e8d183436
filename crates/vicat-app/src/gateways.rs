//! Gateway contracts the use cases depend on.
//!
//! The catalog core never talks to a database or a message broker
//! directly; it is handed implementations of these traits by the embedding
//! layer. Gateway failures propagate untranslated — the core does not catch
//! or retry operational errors.

use async_trait::async_trait;

use vicat_core::models::{Aggregate, Pagination, Resource, SearchQuery, VideoId, VideoMediaType};
use vicat_core::AppError;

/// Persistence contract, one instance per aggregate type.
///
/// The legality check performed by a use case and the `update` that follows
/// it must be treated as a single logical transaction per aggregate id;
/// implementations enforce that with optimistic concurrency or row-level
/// locking.
#[async_trait]
pub trait AggregateGateway<A>: Send + Sync
where
    A: Aggregate + Send + Sync + 'static,
{
    async fn create(&self, aggregate: A) -> Result<A, AppError>;

    async fn update(&self, aggregate: A) -> Result<A, AppError>;

    async fn delete_by_id(&self, id: &A::Id) -> Result<(), AppError>;

    async fn find_by_id(&self, id: &A::Id) -> Result<Option<A>, AppError>;

    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<A>, AppError>;
}

/// Access to the stored binary payloads of a video's processable media.
#[async_trait]
pub trait MediaResourceGateway: Send + Sync {
    /// The binary currently stored for the named slot, if any.
    async fn get_resource(
        &self,
        video_id: VideoId,
        media_type: VideoMediaType,
    ) -> Result<Option<Resource>, AppError>;

    /// Remove every stored payload belonging to the video.
    async fn clear_resources(&self, video_id: VideoId) -> Result<(), AppError>;
}

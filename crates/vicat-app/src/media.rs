//! Media flows: upload, retrieval, and encoder-status reconciliation.
//!
//! Reconciliation is fire-and-forget from the sender's perspective. The
//! encoder offers no delivery deduplication and no ordering guarantee, so
//! [`UpdateMediaStatus`] must stay idempotent under re-delivery and must
//! never regress a slot that has already reached a more advanced status.
//! Business-expected conditions (unknown video, stale signal, duplicate
//! terminal transition) are absorbed as skips; only operational failures
//! surface as errors.

use std::sync::Arc;

use serde::Serialize;

use crate::gateways::{AggregateGateway, MediaResourceGateway};
use vicat_core::models::{
    MediaUpdate, Resource, Video, VideoEncoderEvent, VideoId, VideoMedia, VideoMediaType,
};
use vicat_core::{AppError, Config};
use vicat_storage::{keys, Storage};

#[derive(Debug, Clone)]
pub struct UploadMediaInput {
    pub video_id: VideoId,
    pub media_type: VideoMediaType,
    pub resource: Resource,
}

#[derive(Debug, Clone, Serialize)]
pub struct UploadMediaOutput {
    pub video_id: VideoId,
    pub media: VideoMedia,
}

/// Stores a video binary and attaches it to the named slot, pending
/// out-of-band encoding.
pub struct UploadMedia {
    gateway: Arc<dyn AggregateGateway<Video>>,
    storage: Arc<dyn Storage>,
    config: Config,
}

impl UploadMedia {
    pub fn new(
        gateway: Arc<dyn AggregateGateway<Video>>,
        storage: Arc<dyn Storage>,
        config: Config,
    ) -> Self {
        Self {
            gateway,
            storage,
            config,
        }
    }

    pub async fn execute(&self, input: UploadMediaInput) -> Result<UploadMediaOutput, AppError> {
        let resource = &input.resource;
        if resource.content.len() > self.config.max_video_size_bytes {
            return Err(AppError::InvalidInput(format!(
                "Media payload of {} bytes exceeds the {} byte limit",
                resource.content.len(),
                self.config.max_video_size_bytes
            )));
        }
        if !self
            .config
            .video_allowed_content_types
            .iter()
            .any(|allowed| allowed == &resource.content_type)
        {
            return Err(AppError::InvalidInput(format!(
                "Content type {} is not allowed for video media",
                resource.content_type
            )));
        }

        let mut video = self
            .gateway
            .find_by_id(&input.video_id)
            .await?
            .ok_or_else(|| AppError::not_found("Video", input.video_id))?;

        let key = keys::media_key(input.video_id, input.media_type, &resource.name);
        let media = VideoMedia::new(&resource.name, &resource.checksum, &key);

        self.storage.store(&key, input.resource.clone()).await?;

        match input.media_type {
            VideoMediaType::Trailer => video.update_trailer_media(media.clone()),
            VideoMediaType::Video => video.update_video_media(media.clone()),
        }
        self.gateway.update(video).await?;

        tracing::info!(
            video_id = %input.video_id,
            media_type = %input.media_type,
            key = %key,
            "Media uploaded"
        );

        Ok(UploadMediaOutput {
            video_id: input.video_id,
            media,
        })
    }
}

/// Fetches the stored binary for one media slot.
pub struct GetMediaResource {
    media_resources: Arc<dyn MediaResourceGateway>,
}

impl GetMediaResource {
    pub fn new(media_resources: Arc<dyn MediaResourceGateway>) -> Self {
        Self { media_resources }
    }

    pub async fn execute(
        &self,
        video_id: VideoId,
        media_type: VideoMediaType,
    ) -> Result<Resource, AppError> {
        self.media_resources
            .get_resource(video_id, media_type)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No {} media stored for video {}",
                    media_type, video_id
                ))
            })
    }
}

/// What a reconciliation run did with the event it was handed.
///
/// Skips are part of the contract, not failures: the sender has no retry
/// channel, so stale, duplicate and unresolvable signals are absorbed
/// here. The embedding layer can count skips for operational visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaStatusOutcome {
    /// A legal transition was applied and persisted exactly once.
    Applied,
    /// The event was dropped without touching the store.
    Skipped,
}

/// Applies an encoder completion/error signal to the catalog's view of a
/// video's media state.
pub struct UpdateMediaStatus {
    gateway: Arc<dyn AggregateGateway<Video>>,
}

impl UpdateMediaStatus {
    pub fn new(gateway: Arc<dyn AggregateGateway<Video>>) -> Self {
        Self { gateway }
    }

    /// Re-reads current state, checks transition legality, and persists at
    /// most once. The legality check and the update are one logical
    /// transaction per video id; the gateway enforces that boundary.
    pub async fn execute(
        &self,
        event: &VideoEncoderEvent,
    ) -> Result<MediaStatusOutcome, AppError> {
        let video_id = event.video_id();
        let resource_id = event.resource_id();

        let mut video = match self.gateway.find_by_id(&video_id).await? {
            Some(video) => video,
            None => {
                tracing::warn!(
                    video_id = %video_id,
                    resource_id = %resource_id,
                    "Encoder event references an unknown video, dropping"
                );
                return Ok(MediaStatusOutcome::Skipped);
            }
        };

        let media_type = match video.media_type_of(resource_id) {
            Some(media_type) => media_type,
            None => {
                tracing::warn!(
                    video_id = %video_id,
                    resource_id = %resource_id,
                    "Encoder event references a media resource no longer attached, dropping"
                );
                return Ok(MediaStatusOutcome::Skipped);
            }
        };

        let result = match event {
            VideoEncoderEvent::Completed { encoded_path, .. } => {
                video.completed(media_type, encoded_path)
            }
            VideoEncoderEvent::Error { .. } => video.failed(media_type),
        };

        match result {
            Ok(MediaUpdate::Applied) => {
                self.gateway.update(video).await?;
                tracing::info!(
                    video_id = %video_id,
                    media_type = %media_type,
                    status = %event.target_status(),
                    "Media status reconciled"
                );
                Ok(MediaStatusOutcome::Applied)
            }
            Ok(MediaUpdate::AlreadyApplied) => {
                tracing::debug!(
                    video_id = %video_id,
                    media_type = %media_type,
                    "Encoder event already applied, nothing to do"
                );
                Ok(MediaStatusOutcome::Skipped)
            }
            Err(error) => {
                tracing::warn!(
                    video_id = %video_id,
                    media_type = %media_type,
                    error = %error,
                    "Illegal media status transition, treating event as handled"
                );
                Ok(MediaStatusOutcome::Skipped)
            }
        }
    }
}

//! In-memory gateway implementations for testing
//!
//! These allow exercising use cases without a database. The aggregate
//! gateway counts persistence calls so tests can prove that a skipped
//! reconciliation never touched the store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::gateways::{AggregateGateway, MediaResourceGateway};
use vicat_core::models::{
    Aggregate, Pagination, Resource, SearchQuery, VideoId, VideoMediaType,
};
use vicat_core::AppError;

/// Map-backed aggregate gateway keyed by the aggregate's id string.
pub struct InMemoryGateway<A> {
    items: Arc<Mutex<HashMap<String, A>>>,
    create_calls: Arc<AtomicUsize>,
    update_calls: Arc<AtomicUsize>,
}

impl<A> Clone for InMemoryGateway<A> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            create_calls: self.create_calls.clone(),
            update_calls: self.update_calls.clone(),
        }
    }
}

impl<A> Default for InMemoryGateway<A> {
    fn default() -> Self {
        Self {
            items: Arc::new(Mutex::new(HashMap::new())),
            create_calls: Arc::new(AtomicUsize::new(0)),
            update_calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl<A> InMemoryGateway<A>
where
    A: Aggregate + Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an aggregate without counting it as a persistence call.
    pub fn insert(&self, aggregate: A) {
        self.items
            .lock()
            .unwrap()
            .insert(aggregate.id().to_string(), aggregate);
    }

    /// Direct peek at stored state, bypassing the gateway contract.
    pub fn stored(&self, id: &A::Id) -> Option<A> {
        self.items.lock().unwrap().get(&id.to_string()).cloned()
    }

    pub fn create_count(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<A> AggregateGateway<A> for InMemoryGateway<A>
where
    A: Aggregate + Clone + Send + Sync + 'static,
{
    async fn create(&self, aggregate: A) -> Result<A, AppError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.insert(aggregate.clone());
        Ok(aggregate)
    }

    async fn update(&self, aggregate: A) -> Result<A, AppError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.insert(aggregate.clone());
        Ok(aggregate)
    }

    async fn delete_by_id(&self, id: &A::Id) -> Result<(), AppError> {
        self.items.lock().unwrap().remove(&id.to_string());
        Ok(())
    }

    async fn find_by_id(&self, id: &A::Id) -> Result<Option<A>, AppError> {
        Ok(self.items.lock().unwrap().get(&id.to_string()).cloned())
    }

    /// Pages over all aggregates ordered by id string. Terms and sort are
    /// a real gateway's concern; the mock ignores them.
    async fn find_all(&self, query: &SearchQuery) -> Result<Pagination<A>, AppError> {
        let items = self.items.lock().unwrap();
        let mut keys: Vec<&String> = items.keys().collect();
        keys.sort();

        let total = keys.len() as i64;
        let start = (query.page * query.per_page) as usize;
        let page: Vec<A> = keys
            .into_iter()
            .skip(start)
            .take(query.per_page as usize)
            .map(|key| items[key].clone())
            .collect();

        Ok(Pagination::new(query.page, query.per_page, total, page))
    }
}

/// Gateway that fails every call; used to prove operational errors
/// propagate untranslated.
pub struct FailingGateway;

#[async_trait]
impl<A> AggregateGateway<A> for FailingGateway
where
    A: Aggregate + Clone + Send + Sync + 'static,
{
    async fn create(&self, _aggregate: A) -> Result<A, AppError> {
        Err(AppError::Gateway("store unavailable".to_string()))
    }

    async fn update(&self, _aggregate: A) -> Result<A, AppError> {
        Err(AppError::Gateway("store unavailable".to_string()))
    }

    async fn delete_by_id(&self, _id: &A::Id) -> Result<(), AppError> {
        Err(AppError::Gateway("store unavailable".to_string()))
    }

    async fn find_by_id(&self, _id: &A::Id) -> Result<Option<A>, AppError> {
        Err(AppError::Gateway("store unavailable".to_string()))
    }

    async fn find_all(&self, _query: &SearchQuery) -> Result<Pagination<A>, AppError> {
        Err(AppError::Gateway("store unavailable".to_string()))
    }
}

/// Map-backed media resource gateway.
#[derive(Clone, Default)]
pub struct InMemoryMediaResourceGateway {
    resources: Arc<Mutex<HashMap<(VideoId, VideoMediaType), Resource>>>,
    cleared: Arc<Mutex<Vec<VideoId>>>,
}

impl InMemoryMediaResourceGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_resource(
        &self,
        video_id: VideoId,
        media_type: VideoMediaType,
        resource: Resource,
    ) {
        self.resources
            .lock()
            .unwrap()
            .insert((video_id, media_type), resource);
    }

    /// Video ids whose resources were cleared, in call order.
    pub fn cleared(&self) -> Vec<VideoId> {
        self.cleared.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaResourceGateway for InMemoryMediaResourceGateway {
    async fn get_resource(
        &self,
        video_id: VideoId,
        media_type: VideoMediaType,
    ) -> Result<Option<Resource>, AppError> {
        Ok(self
            .resources
            .lock()
            .unwrap()
            .get(&(video_id, media_type))
            .cloned())
    }

    async fn clear_resources(&self, video_id: VideoId) -> Result<(), AppError> {
        self.resources
            .lock()
            .unwrap()
            .retain(|(id, _), _| *id != video_id);
        self.cleared.lock().unwrap().push(video_id);
        Ok(())
    }
}

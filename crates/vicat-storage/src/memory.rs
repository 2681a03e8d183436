//! In-memory storage backend.
//!
//! Keeps every object in a process-local map. Used by tests and by
//! ephemeral deployments that do not need media to survive a restart.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::traits::{Storage, StorageResult};
use vicat_core::models::Resource;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    objects: Arc<Mutex<HashMap<String, Resource>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored objects. Test convenience.
    pub fn len(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn store(&self, key: &str, resource: Resource) -> StorageResult<()> {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), resource);
        Ok(())
    }

    async fn get(&self, key: &str) -> StorageResult<Option<Resource>> {
        Ok(self.objects.lock().unwrap().get(key).cloned())
    }

    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>> {
        let mut keys: Vec<String> = self
            .objects
            .lock()
            .unwrap()
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }

    async fn delete_all(&self, keys: &[String]) -> StorageResult<()> {
        let mut objects = self.objects.lock().unwrap();
        for key in keys {
            objects.remove(key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(name: &str) -> Resource {
        Resource::new(name, "video/mp4", "sum", name.as_bytes().to_vec())
    }

    #[tokio::test]
    async fn test_store_and_get_round_trip() {
        let storage = InMemoryStorage::new();
        storage.store("videos/a/trailer/t.mp4", resource("t.mp4")).await.unwrap();

        let fetched = storage.get("videos/a/trailer/t.mp4").await.unwrap().unwrap();
        assert_eq!(fetched.name, "t.mp4");
        assert_eq!(fetched.content_type, "video/mp4");
        assert_eq!(storage.len(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_key_returns_none() {
        let storage = InMemoryStorage::new();
        assert!(storage.get("videos/missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_filters_by_prefix_and_sorts() {
        let storage = InMemoryStorage::new();
        storage.store("videos/a/video/v.mp4", resource("v.mp4")).await.unwrap();
        storage.store("videos/a/trailer/t.mp4", resource("t.mp4")).await.unwrap();
        storage.store("videos/b/trailer/t.mp4", resource("t.mp4")).await.unwrap();

        let keys = storage.list("videos/a/").await.unwrap();
        assert_eq!(
            keys,
            vec![
                "videos/a/trailer/t.mp4".to_string(),
                "videos/a/video/v.mp4".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_all_ignores_missing_keys() {
        let storage = InMemoryStorage::new();
        storage.store("videos/a/trailer/t.mp4", resource("t.mp4")).await.unwrap();

        storage
            .delete_all(&[
                "videos/a/trailer/t.mp4".to_string(),
                "videos/never-stored".to_string(),
            ])
            .await
            .unwrap();
        assert!(storage.is_empty());
    }
}

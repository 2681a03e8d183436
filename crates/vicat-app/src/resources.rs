//! Storage-backed media resource gateway.
//!
//! Resolves a video's media payloads through the storage service using the
//! shared key layout. This is the only production implementation the
//! workspace ships; databases of record keep no binaries.

use std::sync::Arc;

use async_trait::async_trait;

use crate::gateways::MediaResourceGateway;
use vicat_core::models::{Resource, VideoId, VideoMediaType};
use vicat_core::AppError;
use vicat_storage::{keys, Storage};

pub struct StorageMediaResourceGateway {
    storage: Arc<dyn Storage>,
}

impl StorageMediaResourceGateway {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl MediaResourceGateway for StorageMediaResourceGateway {
    async fn get_resource(
        &self,
        video_id: VideoId,
        media_type: VideoMediaType,
    ) -> Result<Option<Resource>, AppError> {
        let prefix = keys::media_prefix(video_id, media_type);
        let stored = self.storage.list(&prefix).await?;
        match stored.first() {
            Some(key) => Ok(self.storage.get(key).await?),
            None => Ok(None),
        }
    }

    async fn clear_resources(&self, video_id: VideoId) -> Result<(), AppError> {
        let prefix = keys::video_prefix(video_id);
        let stored = self.storage.list(&prefix).await?;
        if stored.is_empty() {
            return Ok(());
        }
        self.storage.delete_all(&stored).await?;
        tracing::info!(
            video_id = %video_id,
            object_count = stored.len(),
            "Cleared stored media resources"
        );
        Ok(())
    }
}

//! Local filesystem storage implementation.
//!
//! Objects live under a base directory at their key path; a small JSON
//! sidecar (`{key}.meta`) carries the content type and checksum so a
//! fetched [`Resource`] round-trips completely. Sidecars never appear in
//! listings.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::traits::{Storage, StorageError, StorageResult};
use vicat_core::models::Resource;

const META_SUFFIX: &str = ".meta";

#[derive(Debug, Serialize, Deserialize)]
struct ObjectMeta {
    name: String,
    content_type: String,
    checksum: String,
}

/// Local filesystem storage implementation
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance rooted at `base_path`.
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    /// Convert a storage key to a filesystem path.
    ///
    /// Keys containing path traversal sequences or absolute components are
    /// rejected so no key can escape the base storage directory.
    fn key_to_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() {
            return Err(StorageError::InvalidKey(
                "Storage key must not be empty".to_string(),
            ));
        }
        if key.starts_with('/') || key.split('/').any(|part| part == ".." || part.is_empty()) {
            return Err(StorageError::InvalidKey(
                "Storage key contains invalid path components".to_string(),
            ));
        }

        Ok(self.base_path.join(key))
    }

    async fn ensure_parent_dir(path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    fn meta_path(path: &Path) -> PathBuf {
        let mut os_string = path.as_os_str().to_owned();
        os_string.push(META_SUFFIX);
        PathBuf::from(os_string)
    }

    /// Walk the base directory collecting keys (relative, slash-separated)
    /// that start with `prefix`, excluding metadata sidecars.
    async fn collect_keys(&self, prefix: &str) -> StorageResult<Vec<String>> {
        let mut keys = Vec::new();
        let mut pending = vec![self.base_path.clone()];

        while let Some(dir) = pending.pop() {
            let mut entries = match fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };

            while let Some(entry) = entries.next_entry().await? {
                let path = entry.path();
                if entry.file_type().await?.is_dir() {
                    pending.push(path);
                    continue;
                }

                let relative = path
                    .strip_prefix(&self.base_path)
                    .map_err(|e| StorageError::ReadFailed(e.to_string()))?;
                let key = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");

                if key.starts_with(prefix) && !key.ends_with(META_SUFFIX) {
                    keys.push(key);
                }
            }
        }

        keys.sort();
        Ok(keys)
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn store(&self, key: &str, resource: Resource) -> StorageResult<()> {
        let path = self.key_to_path(key)?;
        let size = resource.content.len();

        Self::ensure_parent_dir(&path).await?;

        let start = std::time::Instant::now();

        fs::write(&path, &resource.content).await.map_err(|e| {
            StorageError::StoreFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        let meta = ObjectMeta {
            name: resource.name.clone(),
            content_type: resource.content_type.clone(),
            checksum: resource.checksum.clone(),
        };
        let meta_json = serde_json::to_vec(&meta)
            .map_err(|e| StorageError::StoreFailed(format!("Failed to encode metadata: {}", e)))?;
        fs::write(Self::meta_path(&path), meta_json)
            .await
            .map_err(|e| {
                StorageError::StoreFailed(format!(
                    "Failed to write metadata for {}: {}",
                    path.display(),
                    e
                ))
            })?;

        tracing::info!(
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage store successful"
        );

        Ok(())
    }

    async fn get(&self, key: &str) -> StorageResult<Option<Resource>> {
        let path = self.key_to_path(key)?;

        let content = match fs::read(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(StorageError::ReadFailed(format!(
                    "Failed to read file {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let meta = match fs::read(Self::meta_path(&path)).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StorageError::ReadFailed(format!("Corrupt metadata: {}", e)))?,
            // An object without a sidecar is still readable; fall back to
            // what the key itself tells us.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => ObjectMeta {
                name: key.rsplit('/').next().unwrap_or(key).to_string(),
                content_type: "application/octet-stream".to_string(),
                checksum: String::new(),
            },
            Err(e) => return Err(e.into()),
        };

        Ok(Some(Resource::new(
            meta.name,
            meta.content_type,
            meta.checksum,
            content,
        )))
    }

    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>> {
        self.collect_keys(prefix).await
    }

    async fn delete_all(&self, keys: &[String]) -> StorageResult<()> {
        for key in keys {
            let path = self.key_to_path(key)?;
            for target in [path.clone(), Self::meta_path(&path)] {
                match fs::remove_file(&target).await {
                    Ok(()) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => {
                        return Err(StorageError::DeleteFailed(format!(
                            "Failed to delete {}: {}",
                            target.display(),
                            e
                        )))
                    }
                }
            }
            tracing::debug!(key = %key, "Local storage delete");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(name: &str, content: &str) -> Resource {
        Resource::new(name, "video/mp4", "sum-1", content.as_bytes().to_vec())
    }

    #[tokio::test]
    async fn test_store_and_get_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        storage
            .store("videos/a/trailer/t.mp4", resource("t.mp4", "bytes"))
            .await
            .unwrap();

        let fetched = storage.get("videos/a/trailer/t.mp4").await.unwrap().unwrap();
        assert_eq!(fetched.name, "t.mp4");
        assert_eq!(fetched.content_type, "video/mp4");
        assert_eq!(fetched.checksum, "sum-1");
        assert_eq!(&fetched.content[..], b"bytes");
    }

    #[tokio::test]
    async fn test_get_missing_key_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();
        assert!(storage.get("videos/missing/v.mp4").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_excludes_metadata_sidecars() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        storage
            .store("videos/a/trailer/t.mp4", resource("t.mp4", "x"))
            .await
            .unwrap();
        storage
            .store("videos/a/video/v.mp4", resource("v.mp4", "y"))
            .await
            .unwrap();
        storage
            .store("videos/b/video/v.mp4", resource("v.mp4", "z"))
            .await
            .unwrap();

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
    async fn test_delete_all_removes_objects_and_sidecars() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        storage
            .store("videos/a/trailer/t.mp4", resource("t.mp4", "x"))
            .await
            .unwrap();
        storage
            .delete_all(&["videos/a/trailer/t.mp4".to_string()])
            .await
            .unwrap();

        assert!(storage.get("videos/a/trailer/t.mp4").await.unwrap().is_none());
        assert!(storage.list("videos/").await.unwrap().is_empty());
        // Deleting again is fine.
        storage
            .delete_all(&["videos/a/trailer/t.mp4".to_string()])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_traversal_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path()).await.unwrap();

        for key in ["../escape", "/absolute", "videos//double", ""] {
            let result = storage.get(key).await;
            assert!(
                matches!(result, Err(StorageError::InvalidKey(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }
}

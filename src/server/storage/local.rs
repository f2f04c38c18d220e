//! Local filesystem blob store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;

use super::backend::{namespaces, validate_key, BlobStore};
use crate::server::error::storage::{StorageError, StorageResult};

/// Local filesystem blob store.
///
/// Stores each namespace in its own directory:
/// ```text
/// {model_dir}/{key}   # namespace "models"
/// {qr_dir}/{key}      # namespace "qrcodes"
/// ```
pub struct LocalBlobStore {
    model_dir: PathBuf,
    qr_dir: PathBuf,
}

impl LocalBlobStore {
    /// Create a new local blob store
    pub fn new(model_dir: PathBuf, qr_dir: PathBuf) -> Self {
        Self { model_dir, qr_dir }
    }

    /// Create the namespace directories if they don't exist yet
    pub async fn ensure_dirs(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.model_dir).await?;
        fs::create_dir_all(&self.qr_dir).await?;
        Ok(())
    }

    fn namespace_dir(&self, namespace: &str) -> StorageResult<&Path> {
        match namespace {
            namespaces::MODELS => Ok(&self.model_dir),
            namespaces::QR_CODES => Ok(&self.qr_dir),
            other => Err(StorageError::UnknownNamespace(other.to_string())),
        }
    }

    fn key_path(&self, namespace: &str, key: &str) -> StorageResult<PathBuf> {
        validate_key(key)?;
        Ok(self.namespace_dir(namespace)?.join(key))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn get(&self, namespace: &str, key: &str) -> StorageResult<Bytes> {
        let path = self.key_path(namespace, key)?;
        let data = fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound {
                    namespace: namespace.to_string(),
                    key: key.to_string(),
                }
            } else {
                StorageError::Io(e)
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn put(&self, namespace: &str, key: &str, data: Bytes) -> StorageResult<()> {
        let path = self.key_path(namespace, key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&path, &data).await?;
        Ok(())
    }

    async fn exists(&self, namespace: &str, key: &str) -> StorageResult<bool> {
        let path = self.key_path(namespace, key)?;
        Ok(fs::try_exists(&path).await?)
    }
}

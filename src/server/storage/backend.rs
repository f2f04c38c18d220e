//! Blob store trait definition.

use async_trait::async_trait;
use bytes::Bytes;

use crate::server::error::storage::{StorageError, StorageResult};

/// Storage backend trait for pluggable blob storage.
///
/// Keys are organized by namespace (see [`namespaces`]) so that model assets and QR
/// images can live in separate locations. Keys are flat: they never contain a path
/// separator.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Get an object by namespace and key
    async fn get(&self, namespace: &str, key: &str) -> StorageResult<Bytes>;

    /// Put an object by namespace and key, replacing any existing object
    async fn put(&self, namespace: &str, key: &str, data: Bytes) -> StorageResult<()>;

    /// Check if an object exists
    async fn exists(&self, namespace: &str, key: &str) -> StorageResult<bool>;
}

/// Storage namespaces
pub mod namespaces {
    /// 3D models, button images, videos and datasheets, served under `/models/files/`
    pub const MODELS: &str = "models";
    /// QR code images, served under `/qrcodes/`
    pub const QR_CODES: &str = "qrcodes";
}

/// Rejects keys that could escape their namespace directory.
pub fn validate_key(key: &str) -> StorageResult<()> {
    if key.is_empty() || key == "." || key == ".." || key.contains(['/', '\\']) {
        return Err(StorageError::InvalidKey(key.to_string()));
    }

    Ok(())
}

//! In-memory blob store.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use super::backend::{namespaces, validate_key, BlobStore};
use crate::server::error::storage::{StorageError, StorageResult};

/// Blob store keeping every object in a process-local map.
#[derive(Default)]
pub struct MemoryBlobStore {
    objects: RwLock<HashMap<(String, String), Bytes>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_namespace(namespace: &str) -> StorageResult<()> {
    match namespace {
        namespaces::MODELS | namespaces::QR_CODES => Ok(()),
        other => Err(StorageError::UnknownNamespace(other.to_string())),
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, namespace: &str, key: &str) -> StorageResult<Bytes> {
        check_namespace(namespace)?;
        validate_key(key)?;

        self.objects
            .read()
            .await
            .get(&(namespace.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                namespace: namespace.to_string(),
                key: key.to_string(),
            })
    }

    async fn put(&self, namespace: &str, key: &str, data: Bytes) -> StorageResult<()> {
        check_namespace(namespace)?;
        validate_key(key)?;

        self.objects
            .write()
            .await
            .insert((namespace.to_string(), key.to_string()), data);
        Ok(())
    }

    async fn exists(&self, namespace: &str, key: &str) -> StorageResult<bool> {
        check_namespace(namespace)?;
        validate_key(key)?;

        Ok(self
            .objects
            .read()
            .await
            .contains_key(&(namespace.to_string(), key.to_string())))
    }
}

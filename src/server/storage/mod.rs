//! Blob storage for uploaded assets.
//!
//! Provides a pluggable storage layer for model files, button images, videos, datasheets
//! and QR images, addressed by namespace and sanitized storage key:
//! - Local filesystem (default), one directory per namespace
//! - In-memory map, for tests and throwaway deployments

mod backend;
mod local;
mod memory;

pub use backend::{namespaces, validate_key, BlobStore};
pub use local::LocalBlobStore;
pub use memory::MemoryBlobStore;

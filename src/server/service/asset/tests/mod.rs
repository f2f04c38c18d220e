
use bytes::Bytes;
use mxlab_test_utils::prelude::*;

use crate::server::{
    data::ar_model::ArModelRepository,
    error::{storage::StorageError, upload::UploadError, Error},
    service::asset::AssetService,
    storage::{namespaces, BlobStore, MemoryBlobStore},
};

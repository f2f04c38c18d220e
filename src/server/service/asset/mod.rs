//! Asset upload and retrieval service.
//!
//! Uploaded files are stored under their sanitized original filename, so uploading the
//! same name twice replaces the earlier file.

#[cfg(test)]
mod tests;

use bytes::Bytes;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::upload::{UploadedAssetDto, UploadedModelFileDto},
    server::{
        data::ar_model::ArModelRepository,
        error::{upload::UploadError, Error},
        storage::{namespaces, BlobStore},
        util::{
            asset::{content_type_for, model_asset_path},
            filename::sanitize_filename,
        },
    },
};

/// A stored file ready to be served.
pub struct StoredFile {
    pub data: Bytes,
    pub content_type: &'static str,
}

pub struct AssetService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn BlobStore,
}

impl<'a> AssetService<'a> {
    /// Creates a new instance of [`AssetService`]
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn BlobStore) -> Self {
        Self { db, storage }
    }

    /// Stores a 3D model file and, if `model_name` exists, points that model at it
    ///
    /// A missing model is not an error; `model_updated` in the response reports whether a
    /// model row was changed.
    ///
    /// # Returns
    /// - `Ok(UploadedModelFileDto)` - Storage key, served URL and whether a model was updated
    /// - `Err(Error::UploadError(EmptyFileName))` - The filename sanitized to nothing
    /// - `Err(Error::StorageError)` - Writing the file failed
    pub async fn upload_model_file(
        &self,
        model_name: &str,
        data: Bytes,
        original_filename: &str,
    ) -> Result<UploadedModelFileDto, Error> {
        let key = self.store(data, original_filename).await?;
        let model_file_url = model_asset_path(&key);

        let updated = ArModelRepository::new(self.db)
            .update_model_file_url(model_name, model_file_url.clone())
            .await?;

        if updated.is_some() {
            tracing::info!("Model {:?} now uses file {:?}", model_name, key);
        } else {
            tracing::debug!(
                "Stored model file {:?}; no model named {:?} to update",
                key,
                model_name
            );
        }

        Ok(UploadedModelFileDto {
            filename: key,
            model_file_url,
            model_name: model_name.to_string(),
            model_updated: updated.is_some(),
        })
    }

    /// Stores a button image, video or datasheet in the model asset namespace
    pub async fn upload_asset(
        &self,
        data: Bytes,
        original_filename: &str,
    ) -> Result<UploadedAssetDto, Error> {
        let key = self.store(data, original_filename).await?;

        tracing::info!("Stored asset {:?}", key);

        Ok(UploadedAssetDto {
            url: model_asset_path(&key),
            filename: key,
        })
    }

    /// Reads a stored file with a content type guessed from its extension
    ///
    /// # Returns
    /// - `Ok(StoredFile)` - The file contents
    /// - `Err(Error::StorageError(NotFound))` - No file is stored under the key
    /// - `Err(Error::StorageError(InvalidKey))` - The key could leave its namespace
    pub async fn fetch(&self, namespace: &str, key: &str) -> Result<StoredFile, Error> {
        let data = self.storage.get(namespace, key).await?;

        Ok(StoredFile {
            data,
            content_type: content_type_for(key),
        })
    }

    async fn store(&self, data: Bytes, original_filename: &str) -> Result<String, Error> {
        let key = sanitize_filename(original_filename);
        if key.is_empty() {
            return Err(UploadError::EmptyFileName(original_filename.to_string()).into());
        }

        self.storage.put(namespaces::MODELS, &key, data).await?;

        Ok(key)
    }
}

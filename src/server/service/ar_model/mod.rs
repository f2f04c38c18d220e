//! Model repository service.
//!
//! Stores complete model trees keyed by their unique name. Writes go through the tree
//! codec, reads come back decoded and, for client-facing lookups, with every button image
//! URL resolved against the configured asset base URL.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::ar_model::ModelDto,
    server::{
        data::ar_model::ArModelRepository,
        error::{ar_model::ArModelError, is_unique_violation, Error},
        tree::{self, resolve_urls},
    },
};

/// Service for creating, renaming and fetching model trees.
pub struct ArModelService<'a> {
    db: &'a DatabaseConnection,
    asset_base_url: &'a str,
}

impl<'a> ArModelService<'a> {
    /// Creates a new instance of ArModelService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `asset_base_url` - Prefix applied to resolved button image URLs, may be empty
    pub fn new(db: &'a DatabaseConnection, asset_base_url: &'a str) -> Self {
        Self { db, asset_base_url }
    }

    /// Persists a new model tree.
    ///
    /// # Returns
    /// - `Ok(ModelDto)` - The tree as stored, with normalized video references and no
    ///   resolved image URLs
    /// - `Err(Error::ArModelError(InvalidPayload))` - The tree failed structural validation
    /// - `Err(Error::ArModelError(AlreadyExists))` - A model with the same name exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create(&self, tree: ModelDto) -> Result<ModelDto, Error> {
        let record = tree::encode(&tree)?;
        let model_repo = ArModelRepository::new(self.db);

        if model_repo.get_by_name(&record.name).await?.is_some() {
            return Err(ArModelError::AlreadyExists(record.name).into());
        }

        let name = record.name.clone();
        let stored = model_repo
            .create(record)
            .await
            .map_err(|e| conflict_or_db(e, &name))?;

        tracing::info!("Created model {:?}", stored.name);

        Ok(tree::decode(&stored)?)
    }

    /// Fetches a model tree by name with every button image URL resolved.
    ///
    /// # Returns
    /// - `Ok(ModelDto)` - The resolved tree
    /// - `Err(Error::ArModelError(NotFound))` - No model has that name
    /// - `Err(Error::ArModelError(CorruptRecord))` - A stored JSON column failed to parse
    pub async fn get(&self, name: &str) -> Result<ModelDto, Error> {
        tracing::debug!("Fetching model {:?}", name);

        let stored = ArModelRepository::new(self.db)
            .get_by_name(name)
            .await?
            .ok_or_else(|| ArModelError::NotFound(name.to_string()))?;

        let mut tree = tree::decode(&stored)?;
        resolve_urls(&mut tree, self.asset_base_url);

        Ok(tree)
    }

    /// Lists every model in insertion order, each resolved.
    ///
    /// A single corrupt record fails the whole listing.
    pub async fn list(&self) -> Result<Vec<ModelDto>, Error> {
        let stored = ArModelRepository::new(self.db).get_all().await?;

        tracing::debug!("Listing {} models", stored.len());

        stored
            .iter()
            .map(|record| {
                let mut tree = tree::decode(record)?;
                resolve_urls(&mut tree, self.asset_base_url);
                Ok(tree)
            })
            .collect()
    }

    /// Replaces the model currently named `name` with `tree`.
    ///
    /// Every field is replaced, including the name. When `tree` carries a different name the
    /// update is a rename and is refused if the new name is already taken. Equipment still
    /// pointing at the old name is not updated and will no longer resolve.
    ///
    /// # Returns
    /// - `Ok(ModelDto)` - The tree as stored
    /// - `Err(Error::ArModelError(NotFound))` - No model has the name `name`
    /// - `Err(Error::ArModelError(AlreadyExists))` - Rename target already exists
    /// - `Err(Error::ArModelError(InvalidPayload))` - The tree failed structural validation
    pub async fn update(&self, name: &str, tree: ModelDto) -> Result<ModelDto, Error> {
        let record = tree::encode(&tree)?;
        let model_repo = ArModelRepository::new(self.db);

        if model_repo.get_by_name(name).await?.is_none() {
            return Err(ArModelError::NotFound(name.to_string()).into());
        }

        let is_rename = record.name != name;
        if is_rename && model_repo.get_by_name(&record.name).await?.is_some() {
            return Err(ArModelError::AlreadyExists(record.name).into());
        }

        let new_name = record.name.clone();
        let stored = model_repo
            .update(name, record)
            .await
            .map_err(|e| conflict_or_db(e, &new_name))?
            .ok_or_else(|| ArModelError::NotFound(name.to_string()))?;

        if is_rename {
            tracing::info!("Renamed model {:?} to {:?}", name, stored.name);
        } else {
            tracing::debug!("Updated model {:?}", stored.name);
        }

        Ok(tree::decode(&stored)?)
    }
}

fn conflict_or_db(err: sea_orm::DbErr, name: &str) -> Error {
    if is_unique_violation(&err) {
        ArModelError::AlreadyExists(name.to_string()).into()
    } else {
        err.into()
    }
}

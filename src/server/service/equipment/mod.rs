//! Equipment directory service.
//!
//! Maps physical tags to model names. Registration is deliberately decoupled from model
//! publishing: a tag may point at a model that does not exist yet, and the gap only
//! surfaces when the tag is resolved.

#[cfg(test)]
mod tests;

use bytes::Bytes;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::equipment::{EquipmentDto, FullEquipmentDto},
    server::{
        data::{ar_model::ArModelRepository, equipment::EquipmentRepository},
        error::{equipment::EquipmentError, is_unique_violation, Error},
        model::db::EquipmentModel,
        storage::{namespaces, BlobStore},
        tree::{self, resolve_urls},
        util::{asset::qr_image_path, filename::sanitize_filename},
    },
};

pub struct EquipmentService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn BlobStore,
    asset_base_url: &'a str,
}

impl<'a> EquipmentService<'a> {
    /// Creates a new instance of [`EquipmentService`]
    pub fn new(
        db: &'a DatabaseConnection,
        storage: &'a dyn BlobStore,
        asset_base_url: &'a str,
    ) -> Self {
        Self {
            db,
            storage,
            asset_base_url,
        }
    }

    /// Registers `tag` for the model named `name`
    ///
    /// The model is not required to exist.
    ///
    /// # Returns
    /// - `Ok(EquipmentDto)` - The registered equipment
    /// - `Err(Error::EquipmentError(AlreadyExists))` - The tag is already registered
    /// - `Err(Error::EquipmentError(InvalidPayload))` - Name or tag is empty
    pub async fn create(&self, name: String, tag: String) -> Result<EquipmentDto, Error> {
        validate(&name, &tag)?;
        let equipment_repo = EquipmentRepository::new(self.db);

        if equipment_repo.get_by_tag(&tag).await?.is_some() {
            return Err(EquipmentError::AlreadyExists(tag).into());
        }

        let equipment = equipment_repo
            .create(name, tag.clone())
            .await
            .map_err(|e| conflict_or_db(e, &tag))?;

        tracing::info!(
            "Registered AR equipment {:?} for model {:?}",
            equipment.tag,
            equipment.name
        );

        Ok(to_dto(equipment))
    }

    pub async fn get_by_tag(&self, tag: &str) -> Result<EquipmentDto, Error> {
        tracing::debug!("Fetching AR equipment {:?}", tag);

        let equipment = self.find(tag).await?;

        Ok(to_dto(equipment))
    }

    /// Lists every registered equipment in registration order
    pub async fn list(&self) -> Result<Vec<EquipmentDto>, Error> {
        let equipments = EquipmentRepository::new(self.db).get_all().await?;

        Ok(equipments.into_iter().map(to_dto).collect())
    }

    /// Changes the model name and tag of the equipment tagged `tag`
    ///
    /// The new model name is not checked for existence. Changing the tag is a rename and
    /// is refused if the new tag is already registered.
    ///
    /// # Returns
    /// - `Ok(EquipmentDto)` - The updated equipment
    /// - `Err(Error::EquipmentError(NotFound))` - No equipment has the tag `tag`
    /// - `Err(Error::EquipmentError(AlreadyExists))` - `new_tag` is taken by other equipment
    pub async fn update(
        &self,
        tag: &str,
        new_name: String,
        new_tag: String,
    ) -> Result<EquipmentDto, Error> {
        validate(&new_name, &new_tag)?;
        self.find(tag).await?;
        let equipment_repo = EquipmentRepository::new(self.db);

        let is_rename = new_tag != tag;
        if is_rename && equipment_repo.get_by_tag(&new_tag).await?.is_some() {
            return Err(EquipmentError::AlreadyExists(new_tag).into());
        }

        let equipment = equipment_repo
            .update(tag, new_name, new_tag.clone())
            .await
            .map_err(|e| conflict_or_db(e, &new_tag))?
            .ok_or_else(|| EquipmentError::NotFound(tag.to_string()))?;

        if is_rename {
            tracing::info!("Renamed AR equipment tag {:?} to {:?}", tag, equipment.tag);
        } else {
            tracing::debug!("Updated AR equipment {:?}", equipment.tag);
        }

        Ok(to_dto(equipment))
    }

    /// Stores a QR image for `tag` and points the equipment at it
    ///
    /// The storage key is the sanitized `"{tag}_{original_filename}"`; uploading again with
    /// the same filename replaces the previous image.
    ///
    /// # Returns
    /// - `Ok(EquipmentDto)` - The equipment with its new `qr_image_url`
    /// - `Err(Error::EquipmentError(NotFound))` - No equipment has the tag, nothing is stored
    /// - `Err(Error::StorageError)` - Writing the image failed
    pub async fn attach_qr_image(
        &self,
        tag: &str,
        image: Bytes,
        original_filename: &str,
    ) -> Result<EquipmentDto, Error> {
        // Checked first so an unknown tag never leaves an orphaned image behind
        self.find(tag).await?;

        let key = sanitize_filename(&format!("{}_{}", tag, original_filename));

        self.storage.put(namespaces::QR_CODES, &key, image).await?;

        let equipment = EquipmentRepository::new(self.db)
            .update_qr_image_url(tag, qr_image_path(&key))
            .await?
            .ok_or_else(|| EquipmentError::NotFound(tag.to_string()))?;

        tracing::info!("Attached QR image {:?} to AR equipment {:?}", key, tag);

        Ok(to_dto(equipment))
    }

    /// Resolves a scanned tag to its equipment and fully resolved model tree
    ///
    /// # Returns
    /// - `Ok(FullEquipmentDto)` - Equipment fields plus the resolved model
    /// - `Err(Error::EquipmentError(NotFound))` - No equipment has the tag
    /// - `Err(Error::EquipmentError(ModelNotFound))` - The equipment references a model
    ///   name that does not exist
    /// - `Err(Error::ArModelError(CorruptRecord))` - The referenced model cannot be decoded
    pub async fn resolve_full(&self, tag: &str) -> Result<FullEquipmentDto, Error> {
        tracing::debug!("Resolving AR equipment {:?}", tag);

        let equipment = self.find(tag).await?;

        let stored = match ArModelRepository::new(self.db)
            .get_by_name(&equipment.name)
            .await?
        {
            Some(stored) => stored,
            None => {
                tracing::warn!(
                    "AR equipment {:?} references model {:?} which does not exist",
                    equipment.tag,
                    equipment.name
                );

                return Err(EquipmentError::ModelNotFound {
                    tag: equipment.tag,
                    name: equipment.name,
                }
                .into());
            }
        };

        let mut model = tree::decode(&stored)?;
        resolve_urls(&mut model, self.asset_base_url);

        Ok(FullEquipmentDto {
            tag: equipment.tag,
            name: equipment.name,
            qr_image_url: equipment.qr_image_url,
            created_at: equipment.created_at,
            model,
        })
    }

    async fn find(&self, tag: &str) -> Result<EquipmentModel, Error> {
        EquipmentRepository::new(self.db)
            .get_by_tag(tag)
            .await?
            .ok_or_else(|| EquipmentError::NotFound(tag.to_string()).into())
    }
}

fn validate(name: &str, tag: &str) -> Result<(), EquipmentError> {
    if name.trim().is_empty() || tag.trim().is_empty() {
        return Err(EquipmentError::InvalidPayload(
            "name and tag must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn conflict_or_db(err: sea_orm::DbErr, tag: &str) -> Error {
    if is_unique_violation(&err) {
        EquipmentError::AlreadyExists(tag.to_string()).into()
    } else {
        err.into()
    }
}

fn to_dto(equipment: EquipmentModel) -> EquipmentDto {
    EquipmentDto {
        name: equipment.name,
        tag: equipment.tag,
        qr_image_url: equipment.qr_image_url,
        created_at: equipment.created_at,
    }
}

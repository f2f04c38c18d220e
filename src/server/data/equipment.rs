use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct EquipmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EquipmentRepository<'a, C> {
    /// Creates a new instance of [`EquipmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a tag for the model named `name`
    ///
    /// The model is not required to exist. Fails with a unique constraint violation if the
    /// tag is already registered.
    pub async fn create(
        &self,
        name: String,
        tag: String,
    ) -> Result<entity::ar_equipment::Model, DbErr> {
        let equipment = entity::ar_equipment::ActiveModel {
            name: ActiveValue::Set(name),
            tag: ActiveValue::Set(tag),
            qr_image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        equipment.insert(self.db).await
    }

    pub async fn get_by_tag(&self, tag: &str) -> Result<Option<entity::ar_equipment::Model>, DbErr> {
        entity::prelude::ArEquipment::find()
            .filter(entity::ar_equipment::Column::Tag.eq(tag))
            .one(self.db)
            .await
    }

    /// Returns every equipment in registration order
    pub async fn get_all(&self) -> Result<Vec<entity::ar_equipment::Model>, DbErr> {
        entity::prelude::ArEquipment::find()
            .order_by_asc(entity::ar_equipment::Column::Id)
            .all(self.db)
            .await
    }

    /// Changes the referenced model name and the tag of the equipment tagged `tag`
    ///
    /// Returns `Ok(None)` if no equipment has that tag.
    pub async fn update(
        &self,
        tag: &str,
        new_name: String,
        new_tag: String,
    ) -> Result<Option<entity::ar_equipment::Model>, DbErr> {
        let equipment = match self.get_by_tag(tag).await? {
            Some(equipment) => equipment,
            None => return Ok(None),
        };

        let mut equipment_am = equipment.into_active_model();
        equipment_am.name = ActiveValue::Set(new_name);
        equipment_am.tag = ActiveValue::Set(new_tag);

        let equipment = equipment_am.update(self.db).await?;

        Ok(Some(equipment))
    }

    /// Sets the QR image URL, leaving every other column untouched
    ///
    /// Returns `Ok(None)` if no equipment has that tag.
    pub async fn update_qr_image_url(
        &self,
        tag: &str,
        qr_image_url: String,
    ) -> Result<Option<entity::ar_equipment::Model>, DbErr> {
        let equipment = match self.get_by_tag(tag).await? {
            Some(equipment) => equipment,
            None => return Ok(None),
        };

        let mut equipment_am = equipment.into_active_model();
        equipment_am.qr_image_url = ActiveValue::Set(Some(qr_image_url));

        let equipment = equipment_am.update(self.db).await?;

        Ok(Some(equipment))
    }
}

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::ArModelRecord;

pub struct ArModelRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArModelRepository<'a, C> {
    /// Creates a new instance of [`ArModelRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new model row
    ///
    /// Fails with a unique constraint violation if a model with the same name exists.
    pub async fn create(&self, record: ArModelRecord) -> Result<entity::ar_model::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let model = entity::ar_model::ActiveModel {
            name: ActiveValue::Set(record.name),
            model_file_url: ActiveValue::Set(record.model_file_url),
            description_json: ActiveValue::Set(record.description_json),
            video: ActiveValue::Set(record.video),
            datasheet_url: ActiveValue::Set(record.datasheet_url),
            buttons_json: ActiveValue::Set(record.buttons_json),
            parts_json: ActiveValue::Set(record.parts_json),
            uploaded_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        model.insert(self.db).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Option<entity::ar_model::Model>, DbErr> {
        entity::prelude::ArModel::find()
            .filter(entity::ar_model::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Returns every model in insertion order
    pub async fn get_all(&self) -> Result<Vec<entity::ar_model::Model>, DbErr> {
        entity::prelude::ArModel::find()
            .order_by_asc(entity::ar_model::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every column of the model currently named `name`, including the name itself
    ///
    /// Returns `Ok(None)` if no model has that name.
    pub async fn update(
        &self,
        name: &str,
        record: ArModelRecord,
    ) -> Result<Option<entity::ar_model::Model>, DbErr> {
        let model = match self.get_by_name(name).await? {
            Some(model) => model,
            None => return Ok(None),
        };

        let mut model_am = model.into_active_model();
        model_am.name = ActiveValue::Set(record.name);
        model_am.model_file_url = ActiveValue::Set(record.model_file_url);
        model_am.description_json = ActiveValue::Set(record.description_json);
        model_am.video = ActiveValue::Set(record.video);
        model_am.datasheet_url = ActiveValue::Set(record.datasheet_url);
        model_am.buttons_json = ActiveValue::Set(record.buttons_json);
        model_am.parts_json = ActiveValue::Set(record.parts_json);
        model_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let model = model_am.update(self.db).await?;

        Ok(Some(model))
    }

    /// Points a model at a newly uploaded 3D asset
    ///
    /// Returns `Ok(None)` if no model has that name.
    pub async fn update_model_file_url(
        &self,
        name: &str,
        model_file_url: String,
    ) -> Result<Option<entity::ar_model::Model>, DbErr> {
        let model = match self.get_by_name(name).await? {
            Some(model) => model,
            None => return Ok(None),
        };

        let mut model_am = model.into_active_model();
        model_am.model_file_url = ActiveValue::Set(Some(model_file_url));
        model_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let model = model_am.update(self.db).await?;

        Ok(Some(model))
    }
}

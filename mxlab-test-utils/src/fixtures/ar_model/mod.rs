pub mod factory;

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::StoredArModel, TestContext};

impl TestContext {
    pub fn model<'a>(&'a self) -> ArModelFixtures<'a> {
        ArModelFixtures { context: self }
    }
}

pub struct ArModelFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> ArModelFixtures<'a> {
    /// Insert a model with no asset, no description and no buttons or parts.
    pub async fn insert_mock_model(&self, name: &str) -> Result<StoredArModel, TestError> {
        self.insert_model_with_columns(name, None, None, None).await
    }

    /// Insert a model with the JSON columns stored verbatim.
    ///
    /// Columns are written without validation, which lets tests seed records the codec
    /// would refuse to produce.
    pub async fn insert_model_with_columns(
        &self,
        name: &str,
        description_json: Option<&str>,
        buttons_json: Option<&str>,
        parts_json: Option<&str>,
    ) -> Result<StoredArModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::ArModel::insert(entity::ar_model::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                model_file_url: ActiveValue::Set(None),
                description_json: ActiveValue::Set(description_json.map(str::to_string)),
                video: ActiveValue::Set(None),
                datasheet_url: ActiveValue::Set(None),
                buttons_json: ActiveValue::Set(buttons_json.map(str::to_string)),
                parts_json: ActiveValue::Set(parts_json.map(str::to_string)),
                uploaded_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::EquipmentModel, TestContext};

impl TestContext {
    pub fn equipment<'a>(&'a self) -> EquipmentFixtures<'a> {
        EquipmentFixtures { context: self }
    }
}

pub struct EquipmentFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> EquipmentFixtures<'a> {
    /// Insert an equipment row without a QR image.
    pub async fn insert_mock_equipment(
        &self,
        name: &str,
        tag: &str,
    ) -> Result<EquipmentModel, TestError> {
        Ok(
            entity::prelude::ArEquipment::insert(entity::ar_equipment::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                tag: ActiveValue::Set(tag.to_string()),
                qr_image_url: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}

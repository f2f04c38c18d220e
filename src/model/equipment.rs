use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::ar_model::ModelDto;

/// Request body for registering or renaming equipment.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EquipmentRequestDto {
    /// Name of the model this tag should resolve to
    pub name: String,
    pub tag: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EquipmentDto {
    pub name: String,
    pub tag: String,
    pub qr_image_url: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Everything the AR client needs after scanning a tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FullEquipmentDto {
    pub tag: String,
    pub name: String,
    pub qr_image_url: Option<String>,
    pub created_at: NaiveDateTime,
    /// Model tree with every asset URL resolved
    pub model: ModelDto,
}

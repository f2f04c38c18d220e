use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UploadedModelFileDto {
    /// Storage key the file was saved under
    pub filename: String,
    pub model_file_url: String,
    pub model_name: String,
    /// Whether a model with `model_name` existed and now points at the file
    pub model_updated: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UploadedAssetDto {
    /// Storage key the file was saved under
    pub filename: String,
    pub url: String,
}

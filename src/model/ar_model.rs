use serde::{Deserialize, Deserializer, Serialize};

/// A model and its nested parts as exchanged with the CMS and the AR client.
///
/// The model name travels as `id` on the wire; `name` is accepted as an alias
/// on input. Collections that arrive as `null` or are omitted decode as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelDto {
    /// Unique model name, e.g. "Vanne De Regulation"
    #[serde(rename = "id", alias = "name")]
    pub name: String,
    /// Path to the 3D asset, e.g. `/models/files/valve.glb`
    #[serde(default)]
    pub model_file_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: Vec<DescriptionItemDto>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub datasheet_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub buttons: Vec<ButtonDto>,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schema(no_recursion)]
    pub parts: Vec<ModelDto>,
}

/// A single `key: value` line of a model description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DescriptionItemDto {
    pub key: String,
    pub value: String,
}

/// An interactive hotspot rendered on a model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ButtonDto {
    pub id: String,
    /// Bare filename or absolute path of the button image
    #[serde(default)]
    pub image_file_name: String,
    /// Client-fetchable image URL, only present on responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Deserializes `null` or a missing value as an empty collection.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

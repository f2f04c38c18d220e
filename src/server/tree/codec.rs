//! Conversion between model trees and their flat stored form.

use serde::{Deserialize, Serialize};

use crate::{
    model::ar_model::{null_as_empty, ButtonDto, DescriptionItemDto, ModelDto},
    server::{
        error::ar_model::ArModelError,
        model::db::{ArModelRecord, StoredArModel},
        tree::depth,
        util::asset::{is_external_url, model_asset_path},
    },
};

/// Deepest hierarchy accepted on write and on read, the root counting as level 1.
pub const MAX_TREE_DEPTH: usize = 32;

/// Stored shape of a nested part inside `parts_json`.
///
/// Mirrors the wire shape of [`ModelDto`] minus the derived `imageUrl`, so resolved URLs
/// can never be persisted.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartRecord {
    id: String,
    #[serde(default)]
    model_file_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    description: Vec<DescriptionItemDto>,
    #[serde(default)]
    video: Option<String>,
    #[serde(default)]
    datasheet_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    buttons: Vec<ButtonRecord>,
    #[serde(default, deserialize_with = "null_as_empty")]
    parts: Vec<PartRecord>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ButtonRecord {
    id: String,
    #[serde(default)]
    image_file_name: String,
}

impl From<&ButtonDto> for ButtonRecord {
    fn from(button: &ButtonDto) -> Self {
        Self {
            id: button.id.clone(),
            image_file_name: button.image_file_name.clone(),
        }
    }
}

impl From<ButtonRecord> for ButtonDto {
    fn from(record: ButtonRecord) -> Self {
        Self {
            id: record.id,
            image_file_name: record.image_file_name,
            image_url: None,
        }
    }
}

impl From<&ModelDto> for PartRecord {
    fn from(part: &ModelDto) -> Self {
        Self {
            id: part.name.clone(),
            model_file_url: part.model_file_url.clone(),
            description: part.description.clone(),
            video: normalize_video(part.video.as_deref()),
            datasheet_url: part.datasheet_url.clone(),
            buttons: part.buttons.iter().map(ButtonRecord::from).collect(),
            parts: part.parts.iter().map(PartRecord::from).collect(),
        }
    }
}

impl From<PartRecord> for ModelDto {
    fn from(record: PartRecord) -> Self {
        Self {
            name: record.id,
            model_file_url: record.model_file_url,
            description: record.description,
            video: record.video,
            datasheet_url: record.datasheet_url,
            buttons: record.buttons.into_iter().map(ButtonDto::from).collect(),
            parts: record.parts.into_iter().map(ModelDto::from).collect(),
        }
    }
}

/// Prefixes a bare video filename with the canonical model asset path.
///
/// Absolute paths (including those already under `/models/files/`) and external
/// `http(s)://` URLs are returned unchanged.
pub fn normalize_video(video: Option<&str>) -> Option<String> {
    let video = video?;

    // Absolute paths include everything already under the canonical prefix
    if video.is_empty() || video.starts_with('/') || is_external_url(video) {
        return Some(video.to_string());
    }

    Some(model_asset_path(video))
}

/// Validates a submitted tree and flattens it into its stored record.
///
/// Every node's video reference is normalized with [`normalize_video`]. Empty
/// collections are stored as `None`.
///
/// # Returns
/// - `Ok(ArModelRecord)` - Record ready to be persisted
/// - `Err(ArModelError::InvalidPayload)` - A node has an empty name or the tree exceeds
///   [`MAX_TREE_DEPTH`]
pub fn encode(tree: &ModelDto) -> Result<ArModelRecord, ArModelError> {
    validate(tree)?;

    Ok(ArModelRecord {
        name: tree.name.clone(),
        model_file_url: tree.model_file_url.clone(),
        description_json: encode_column(&tree.description)?,
        video: normalize_video(tree.video.as_deref()),
        datasheet_url: tree.datasheet_url.clone(),
        buttons_json: encode_column(
            &tree
                .buttons
                .iter()
                .map(ButtonRecord::from)
                .collect::<Vec<_>>(),
        )?,
        parts_json: encode_column(&tree.parts.iter().map(PartRecord::from).collect::<Vec<_>>())?,
    })
}

/// Rebuilds the full tree from a stored row.
///
/// Absent columns decode as empty collections. Buttons come back without `image_url`;
/// run [`resolve_urls`](crate::server::tree::resolve_urls) before handing the tree to a
/// client.
///
/// # Returns
/// - `Ok(ModelDto)` - The complete tree, every nested part included
/// - `Err(ArModelError::CorruptRecord)` - A JSON column failed to parse or the stored
///   hierarchy exceeds [`MAX_TREE_DEPTH`]
pub fn decode(record: &StoredArModel) -> Result<ModelDto, ArModelError> {
    let description: Vec<DescriptionItemDto> = decode_column(
        &record.name,
        "description_json",
        record.description_json.as_deref(),
    )?;
    let buttons: Vec<ButtonRecord> =
        decode_column(&record.name, "buttons_json", record.buttons_json.as_deref())?;
    let parts: Vec<PartRecord> =
        decode_column(&record.name, "parts_json", record.parts_json.as_deref())?;

    let tree = ModelDto {
        name: record.name.clone(),
        model_file_url: record.model_file_url.clone(),
        description,
        video: record.video.clone(),
        datasheet_url: record.datasheet_url.clone(),
        buttons: buttons.into_iter().map(ButtonDto::from).collect(),
        parts: parts.into_iter().map(ModelDto::from).collect(),
    };

    if depth(&tree) > MAX_TREE_DEPTH {
        return Err(ArModelError::CorruptRecord {
            name: record.name.clone(),
            column: "parts_json",
            reason: format!("hierarchy is deeper than {} levels", MAX_TREE_DEPTH),
        });
    }

    Ok(tree)
}

fn validate(tree: &ModelDto) -> Result<(), ArModelError> {
    if depth(tree) > MAX_TREE_DEPTH {
        return Err(ArModelError::InvalidPayload(format!(
            "model {:?} is nested deeper than {} levels",
            tree.name, MAX_TREE_DEPTH
        )));
    }

    validate_names(tree)
}

fn validate_names(node: &ModelDto) -> Result<(), ArModelError> {
    if node.name.trim().is_empty() {
        return Err(ArModelError::InvalidPayload(
            "model and part names must not be empty".to_string(),
        ));
    }

    node.parts.iter().try_for_each(validate_names)
}

fn encode_column<T: Serialize>(items: &[T]) -> Result<Option<String>, ArModelError> {
    if items.is_empty() {
        return Ok(None);
    }

    serde_json::to_string(items)
        .map(Some)
        .map_err(|e| ArModelError::InvalidPayload(e.to_string()))
}

fn decode_column<T>(
    name: &str,
    column: &'static str,
    json: Option<&str>,
) -> Result<Vec<T>, ArModelError>
where
    T: for<'de> Deserialize<'de>,
{
    let Some(json) = json else {
        return Ok(Vec::new());
    };

    serde_json::from_str::<Option<Vec<T>>>(json)
        .map(Option::unwrap_or_default)
        .map_err(|e| ArModelError::CorruptRecord {
            name: name.to_string(),
            column,
            reason: e.to_string(),
        })
}

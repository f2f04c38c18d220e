//! Database model type aliases and write records.
//!
//! These aliases provide a single point of reference for the SeaORM entity models
//! generated in the `entity` crate.

/// Type alias for a stored model row.
///
/// # Fields (from `entity::ar_model::Model`)
/// - `id` - Primary key
/// - `name` - Unique model name
/// - `model_file_url` - Path to the 3D asset (nullable)
/// - `description_json` - JSON array of `{key, value}` pairs (nullable)
/// - `video` - Video reference (nullable)
/// - `datasheet_url` - Datasheet reference (nullable)
/// - `buttons_json` - JSON array of `{id, imageFileName}` (nullable)
/// - `parts_json` - JSON array of complete child model trees (nullable)
/// - `uploaded_at` - Timestamp when the model was first created
/// - `updated_at` - Timestamp of the last full replace
pub type StoredArModel = entity::ar_model::Model;

/// Type alias for a stored equipment row.
///
/// # Fields (from `entity::ar_equipment::Model`)
/// - `id` - Primary key
/// - `name` - Name of the referenced model, not enforced by a foreign key
/// - `tag` - Unique physical tag
/// - `qr_image_url` - Path to the attached QR image (nullable)
/// - `created_at` - Timestamp when the equipment was registered
pub type EquipmentModel = entity::ar_equipment::Model;

/// Flattened write-side representation of a model tree.
///
/// Produced by the tree codec and persisted as a single row; every `*_json` column is
/// `None` when its collection is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArModelRecord {
    pub name: String,
    pub model_file_url: Option<String>,
    pub description_json: Option<String>,
    pub video: Option<String>,
    pub datasheet_url: Option<String>,
    pub buttons_json: Option<String>,
    pub parts_json: Option<String>,
}

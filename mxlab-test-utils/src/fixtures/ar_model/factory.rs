//! Factory functions for generating mock model database rows.

use chrono::Utc;

use crate::model::StoredArModel;

/// Create a mock model database row for testing.
///
/// Returns a model with an empty tree. This creates an in-memory instance without
/// database interaction, suitable for codec unit tests.
///
/// # Arguments
/// - `name` - The model name
pub fn mock_ar_model(name: &str) -> StoredArModel {
    let now = Utc::now().naive_utc();
    StoredArModel {
        id: 1,
        name: name.to_string(),
        model_file_url: None,
        description_json: None,
        video: None,
        datasheet_url: None,
        buttons_json: None,
        parts_json: None,
        uploaded_at: now,
        updated_at: now,
    }
}

/// Create a mock model row with the given JSON column values.
pub fn mock_ar_model_with_json(
    name: &str,
    description: Option<serde_json::Value>,
    buttons: Option<serde_json::Value>,
    parts: Option<serde_json::Value>,
) -> StoredArModel {
    StoredArModel {
        description_json: description.map(|v| v.to_string()),
        buttons_json: buttons.map(|v| v.to_string()),
        parts_json: parts.map(|v| v.to_string()),
        ..mock_ar_model(name)
    }
}

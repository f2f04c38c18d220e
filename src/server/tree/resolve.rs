//! Read-time expansion of asset references into client-fetchable URLs.

use crate::{
    model::ar_model::{ButtonDto, ModelDto},
    server::util::asset::model_asset_path,
};

/// Sets `image_url` on every button of the tree, recursing through all parts.
///
/// - Empty `image_file_name`: skipped, no `image_url`.
/// - Absolute path (`/...`): `image_file_name` is reduced to its last segment and
///   `image_url` becomes `base_url + path`, or the path itself when it already starts
///   with a non-empty `base_url`.
/// - Bare filename: `image_url` becomes `base_url + "/models/files/" + filename`.
///
/// Only apply this to trees on their way to a client; persisting a resolved tree would
/// bake absolute URLs into storage.
pub fn resolve_urls(tree: &mut ModelDto, base_url: &str) {
    for button in &mut tree.buttons {
        resolve_button(button, base_url);
    }

    for part in &mut tree.parts {
        resolve_urls(part, base_url);
    }
}

fn resolve_button(button: &mut ButtonDto, base_url: &str) {
    if button.image_file_name.is_empty() {
        return;
    }

    if button.image_file_name.starts_with('/') {
        let path = std::mem::take(&mut button.image_file_name);
        button.image_file_name = path.rsplit('/').next().unwrap_or_default().to_string();

        button.image_url = if !base_url.is_empty() && path.starts_with(base_url) {
            Some(path)
        } else {
            Some(format!("{}{}", base_url, path))
        };
    } else {
        button.image_url = Some(format!(
            "{}{}",
            base_url,
            model_asset_path(&button.image_file_name)
        ));
    }
}

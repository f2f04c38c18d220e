/// Canonical URL path prefix for files in the `models` namespace.
///
/// Shared by the tree codec (video normalization on write) and the URL resolver (button
/// image normalization on read).
pub static MODEL_ASSET_PREFIX: &str = "/models/files/";

/// URL path prefix for files in the `qrcodes` namespace.
pub static QR_IMAGE_PREFIX: &str = "/qrcodes/";

/// Path a stored model asset is served from
pub fn model_asset_path(key: &str) -> String {
    format!("{}{}", MODEL_ASSET_PREFIX, key)
}

/// Path a stored QR image is served from
pub fn qr_image_path(key: &str) -> String {
    format!("{}{}", QR_IMAGE_PREFIX, key)
}

/// Returns true for `http://` and `https://` references.
pub fn is_external_url(reference: &str) -> bool {
    let lower = reference.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Guesses the `Content-Type` of a stored file from its extension.
pub fn content_type_for(key: &str) -> &'static str {
    let extension = key
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "glb" => "model/gltf-binary",
        "gltf" => "model/gltf+json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
}

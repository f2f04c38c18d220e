use axum::extract::Multipart;
use bytes::Bytes;

use crate::server::error::upload::UploadError;

/// Name of the multipart field every upload endpoint reads.
pub static FILE_FIELD: &str = "file";

/// File read from a multipart upload, before sanitization
pub struct UploadedFile {
    pub filename: String,
    pub data: Bytes,
}

/// OpenAPI description of the single-file upload form.
#[derive(utoipa::ToSchema)]
#[allow(dead_code)]
pub struct FileUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Reads the first `file` field of a multipart body, skipping any other fields
///
/// # Returns
/// - `Ok(UploadedFile)` - The original filename and contents
/// - `Err(UploadError::MissingFile)` - The body has no `file` field
/// - `Err(UploadError::MissingFileName)` - The `file` field carries no filename
/// - `Err(UploadError::Multipart)` - The body is not valid multipart
pub async fn read_file_field(multipart: &mut Multipart) -> Result<UploadedFile, UploadError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or(UploadError::MissingFileName)?;
        let data = field.bytes().await?;

        return Ok(UploadedFile { filename, data });
    }

    Err(UploadError::MissingFile)
}

use uuid::Uuid;

use crate::constants::DEFAULT_UPLOAD_EXTENSION;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Extension of the client-supplied filename, or the default one when the
/// hint is missing or carries no usable extension.
pub fn file_extension(file_name: Option<&str>) -> &str {
    file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or(DEFAULT_UPLOAD_EXTENSION)
}

/// Globally unique object name: a random v4 UUID plus the original extension.
pub fn generate_object_name(file_name: Option<&str>) -> String {
    format!("{}.{}", Uuid::new_v4(), file_extension(file_name))
}

/// MIME type detected from the file's magic bytes.
pub fn sniff_content_type(bytes: &[u8]) -> &'static str {
    infer::get(bytes)
        .map(|kind| kind.mime_type())
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}

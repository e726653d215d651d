use actix_multipart::form::{bytes::Bytes as MpBytes, MultipartForm};
use serde::{Deserialize, Serialize};

/// Multipart body of `POST /coolstuff/upload`.
#[derive(Debug, MultipartForm)]
pub struct ImageUploadForm {
    #[multipart(rename = "file")]
    pub file: MpBytes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
    pub filename: String,
}

use actix_multipart::form::MultipartFormConfig;

use crate::{errors::AppError, settings::AppConfig};

/// Upload forms are buffered in memory, so both limits follow the configured cap.
pub fn upload_form_config(config: &AppConfig) -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(config.max_upload_bytes)
        .memory_limit(config.max_upload_bytes)
        .error_handler(|err, _req| {
            AppError::BadRequest(format!("Invalid upload: {}", err)).into()
        })
}

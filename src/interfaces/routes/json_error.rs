use actix_web::{error::JsonPayloadError, web};

use crate::errors::AppError;

/// Malformed or mistyped JSON bodies become a 400 with the parser's message.
pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::from(err).into()
    }));
}

impl From<JsonPayloadError> for AppError {
    fn from(err: JsonPayloadError) -> Self {
        AppError::BadRequest(format!("JSON payload error: {}", err))
    }
}

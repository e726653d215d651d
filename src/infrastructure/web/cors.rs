use actix_cors::Cors;

use crate::settings::AppConfig;

/// Configured frontend plus local development, credentials allowed,
/// any method and header.
pub fn build_cors(config: &AppConfig) -> Cors {
    config
        .cors_origins()
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Origin of the frontend dev server, always allowed by CORS.
pub const LOCAL_DEV_ORIGIN: &str = "http://localhost:3000";

/// Extension used for uploads whose filename carries none.
pub const DEFAULT_UPLOAD_EXTENSION: &str = "jpg";

pub const API_PREFIX: &str = "/api";

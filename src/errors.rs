use std::fmt;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;

#[derive(Debug)]
pub enum AppError {
    Unauthenticated(String),
    Forbidden(String),
    NotFound(String),
    BadRequest(String),
    InternalError(String),
}

impl AppError {
    /// Machine-readable error code used in response bodies.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthenticated(_) => "unauthenticated",
            AppError::Forbidden(_) => "forbidden",
            AppError::NotFound(_) => "not_found",
            AppError::BadRequest(_) => "bad_request",
            AppError::InternalError(_) => "internal_server_error",
        }
    }

    /// Human-readable detail string.
    pub fn detail(&self) -> &str {
        match self {
            AppError::Unauthenticated(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthenticated(msg) => write!(f, "Unauthenticated: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(serde_json::json!({
                "error": self.code(),
                "detail": self.detail()
            }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failures raised by the admin gate.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum AuthError {
    #[display("Missing or malformed Authorization header")]
    MissingCredentials,

    #[display("{_0}")]
    InvalidToken(String),

    #[display("{_0}")]
    Forbidden(String),

    #[display("Authorization gate unavailable")]
    MissingGate,
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredentials | AuthError::InvalidToken(_) => {
                AppError::Unauthenticated(err.to_string())
            }
            AuthError::Forbidden(_) => AppError::Forbidden(err.to_string()),
            AuthError::MissingGate => AppError::InternalError(err.to_string()),
        }
    }
}

impl ResponseError for AuthError {
    fn error_response(&self) -> HttpResponse {
        AppError::from(self.clone()).error_response()
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            AuthError::MissingCredentials => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden(_) => StatusCode::FORBIDDEN,
            AuthError::MissingGate => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Errors reported by the hosted table API.
#[derive(Debug, Display)]
pub enum StoreError {
    #[display("Data store unreachable: {_0}")]
    Transport(String),

    #[display("Data store rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[display("Unexpected data store response: {_0}")]
    Decode(String),

    #[display("Data client configuration error: {_0}")]
    Configuration(String),
}

impl std::error::Error for StoreError {}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else if err.is_builder() {
            StoreError::Configuration(err.to_string())
        } else {
            StoreError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Decode(err.to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Errors reported by the hosted object storage.
#[derive(Debug, Display)]
pub enum StorageError {
    #[display("storage unreachable: {_0}")]
    Transport(String),

    #[display("storage rejected object ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl std::error::Error for StorageError {}

impl From<reqwest::Error> for StorageError {
    fn from(err: reqwest::Error) -> Self {
        StorageError::Transport(err.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::BadRequest(format!("Upload failed: {}", err))
    }
}

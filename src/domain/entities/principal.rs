use serde::{Deserialize, Serialize};

/// The user behind a bearer token, as reported by the identity service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

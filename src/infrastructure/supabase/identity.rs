use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

use crate::{
    entities::principal::Principal,
    errors::AuthError,
    repositories::identity::IdentityProvider,
};

use super::client::{error_message, SupabaseClient};

/// Resolves access tokens through the hosted identity service.
#[derive(Clone)]
pub struct SupabaseIdentity {
    client: SupabaseClient,
}

impl SupabaseIdentity {
    pub fn new(client: SupabaseClient) -> Self {
        SupabaseIdentity { client }
    }
}

#[async_trait]
impl IdentityProvider for SupabaseIdentity {
    async fn resolve_user(&self, token: &str) -> Result<Option<Principal>, AuthError> {
        let response = self.client
            .as_user(Method::GET, "auth/v1/user", token)
            .send()
            .await
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Identity service refused token");
            return Err(AuthError::InvalidToken(error_message(&raw)));
        }

        let body: Value = serde_json::from_str(&raw)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        // The service answers `null` or an object without an id for unknown users
        if body.get("id").and_then(Value::as_str).is_none() {
            return Ok(None);
        }

        serde_json::from_value(body)
            .map(Some)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

use async_trait::async_trait;

use crate::{entities::principal::Principal, errors::AuthError};

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolves a bearer token to its user; `Ok(None)` when the service knows no such user
    async fn resolve_user(&self, token: &str) -> Result<Option<Principal>, AuthError>;
}

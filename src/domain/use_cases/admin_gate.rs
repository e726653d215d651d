use tracing::warn;

use crate::{
    entities::principal::Principal,
    errors::AuthError,
    repositories::identity::IdentityProvider,
};

/// Lets a request through only when its bearer token belongs to the
/// configured admin address.
pub struct AdminGate<I>
where
    I: IdentityProvider,
{
    pub identity: I,
    admin_email: String,
}

impl<I> AdminGate<I>
where
    I: IdentityProvider,
{
    pub fn new(identity: I, admin_email: impl Into<String>) -> Self {
        AdminGate {
            identity,
            admin_email: admin_email.into(),
        }
    }

    /// Resolves `token` and checks the principal's email, case-sensitively.
    /// Every lookup failure is reported as an invalid token.
    pub async fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        if token.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let principal = self.identity
            .resolve_user(token)
            .await?
            .ok_or_else(|| AuthError::InvalidToken("Invalid token".into()))?;

        if principal.email.as_deref() != Some(self.admin_email.as_str()) {
            warn!(user_id = %principal.id, "Non-admin principal attempted a write");
            return Err(AuthError::Forbidden("Not admin".into()));
        }

        Ok(principal)
    }
}

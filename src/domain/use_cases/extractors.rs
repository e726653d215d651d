use actix_web::{FromRequest, HttpRequest, HttpMessage};
use futures_util::future::{ready, Ready};

use crate::{entities::principal::Principal, errors::AuthError};

/// Extractor for the admin principal verified by `AdminMiddleware`.
/// Returns 401 if the middleware did not admit the request.
/// Usage: Add `admin: AdminPrincipal` as a parameter to your handler function.
#[derive(Debug)]
pub struct AdminPrincipal(pub Principal);

impl FromRequest for AdminPrincipal {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<Principal>() {
            Some(principal) => ready(Ok(AdminPrincipal(principal.clone()))),
            None => ready(Err(AuthError::MissingCredentials.into())),
        }
    }
}

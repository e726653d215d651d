use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::Method,
    web, Error, HttpMessage, ResponseError,
};
use futures_util::future::{ok, Ready, LocalBoxFuture};
use std::{rc::Rc, task::{Context, Poll}};

use crate::{constants::API_PREFIX, errors::AuthError, AppState};

/// Runs the admin gate for every mutating request under the API prefix and
/// stores the verified `Principal` in the request extensions.
pub struct AdminMiddleware;

impl<S> Transform<S, ServiceRequest> for AdminMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AdminMiddlewareService {
            service: Rc::new(service),
        })
    }
}

pub struct AdminMiddlewareService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AdminMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            if !requires_admin(req.path(), req.method()) {
                return service.call(req).await;
            }

            let path = req.path().to_string();

            let Some(state) = req.app_data::<web::Data<AppState>>().cloned() else {
                tracing::error!("AppState missing in middleware");
                return Ok(reject(req, AuthError::MissingGate));
            };

            let Some(token) = extract_token(&req) else {
                tracing::warn!(%path, "Missing or malformed Authorization header");
                return Ok(reject(req, AuthError::MissingCredentials));
            };

            match state.admin_gate.verify(&token).await {
                Ok(principal) => {
                    tracing::debug!(%path, user_id = %principal.id, "Admin request admitted");
                    req.extensions_mut().insert(principal);
                    service.call(req).await
                }
                Err(e) => {
                    tracing::warn!(%path, "Admin check failed: {}", e);
                    Ok(reject(req, e))
                }
            }
        })
    }
}

/// Reads are public; every other method under the API prefix needs the admin.
pub fn requires_admin(path: &str, method: &Method) -> bool {
    if matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS) {
        return false;
    }

    path == API_PREFIX || path.starts_with(&format!("{API_PREFIX}/"))
}

fn extract_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}

fn reject(req: ServiceRequest, err: AuthError) -> ServiceResponse<BoxBody> {
    req.into_response(err.error_response())
}

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::content::ContentUpdate,
    errors::AppError,
    use_cases::extractors::AdminPrincipal,
    AppState,
};

#[instrument(skip(state))]
pub async fn get_content(
    content_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let content = state.content_handler.get_content(&content_id).await?;
    Ok(HttpResponse::Ok().json(content))
}

#[instrument(skip(state))]
pub async fn get_all_content(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let content = state.content_handler.get_all_content().await?;
    Ok(HttpResponse::Ok().json(content))
}

#[instrument(skip(_admin, state, data))]
pub async fn upsert_content(
    _admin: AdminPrincipal,
    content_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<ContentUpdate>,
) -> Result<impl Responder, AppError> {
    let content = state.content_handler
        .upsert_content(&content_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(content))
}

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::experience::{NewExperienceRequest, NewRoleRequest, UpdateExperienceRequest},
    errors::AppError,
    use_cases::extractors::AdminPrincipal,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_experiences(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let experiences = state.experience_handler.list_experiences().await?;
    Ok(HttpResponse::Ok().json(experiences))
}

#[instrument(skip(_admin, state, data))]
pub async fn create_experience(
    _admin: AdminPrincipal,
    state: web::Data<AppState>,
    data: web::Json<NewExperienceRequest>,
) -> Result<impl Responder, AppError> {
    let experience = state.experience_handler
        .create_experience(data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(experience))
}

#[instrument(skip(_admin, state, data))]
pub async fn update_experience(
    _admin: AdminPrincipal,
    experience_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateExperienceRequest>,
) -> Result<impl Responder, AppError> {
    let experience = state.experience_handler
        .update_experience(&experience_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(experience))
}

#[instrument(skip(_admin, state))]
pub async fn delete_experience(
    _admin: AdminPrincipal,
    experience_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.experience_handler.delete_experience(&experience_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"message": "Experience deleted"})))
}

#[instrument(skip(_admin, state, data))]
pub async fn add_role(
    _admin: AdminPrincipal,
    experience_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<NewRoleRequest>,
) -> Result<impl Responder, AppError> {
    let role = state.experience_handler
        .add_role(&experience_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(role))
}

#[instrument(skip(_admin, state))]
pub async fn delete_role(
    _admin: AdminPrincipal,
    role_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.experience_handler.delete_role(&role_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"message": "Role deleted"})))
}

use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::{
        cool_stuff::{NewCoolStuffRequest, UpdateCoolStuffRequest},
        upload::ImageUploadForm,
    },
    errors::AppError,
    use_cases::extractors::AdminPrincipal,
    AppState,
};

#[instrument(skip(state))]
pub async fn list_cool_stuff(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let items = state.cool_stuff_handler.list_cool_stuff().await?;
    Ok(HttpResponse::Ok().json(items))
}

#[instrument(skip(_admin, state, data))]
pub async fn create_cool_stuff(
    _admin: AdminPrincipal,
    state: web::Data<AppState>,
    data: web::Json<NewCoolStuffRequest>,
) -> Result<impl Responder, AppError> {
    let item = state.cool_stuff_handler.create_cool_stuff(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(item))
}

#[instrument(skip(_admin, state, form))]
pub async fn upload_image(
    _admin: AdminPrincipal,
    state: web::Data<AppState>,
    form: MultipartForm<ImageUploadForm>,
) -> Result<impl Responder, AppError> {
    let file = form.into_inner().file;

    let uploaded = state.cool_stuff_handler
        .upload_image(file.data.to_vec(), file.file_name.as_deref())
        .await?;

    Ok(HttpResponse::Created().json(uploaded))
}

#[instrument(skip(_admin, state, data))]
pub async fn update_cool_stuff(
    _admin: AdminPrincipal,
    cool_stuff_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateCoolStuffRequest>,
) -> Result<impl Responder, AppError> {
    let item = state.cool_stuff_handler
        .update_cool_stuff(&cool_stuff_id, data.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(item))
}

#[instrument(skip(_admin, state))]
pub async fn delete_cool_stuff(
    _admin: AdminPrincipal,
    cool_stuff_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.cool_stuff_handler.delete_cool_stuff(&cool_stuff_id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({"message": "Cool stuff deleted"})))
}

use tracing::info;

use crate::{
    entities::{
        cool_stuff::{CoolStuff, NewCoolStuffRequest, UpdateCoolStuffRequest},
        upload::UploadResponse,
    },
    errors::AppError,
    repositories::{cool_stuff::CoolStuffRepository, storage::MediaStorage},
    utils::upload_name::{generate_object_name, sniff_content_type},
};

pub struct CoolStuffHandler<R, S>
where
    R: CoolStuffRepository,
    S: MediaStorage,
{
    pub cool_stuff_repo: R,
    pub storage: S,
}

impl<R, S> CoolStuffHandler<R, S>
where
    R: CoolStuffRepository,
    S: MediaStorage,
{
    pub fn new(cool_stuff_repo: R, storage: S) -> Self {
        CoolStuffHandler { cool_stuff_repo, storage }
    }

    pub async fn list_cool_stuff(&self) -> Result<Vec<CoolStuff>, AppError> {
        self.cool_stuff_repo.list_cool_stuff().await
    }

    pub async fn create_cool_stuff(&self, request: NewCoolStuffRequest) -> Result<CoolStuff, AppError> {
        self.cool_stuff_repo.create_cool_stuff(&request).await
    }

    pub async fn update_cool_stuff(
        &self,
        id: &str,
        request: UpdateCoolStuffRequest,
    ) -> Result<CoolStuff, AppError> {
        let changes = request.changes();
        if changes.is_empty() {
            return Err(AppError::BadRequest("No fields to update".into()));
        }

        self.cool_stuff_repo.update_cool_stuff(id, &changes).await
    }

    pub async fn delete_cool_stuff(&self, id: &str) -> Result<(), AppError> {
        self.cool_stuff_repo.delete_cool_stuff(id).await
    }

    /// Stores an image under a freshly generated name and returns its public URL.
    /// Identical bytes uploaded twice end up as two distinct objects.
    pub async fn upload_image(
        &self,
        bytes: Vec<u8>,
        file_name: Option<&str>,
    ) -> Result<UploadResponse, AppError> {
        let filename = generate_object_name(file_name);
        let content_type = sniff_content_type(&bytes);

        self.storage.upload(&filename, bytes, content_type).await?;

        let url = self.storage.public_url(&filename);
        info!(filename = %filename, content_type, "Uploaded image");

        Ok(UploadResponse { url, filename })
    }
}

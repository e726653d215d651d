use crate::{
    entities::content::{Content, ContentUpdate},
    errors::AppError,
    repositories::content::ContentRepository,
};

pub struct ContentHandler<R>
where
    R: ContentRepository,
{
    pub content_repo: R,
}

impl<R> ContentHandler<R>
where
    R: ContentRepository,
{
    pub fn new(content_repo: R) -> Self {
        ContentHandler { content_repo }
    }

    pub async fn get_content(&self, id: &str) -> Result<Content, AppError> {
        self.content_repo
            .get_content(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Content not found".into()))
    }

    pub async fn get_all_content(&self) -> Result<Vec<Content>, AppError> {
        self.content_repo.get_all_content().await
    }

    /// Creates or replaces the block stored under the caller-chosen `id`
    pub async fn upsert_content(&self, id: &str, request: ContentUpdate) -> Result<Content, AppError> {
        self.content_repo
            .upsert_content(&request.prepare_for_upsert(id))
            .await
    }
}

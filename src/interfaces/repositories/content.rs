use async_trait::async_trait;

use crate::{
    entities::content::{Content, ContentUpsert},
    errors::AppError,
    supabase::SupabaseClient,
};

use super::supabase_repo::{confirmed_row, SupabaseContentRepo, CONTENT_TABLE};

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn get_content(&self, id: &str) -> Result<Option<Content>, AppError>;

    /// Every content block, in the store's default order
    async fn get_all_content(&self) -> Result<Vec<Content>, AppError>;

    /// Creates the block or replaces the value stored under its id
    async fn upsert_content(&self, content: &ContentUpsert) -> Result<Content, AppError>;
}

impl SupabaseContentRepo {
    pub fn new(client: SupabaseClient) -> Self {
        SupabaseContentRepo { client }
    }
}

#[async_trait]
impl ContentRepository for SupabaseContentRepo {
    async fn get_content(&self, id: &str) -> Result<Option<Content>, AppError> {
        let rows: Vec<Content> = self.client
            .table(CONTENT_TABLE)
            .eq("id", id)
            .select()
            .await?;

        Ok(rows.into_iter().next())
    }

    async fn get_all_content(&self) -> Result<Vec<Content>, AppError> {
        let rows = self.client.table(CONTENT_TABLE).select().await?;
        Ok(rows)
    }

    async fn upsert_content(&self, content: &ContentUpsert) -> Result<Content, AppError> {
        let rows = self.client.table(CONTENT_TABLE).upsert(content).await?;
        confirmed_row(rows, || AppError::BadRequest("Failed to update content".into()))
    }
}

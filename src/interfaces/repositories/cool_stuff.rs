use async_trait::async_trait;
use serde_json::Value;

use crate::{
    entities::{
        cool_stuff::{CoolStuff, NewCoolStuffRequest},
        option_fields::ChangeSet,
    },
    errors::AppError,
    supabase::SupabaseClient,
};

use super::supabase_repo::{confirmed_delete, confirmed_row, SupabaseCoolStuffRepo, COOL_STUFF_TABLE};

#[async_trait]
pub trait CoolStuffRepository: Send + Sync {
    async fn list_cool_stuff(&self) -> Result<Vec<CoolStuff>, AppError>;
    async fn create_cool_stuff(&self, item: &NewCoolStuffRequest) -> Result<CoolStuff, AppError>;
    async fn update_cool_stuff(&self, id: &str, changes: &ChangeSet) -> Result<CoolStuff, AppError>;
    async fn delete_cool_stuff(&self, id: &str) -> Result<(), AppError>;
}

impl SupabaseCoolStuffRepo {
    pub fn new(client: SupabaseClient) -> Self {
        SupabaseCoolStuffRepo { client }
    }
}

#[async_trait]
impl CoolStuffRepository for SupabaseCoolStuffRepo {
    async fn list_cool_stuff(&self) -> Result<Vec<CoolStuff>, AppError> {
        let items = self.client
            .table(COOL_STUFF_TABLE)
            .order("order_index")
            .select()
            .await?;

        Ok(items)
    }

    async fn create_cool_stuff(&self, item: &NewCoolStuffRequest) -> Result<CoolStuff, AppError> {
        let rows = self.client.table(COOL_STUFF_TABLE).insert(item).await?;
        confirmed_row(rows, || AppError::BadRequest("Failed to create cool stuff".into()))
    }

    async fn update_cool_stuff(&self, id: &str, changes: &ChangeSet) -> Result<CoolStuff, AppError> {
        let rows = self.client
            .table(COOL_STUFF_TABLE)
            .eq("id", id)
            .update(changes)
            .await?;

        confirmed_row(rows, || AppError::NotFound("Cool stuff not found".into()))
    }

    async fn delete_cool_stuff(&self, id: &str) -> Result<(), AppError> {
        let rows: Vec<Value> = self.client
            .table(COOL_STUFF_TABLE)
            .eq("id", id)
            .delete()
            .await?;

        confirmed_delete(rows, "Cool stuff")
    }
}

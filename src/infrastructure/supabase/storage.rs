use async_trait::async_trait;
use reqwest::Method;
use tracing::{info, warn};

use crate::{
    errors::StorageError,
    repositories::storage::MediaStorage,
    settings::AppConfig,
};

use super::client::{error_message, SupabaseClient};

/// One bucket of the hosted object storage.
#[derive(Clone)]
pub struct SupabaseStorage {
    client: SupabaseClient,
    bucket: String,
}

impl SupabaseStorage {
    pub fn new(client: SupabaseClient, config: &AppConfig) -> Self {
        SupabaseStorage {
            client,
            bucket: config.storage_bucket.clone(),
        }
    }

    pub fn with_bucket(client: SupabaseClient, bucket: impl Into<String>) -> Self {
        SupabaseStorage { client, bucket: bucket.into() }
    }

    fn object_path(&self, object_name: &str) -> String {
        format!(
            "{}/{}",
            urlencoding::encode(&self.bucket),
            urlencoding::encode(object_name)
        )
    }
}

#[async_trait]
impl MediaStorage for SupabaseStorage {
    async fn upload(
        &self,
        object_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let size = bytes.len();
        let response = self.client
            .authorized(Method::POST, &format!("storage/v1/object/{}", self.object_path(object_name)))
            .header("Content-Type", content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            warn!(bucket = %self.bucket, object = object_name, status = status.as_u16(), "Storage rejected upload");
            return Err(StorageError::Rejected {
                status: status.as_u16(),
                message: error_message(&raw),
            });
        }

        info!(bucket = %self.bucket, object = object_name, size, "Stored object");
        Ok(())
    }

    fn public_url(&self, object_name: &str) -> String {
        self.client.endpoint(&format!("storage/v1/object/public/{}", self.object_path(object_name)))
    }
}

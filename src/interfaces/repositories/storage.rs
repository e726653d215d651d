use async_trait::async_trait;

use crate::errors::StorageError;

#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Stores `bytes` under `object_name`; never overwrites an existing object
    async fn upload(&self, object_name: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), StorageError>;

    fn public_url(&self, object_name: &str) -> String;
}

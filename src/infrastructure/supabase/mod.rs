pub mod client;
pub mod identity;
pub mod storage;

pub use client::SupabaseClient;
pub use identity::SupabaseIdentity;
pub use storage::SupabaseStorage;

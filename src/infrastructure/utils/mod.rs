pub mod upload_name;

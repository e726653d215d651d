pub mod supabase;
pub mod utils;
pub mod web;

pub mod content;
pub mod cool_stuff;
pub mod experience;
pub mod identity;
pub mod project;
pub mod skill;
pub mod storage;
pub mod supabase_repo;

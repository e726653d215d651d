use serde_json::Value;

use crate::{errors::AppError, supabase::SupabaseClient};

pub const EXPERIENCES_TABLE: &str = "experiences";
pub const ROLES_TABLE: &str = "roles";
pub const PROJECTS_TABLE: &str = "projects";
pub const COOL_STUFF_TABLE: &str = "cool_stuff";
pub const SKILLS_TABLE: &str = "skills";
pub const CONTENT_TABLE: &str = "content";

#[derive(Clone)]
pub struct SupabaseExperienceRepo {
    pub client: SupabaseClient,
}

#[derive(Clone)]
pub struct SupabaseProjectRepo {
    pub client: SupabaseClient,
}

#[derive(Clone)]
pub struct SupabaseCoolStuffRepo {
    pub client: SupabaseClient,
}

#[derive(Clone)]
pub struct SupabaseSkillRepo {
    pub client: SupabaseClient,
}

#[derive(Clone)]
pub struct SupabaseContentRepo {
    pub client: SupabaseClient,
}

/// The single row a write confirmed, or `err` when the store returned none.
pub fn confirmed_row<T>(rows: Vec<T>, err: impl FnOnce() -> AppError) -> Result<T, AppError> {
    rows.into_iter().next().ok_or_else(err)
}

/// Maps an empty delete result to `NotFound`.
pub fn confirmed_delete(rows: Vec<Value>, entity: &str) -> Result<(), AppError> {
    if rows.is_empty() {
        Err(AppError::NotFound(format!("{entity} not found")))
    } else {
        Ok(())
    }
}

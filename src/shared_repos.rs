use crate::{
    repositories::supabase_repo::{
        SupabaseContentRepo, SupabaseCoolStuffRepo, SupabaseExperienceRepo, SupabaseProjectRepo,
        SupabaseSkillRepo,
    },
    supabase::SupabaseClient,
};

/// One repository per table family, all sharing the same platform client.
#[derive(Clone)]
pub struct SharedRepositories {
    pub experience_repo: SupabaseExperienceRepo,
    pub project_repo: SupabaseProjectRepo,
    pub cool_stuff_repo: SupabaseCoolStuffRepo,
    pub skill_repo: SupabaseSkillRepo,
    pub content_repo: SupabaseContentRepo,
}

impl SharedRepositories {
    pub fn new(client: SupabaseClient) -> Self {
        let experience_repo = SupabaseExperienceRepo::new(client.clone());
        let project_repo = SupabaseProjectRepo::new(client.clone());
        let cool_stuff_repo = SupabaseCoolStuffRepo::new(client.clone());
        let skill_repo = SupabaseSkillRepo::new(client.clone());
        let content_repo = SupabaseContentRepo::new(client);

        SharedRepositories {
            experience_repo,
            project_repo,
            cool_stuff_repo,
            skill_repo,
            content_repo,
        }
    }
}

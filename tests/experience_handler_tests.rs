use async_trait::async_trait;
use chrono::Utc;
use mockall::{mock, Sequence};
use serde_json::json;

use portfolio_admin_api::{
    entities::{
        experience::{
            Experience, ExperienceInsert, NewExperienceRequest, NewRoleRequest, Role, RoleInsert,
            UpdateExperienceRequest,
        },
        option_fields::ChangeSet,
    },
    errors::AppError,
    repositories::experience::ExperienceRepository,
    use_cases::experiences::ExperienceHandler,
};

// === Mock Trait for ExperienceRepository ===
mock! {
    pub ExperienceRepo {}

    #[async_trait]
    impl ExperienceRepository for ExperienceRepo {
        async fn list_experiences(&self) -> Result<Vec<Experience>, AppError>;
        async fn list_roles(&self, experience_id: &str) -> Result<Vec<Role>, AppError>;
        async fn create_experience(&self, insert: &ExperienceInsert) -> Result<Experience, AppError>;
        async fn update_experience(&self, id: &str, changes: &ChangeSet) -> Result<Experience, AppError>;
        async fn delete_experience(&self, id: &str) -> Result<(), AppError>;
        async fn create_role(&self, insert: &RoleInsert) -> Result<Role, AppError>;
        async fn delete_role(&self, id: &str) -> Result<(), AppError>;
        async fn delete_roles_for_experience(&self, experience_id: &str) -> Result<usize, AppError>;
    }
}

// === Fixtures ===
fn experience(id: &str, company: &str) -> Experience {
    Experience {
        id: id.to_string(),
        company: company.to_string(),
        location: "Remote".to_string(),
        order_index: 0,
        created_at: Utc::now(),
    }
}

fn role_from(id: &str, insert: &RoleInsert) -> Role {
    Role {
        id: id.to_string(),
        experience_id: insert.experience_id.clone(),
        title: insert.title.clone(),
        period: insert.period.clone(),
        description: insert.description.clone(),
        skills: insert.skills.clone(),
        order_index: insert.order_index,
    }
}

fn role(id: &str, experience_id: &str, title: &str, order_index: i32) -> Role {
    Role {
        id: id.to_string(),
        experience_id: experience_id.to_string(),
        title: title.to_string(),
        period: "2021 - 2023".to_string(),
        description: "Shipped features".to_string(),
        skills: vec!["Rust".to_string()],
        order_index,
    }
}

fn new_experience(role_titles: &[&str]) -> NewExperienceRequest {
    let roles: Vec<_> = role_titles
        .iter()
        .enumerate()
        .map(|(i, title)| json!({
            "title": title,
            "period": "2021 - 2023",
            "description": "Shipped features",
            "skills": ["Rust"],
            "order_index": i
        }))
        .collect();

    serde_json::from_value(json!({
        "company": "Acme",
        "location": "Remote",
        "order_index": 0,
        "roles": roles
    }))
    .unwrap()
}

// === TESTS ===

#[tokio::test]
async fn list_attaches_each_experiences_roles_in_store_order() {
    let mut repo = MockExperienceRepo::new();

    repo.expect_list_experiences()
        .times(1)
        .returning(|| Ok(vec![experience("e1", "Acme"), experience("e2", "Globex")]));
    repo.expect_list_roles()
        .withf(|id| id == "e1")
        .times(1)
        .returning(|_| Ok(vec![role("r1", "e1", "Engineer", 0), role("r2", "e1", "Lead", 1)]));
    repo.expect_list_roles()
        .withf(|id| id == "e2")
        .times(1)
        .returning(|_| Ok(vec![]));

    let handler = ExperienceHandler::new(repo);
    let listed = handler.list_experiences().await.unwrap();

    assert_eq!(listed.len(), 2);
    let titles: Vec<_> = listed[0].roles.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["Engineer", "Lead"]);
    assert!(listed[1].roles.is_empty());
}

#[tokio::test]
async fn create_inserts_roles_in_submission_order_under_new_id() {
    let mut repo = MockExperienceRepo::new();
    let mut seq = Sequence::new();

    repo.expect_create_experience()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(experience("e-new", "Acme")));
    repo.expect_create_role()
        .withf(|insert| insert.title == "Engineer" && insert.experience_id == "e-new")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|insert| Ok(role_from("r1", insert)));
    repo.expect_create_role()
        .withf(|insert| insert.title == "Lead" && insert.experience_id == "e-new")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|insert| Ok(role_from("r2", insert)));

    let handler = ExperienceHandler::new(repo);
    let created = handler
        .create_experience(new_experience(&["Engineer", "Lead"]))
        .await
        .unwrap();

    assert_eq!(created.experience.id, "e-new");
    assert_eq!(created.roles.len(), 2);
    assert_eq!(created.roles[0].id, "r1");
    assert_eq!(created.roles[1].id, "r2");
}

#[tokio::test]
async fn failed_role_insert_rolls_back_everything_created() {
    let mut repo = MockExperienceRepo::new();

    repo.expect_create_experience()
        .returning(|_| Ok(experience("e1", "Acme")));
    repo.expect_create_role()
        .withf(|insert| insert.title == "Engineer")
        .returning(|insert| Ok(role_from("r1", insert)));
    repo.expect_create_role()
        .withf(|insert| insert.title == "Lead")
        .returning(|_| Err(AppError::BadRequest("Failed to add role".into())));
    repo.expect_create_role()
        .withf(|insert| insert.title == "Intern")
        .never();
    repo.expect_delete_role()
        .withf(|id| id == "r1")
        .times(1)
        .returning(|_| Ok(()));
    repo.expect_delete_experience()
        .withf(|id| id == "e1")
        .times(1)
        .returning(|_| Ok(()));

    let handler = ExperienceHandler::new(repo);
    let result = handler
        .create_experience(new_experience(&["Engineer", "Lead", "Intern"]))
        .await;

    match result {
        Err(AppError::BadRequest(detail)) => assert!(detail.contains("Lead")),
        other => panic!("expected BadRequest, got {:?}", other),
    }
}

#[tokio::test]
async fn empty_update_never_reaches_repository() {
    let mut repo = MockExperienceRepo::new();
    repo.expect_update_experience().never();
    repo.expect_list_roles().never();

    let handler = ExperienceHandler::new(repo);
    let result = handler
        .update_experience("e1", UpdateExperienceRequest::default())
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(ref d)) if d == "No fields to update"));
}

#[tokio::test]
async fn update_of_unknown_experience_is_not_found() {
    let mut repo = MockExperienceRepo::new();
    repo.expect_update_experience()
        .returning(|_, _| Err(AppError::NotFound("Experience not found".into())));
    repo.expect_list_roles().never();

    let handler = ExperienceHandler::new(repo);
    let request: UpdateExperienceRequest =
        serde_json::from_value(json!({ "company": "Initech" })).unwrap();

    let result = handler.update_experience("missing", request).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn update_returns_experience_with_current_roles() {
    let mut repo = MockExperienceRepo::new();
    repo.expect_update_experience()
        .withf(|id, changes| id == "e1" && changes.len() == 1)
        .returning(|_, _| Ok(experience("e1", "Initech")));
    repo.expect_list_roles()
        .withf(|id| id == "e1")
        .returning(|_| Ok(vec![role("r1", "e1", "Engineer", 0)]));

    let handler = ExperienceHandler::new(repo);
    let request: UpdateExperienceRequest =
        serde_json::from_value(json!({ "company": "Initech" })).unwrap();

    let updated = handler.update_experience("e1", request).await.unwrap();

    assert_eq!(updated.experience.company, "Initech");
    assert_eq!(updated.roles.len(), 1);
}

#[tokio::test]
async fn delete_removes_experience_then_sweeps_its_roles() {
    let mut repo = MockExperienceRepo::new();
    let mut seq = Sequence::new();

    repo.expect_delete_experience()
        .withf(|id| id == "e1")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    repo.expect_delete_roles_for_experience()
        .withf(|id| id == "e1")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(2));

    let handler = ExperienceHandler::new(repo);
    assert!(handler.delete_experience("e1").await.is_ok());
}

#[tokio::test]
async fn delete_of_unknown_experience_is_not_found() {
    let mut repo = MockExperienceRepo::new();
    repo.expect_delete_experience()
        .returning(|_| Err(AppError::NotFound("Experience not found".into())));
    repo.expect_delete_roles_for_experience().never();

    let handler = ExperienceHandler::new(repo);
    let result = handler.delete_experience("missing").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn failed_experience_delete_leaves_roles_untouched() {
    let mut repo = MockExperienceRepo::new();
    repo.expect_delete_experience()
        .returning(|_| Err(AppError::BadRequest("Data store rejected request (500): boom".into())));
    repo.expect_delete_roles_for_experience().never();

    let handler = ExperienceHandler::new(repo);
    let result = handler.delete_experience("e1").await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

#[tokio::test]
async fn failed_role_sweep_still_reports_deletion() {
    let mut repo = MockExperienceRepo::new();
    repo.expect_delete_experience().times(1).returning(|_| Ok(()));
    repo.expect_delete_roles_for_experience()
        .times(1)
        .returning(|_| Err(AppError::BadRequest("Data store unreachable: connection reset".into())));

    let handler = ExperienceHandler::new(repo);
    assert!(handler.delete_experience("e1").await.is_ok());
}

#[tokio::test]
async fn add_role_is_tagged_with_parent_experience() {
    let mut repo = MockExperienceRepo::new();
    repo.expect_create_role()
        .withf(|insert| insert.experience_id == "e7" && insert.title == "Architect")
        .times(1)
        .returning(|insert| Ok(role_from("r9", insert)));

    let handler = ExperienceHandler::new(repo);
    let request = NewRoleRequest {
        title: "Architect".into(),
        period: "2024 - present".into(),
        description: "Designs systems".into(),
        skills: vec![],
        order_index: 0,
    };

    let created = handler.add_role("e7", request).await.unwrap();
    assert_eq!(created.id, "r9");
    assert_eq!(created.experience_id, "e7");
}

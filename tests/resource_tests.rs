
use mockito::Matcher;
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

#[actix_rt::test]
async fn projects_are_listed_in_order_index_order() {
    let mut app = TestApp::spawn().await;
    let list = app
        .mock_table(
            "GET",
            "projects",
            Matcher::AllOf(vec![
                Matcher::UrlEncoded("select".into(), "*".into()),
                Matcher::UrlEncoded("order".into(), "order_index.asc".into()),
            ]),
            200,
            json!([
                project_row("p1", "First", false, 0),
                project_row("p2", "Second", true, 1),
            ]),
        )
        .await;

    let response = app.get("/api/projects").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<Value> = response.json().await.unwrap();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0]["id"], "p1");
    list.assert_async().await;
}

#[actix_rt::test]
async fn featured_projects_filter_on_flag() {
    let mut app = TestApp::spawn().await;
    let featured = app
        .mock_table(
            "GET",
            "projects",
            Matcher::AllOf(vec![
                Matcher::UrlEncoded("is_featured".into(), "eq.true".into()),
                Matcher::UrlEncoded("order".into(), "order_index.asc".into()),
            ]),
            200,
            json!([project_row("p2", "Second", true, 1)]),
        )
        .await;

    let response = app.get("/api/projects/featured").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<Value> = response.json().await.unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["is_featured"], true);
    featured.assert_async().await;
}

#[actix_rt::test]
async fn empty_update_is_rejected_before_touching_the_store() {
    let mut app = TestApp::spawn().await;
    app.mock_identity().await;
    let patch = app.supabase
        .mock("PATCH", "/rest/v1/projects")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let response = app.put_json("/api/projects/p1", Some(ADMIN_TOKEN), &json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "No fields to update");
    patch.assert_async().await;
}

#[actix_rt::test]
async fn explicit_null_clears_live_url() {
    let mut app = TestApp::spawn().await;
    app.mock_identity().await;
    let patch = app.supabase
        .mock("PATCH", "/rest/v1/projects")
        .match_query(by_id("p1"))
        .match_body(Matcher::Json(json!({ "live_url": null })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([project_row("p1", "First", false, 0)]).to_string())
        .create_async()
        .await;

    let response = app
        .put_json("/api/projects/p1", Some(ADMIN_TOKEN), &json!({ "live_url": null }))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    patch.assert_async().await;
}

#[actix_rt::test]
async fn updating_unknown_skill_is_not_found() {
    let mut app = TestApp::spawn().await;
    app.mock_identity().await;
    let _patch = app
        .mock_table("PATCH", "skills", by_id("missing"), 200, json!([]))
        .await;

    let response = app
        .put_json("/api/skills/missing", Some(ADMIN_TOKEN), &json!({ "name": "Go" }))
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn deleting_unknown_project_is_not_found() {
    let mut app = TestApp::spawn().await;
    app.mock_identity().await;
    let _delete = app
        .mock_table("DELETE", "projects", by_id("missing"), 200, json!([]))
        .await;

    let response = app.delete("/api/projects/missing", Some(ADMIN_TOKEN)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["detail"], "Project not found");
}

#[actix_rt::test]
async fn store_rejection_surfaces_as_bad_request() {
    let mut app = TestApp::spawn().await;
    app.mock_identity().await;
    let _insert = app
        .mock_table(
            "POST",
            "skills",
            Matcher::Any,
            409,
            json!({ "code": "23505", "message": "duplicate key value violates unique constraint" }),
        )
        .await;

    let response = app
        .post_json(
            "/api/skills",
            Some(ADMIN_TOKEN),
            &json!({ "name": "Rust", "category": "Languages", "order_index": 0 }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("duplicate key"));
}

#[actix_rt::test]
async fn experiences_embed_their_roles() {
    let mut app = TestApp::spawn().await;
    let _experiences = app
        .mock_table(
            "GET",
            "experiences",
            Matcher::UrlEncoded("order".into(), "order_index.asc".into()),
            200,
            json!([experience_row("e1", "Acme", 0), experience_row("e2", "Globex", 1)]),
        )
        .await;
    let _e1_roles = app
        .mock_table(
            "GET",
            "roles",
            Matcher::UrlEncoded("experience_id".into(), "eq.e1".into()),
            200,
            json!([role_row("r1", "e1", "Engineer", 0), role_row("r2", "e1", "Lead", 1)]),
        )
        .await;
    let _e2_roles = app
        .mock_table(
            "GET",
            "roles",
            Matcher::UrlEncoded("experience_id".into(), "eq.e2".into()),
            200,
            json!([]),
        )
        .await;

    let response = app.get("/api/experiences").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<Value> = response.json().await.unwrap();
    assert_eq!(body.len(), 2);
    assert_eq!(body[0]["company"], "Acme");
    assert_eq!(body[0]["roles"][0]["title"], "Engineer");
    assert_eq!(body[0]["roles"][1]["title"], "Lead");
    assert_eq!(body[1]["roles"], json!([]));
}

#[actix_rt::test]
async fn deleting_experience_also_sweeps_its_roles() {
    let mut app = TestApp::spawn().await;
    app.mock_identity().await;
    let roles = app
        .mock_table(
            "DELETE",
            "roles",
            Matcher::UrlEncoded("experience_id".into(), "eq.e1".into()),
            200,
            json!([role_row("r1", "e1", "Engineer", 0)]),
        )
        .await;
    let experience = app
        .mock_table("DELETE", "experiences", by_id("e1"), 200, json!([experience_row("e1", "Acme", 0)]))
        .await;

    let response = app.delete("/api/experiences/e1", Some(ADMIN_TOKEN)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Experience deleted");
    roles.assert_async().await;
    experience.assert_async().await;
}

#[actix_rt::test]
async fn failed_experience_delete_keeps_roles_and_reports_store_error() {
    let mut app = TestApp::spawn().await;
    app.mock_identity().await;
    let experience = app
        .mock_table("DELETE", "experiences", by_id("e1"), 500, json!({ "message": "boom" }))
        .await;
    let roles = app.supabase
        .mock("DELETE", "/rest/v1/roles")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let response = app.delete("/api/experiences/e1", Some(ADMIN_TOKEN)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().contains("boom"));
    experience.assert_async().await;
    roles.assert_async().await;
}

#[actix_rt::test]
async fn failed_role_sweep_does_not_fail_experience_delete() {
    let mut app = TestApp::spawn().await;
    app.mock_identity().await;
    let _experience = app
        .mock_table("DELETE", "experiences", by_id("e1"), 200, json!([experience_row("e1", "Acme", 0)]))
        .await;
    let _roles = app
        .mock_table(
            "DELETE",
            "roles",
            Matcher::UrlEncoded("experience_id".into(), "eq.e1".into()),
            500,
            json!({ "message": "boom" }),
        )
        .await;

    let response = app.delete("/api/experiences/e1", Some(ADMIN_TOKEN)).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn role_routes_are_not_mistaken_for_experience_ids() {
    let mut app = TestApp::spawn().await;
    app.mock_identity().await;
    let role = app
        .mock_table("DELETE", "roles", by_id("r1"), 200, json!([role_row("r1", "e1", "Engineer", 0)]))
        .await;

    let response = app.delete("/api/experiences/roles/r1", Some(ADMIN_TOKEN)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Role deleted");
    role.assert_async().await;
}

#[actix_rt::test]
async fn missing_content_block_is_not_found() {
    let mut app = TestApp::spawn().await;
    let _content = app
        .mock_table("GET", "content", by_id("hero_title"), 200, json!([]))
        .await;

    let response = app.get("/api/content/hero_title").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["detail"], "Content not found");
}

#[actix_rt::test]
async fn content_put_merges_on_conflict() {
    let mut app = TestApp::spawn().await;
    app.mock_identity().await;
    let upsert = app.supabase
        .mock("POST", "/rest/v1/content")
        .match_query(Matcher::Any)
        .match_header("prefer", Matcher::Regex("resolution=merge-duplicates".into()))
        .match_body(Matcher::PartialJson(json!({ "id": "hero_title", "value": "Hello" })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!([{ "id": "hero_title", "value": "Hello", "updated_at": "2024-05-01T12:00:00Z" }])
                .to_string(),
        )
        .create_async()
        .await;

    let response = app
        .put_json("/api/content/hero_title", Some(ADMIN_TOKEN), &json!({ "value": "Hello" }))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["value"], "Hello");
    upsert.assert_async().await;
}

#[actix_rt::test]
async fn skills_filter_by_category() {
    let mut app = TestApp::spawn().await;
    let by_category = app
        .mock_table(
            "GET",
            "skills",
            Matcher::UrlEncoded("category".into(), "eq.Backend".into()),
            200,
            json!([{ "id": "s1", "name": "Rust", "category": "Backend", "order_index": 0 }]),
        )
        .await;

    let response = app.get("/api/skills/category/Backend").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<Value> = response.json().await.unwrap();
    assert_eq!(body[0]["name"], "Rust");
    by_category.assert_async().await;
}

#[actix_rt::test]
async fn malformed_json_is_a_bad_request() {
    let mut app = TestApp::spawn().await;
    app.mock_identity().await;

    let response = app.client
        .post(app.url("/api/skills"))
        .bearer_auth(ADMIN_TOKEN)
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert!(body["detail"].as_str().unwrap().starts_with("JSON payload error"));
}

#[actix_rt::test]
async fn upload_stores_object_under_generated_name() {
    let mut app = TestApp::spawn().await;
    app.mock_identity().await;
    let stored = app.supabase
        .mock("POST", Matcher::Regex(r"^/storage/v1/object/cool-stuff/[0-9a-f-]{36}\.png$".into()))
        .match_header("content-type", "image/png")
        .match_header("x-upsert", "false")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"Key":"cool-stuff/object.png"}"#)
        .create_async()
        .await;

    let png: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
    let boundary = "XPORTFOLIOBOUNDARY";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"photo.png\"\r\nContent-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(png);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let response = app.client
        .post(app.url("/api/coolstuff/upload"))
        .bearer_auth(ADMIN_TOKEN)
        .header("content-type", format!("multipart/form-data; boundary={boundary}"))
        .body(body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    let filename = body["filename"].as_str().unwrap();
    assert!(filename.ends_with(".png"));
    assert_eq!(
        body["url"],
        format!("{}/storage/v1/object/public/cool-stuff/{}", app.supabase.url(), filename)
    );
    stored.assert_async().await;
}

#[actix_rt::test]
async fn upload_without_file_part_is_a_bad_request() {
    let mut app = TestApp::spawn().await;
    app.mock_identity().await;

    let boundary = "XPORTFOLIOBOUNDARY";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"caption\"\r\n\r\nhello\r\n--{boundary}--\r\n"
    );

    let response = app.client
        .post(app.url("/api/coolstuff/upload"))
        .bearer_auth(ADMIN_TOKEN)
        .header("content-type", format!("multipart/form-data; boundary={boundary}"))
        .body(body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

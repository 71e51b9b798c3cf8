//! HTTP-level integration tests for the `/projects` resource and the
//! owner/member access rules.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get_auth, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_owner_is_sole_member(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = common::signup(app.clone(), "Alice").await;

    let response = post_json_auth(
        app,
        "/api/projects",
        json!({ "name": "Launch", "description": "Go to space" }),
        &alice.token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Launch");
    assert_eq!(json["data"]["createdBy"]["id"], alice.id);
    let members = json["data"]["members"].as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["id"], alice.id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_without_name_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = common::signup(app.clone(), "Alice").await;

    let response = post_json_auth(app, "/api/projects", json!({ "name": "  " }), &alice.token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_projects_only_visible_ones(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = common::signup(app.clone(), "Alice").await;
    let bob = common::signup(app.clone(), "Bob").await;

    common::create_project(app.clone(), &alice, "Mine").await;
    let shared = common::create_project(app.clone(), &bob, "Shared").await;
    common::add_member(app.clone(), &bob, shared, &alice).await;
    common::create_project(app.clone(), &bob, "Private").await;

    let response = get_auth(app, "/api/projects", &alice.token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["count"], 2);
    let names: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Shared", "Mine"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_member_can_view_but_not_manage(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = common::signup(app.clone(), "Alice").await;
    let bob = common::signup(app.clone(), "Bob").await;
    let project = common::create_project(app.clone(), &alice, "Launch").await;
    common::add_member(app.clone(), &alice, project, &bob).await;

    let uri = format!("/api/projects/{project}");
    let response = get_auth(app.clone(), &uri, &bob.token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = put_json_auth(app.clone(), &uri, json!({ "name": "Mine now" }), &bob.token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
    assert_eq!(json["message"], "Not authorized to update this project");

    let response = delete_auth(app, &uri, &bob.token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_outsider_cannot_view(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = common::signup(app.clone(), "Alice").await;
    let carol = common::signup(app.clone(), "Carol").await;
    let project = common::create_project(app.clone(), &alice, "Launch").await;

    let response = get_auth(app, &format!("/api/projects/{project}"), &carol.token).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_project_is_404_before_permission(pool: PgPool) {
    let app = common::build_test_app(pool);
    let carol = common::signup(app.clone(), "Carol").await;

    let response = get_auth(app, "/api/projects/999999", &carol.token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_owner_updates_and_deletes(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = common::signup(app.clone(), "Alice").await;
    let project = common::create_project(app.clone(), &alice, "Launch").await;
    let uri = format!("/api/projects/{project}");

    let response = put_json_auth(
        app.clone(),
        &uri,
        json!({ "description": "Updated" }),
        &alice.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Launch");
    assert_eq!(json["data"]["description"], "Updated");

    let response = delete_auth(app.clone(), &uri, &alice.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "success": true, "data": {} }));

    let response = get_auth(app, &uri, &alice.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_member_errors(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = common::signup(app.clone(), "Alice").await;
    let bob = common::signup(app.clone(), "Bob").await;
    let project = common::create_project(app.clone(), &alice, "Launch").await;
    let uri = format!("/api/projects/{project}/members");

    let response = put_json_auth(app.clone(), &uri, json!({ "userId": 999999 }), &alice.token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    common::add_member(app.clone(), &alice, project, &bob).await;

    let response = put_json_auth(app.clone(), &uri, json!({ "userId": bob.id }), &alice.token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "User is already a member of this project"
    );

    let response = put_json_auth(app, &uri, json!({ "userId": alice.id }), &bob.token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_member_returns_populated_members(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = common::signup(app.clone(), "Alice").await;
    let bob = common::signup(app.clone(), "Bob").await;
    let project = common::create_project(app.clone(), &alice, "Launch").await;

    let response = put_json_auth(
        app,
        &format!("/api/projects/{project}/members"),
        json!({ "userId": bob.id }),
        &alice.token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let members = json["data"]["members"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert!(members.iter().any(|m| m["name"] == "Bob"));
}

//! HTTP-level integration tests for signup, login, and the profile endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete_auth, get, get_auth, post_json, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_returns_token_and_profile(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({ "name": "Alice", "email": "Alice@Test.com", "password": "secret1" });
    let response = post_json(app, "/api/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["token"].is_string());
    assert_eq!(json["data"]["name"], "Alice");
    assert_eq!(json["data"]["email"], "alice@test.com");
    assert!(json["data"].get("passwordHash").is_none(), "hash must never be serialized");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_duplicate_email_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    common::signup(app.clone(), "Alice").await;

    let body = json!({ "name": "Impostor", "email": "alice@test.com", "password": "secret1" });
    let response = post_json(app, "/api/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "User already exists with this email");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_short_password_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({ "name": "Alice", "email": "alice@test.com", "password": "abc" });
    let response = post_json(app, "/api/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_signup_invalid_email_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({ "name": "Alice", "email": "not-an-email", "password": "secret1" });
    let response = post_json(app, "/api/auth/signup", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Please provide a valid email");
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let app = common::build_test_app(pool);
    let user = common::signup(app.clone(), "Alice").await;

    let body = json!({ "email": "alice@test.com", "password": "password123" });
    let response = post_json(app, "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert_eq!(json["data"]["id"], user.id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password_and_unknown_email_look_the_same(pool: PgPool) {
    let app = common::build_test_app(pool);
    common::signup(app.clone(), "Alice").await;

    let wrong = post_json(
        app.clone(),
        "/api/auth/login",
        json!({ "email": "alice@test.com", "password": "incorrect" }),
    )
    .await;
    let unknown = post_json(
        app,
        "/api/auth/login",
        json!({ "email": "nobody@test.com", "password": "incorrect" }),
    )
    .await;

    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(wrong).await, body_json(unknown).await);
}

// ---------------------------------------------------------------------------
// Token handling
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_protected_route_without_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/profile").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_garbage_token_is_401(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/profile", "not.a.jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_and_update_profile(pool: PgPool) {
    let app = common::build_test_app(pool);
    let user = common::signup(app.clone(), "Alice").await;

    let response = get_auth(app.clone(), "/api/profile", &user.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "Alice");

    let response = put_json_auth(
        app,
        "/api/profile",
        json!({ "name": "Alice Smith", "profileImage": "https://img.test/a.png" }),
        &user.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Alice Smith");
    assert_eq!(json["data"]["profileImage"], "https://img.test/a.png");
    assert_eq!(json["data"]["email"], "alice@test.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_profile_to_taken_email_is_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = common::signup(app.clone(), "Alice").await;
    common::signup(app.clone(), "Bob").await;

    let response = put_json_auth(
        app,
        "/api/profile",
        json!({ "email": "bob@test.com" }),
        &alice.token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_profile_rejects_unknown_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = common::signup(app.clone(), "Alice").await;

    let response = put_json_auth(
        app,
        "/api/profile",
        json!({ "passwordHash": "sneaky" }),
        &alice.token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_deleted_account_token_stops_working(pool: PgPool) {
    let app = common::build_test_app(pool);
    let user = common::signup(app.clone(), "Alice").await;

    let response = delete_auth(app.clone(), "/api/profile", &user.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], json!({}));

    let response = get_auth(app, "/api/profile", &user.token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

pub mod auth;
pub mod discussion;
pub mod health;
pub mod notification;
pub mod profile;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                  service health (public)
///
/// /auth/signup                             register (public)
/// /auth/login                              login (public)
///
/// /profile                                 get, update, delete own account
///
/// /projects                                list, create
/// /projects/{id}                           get, update, delete
/// /projects/{id}/members                   add member (PUT)
///
/// /tasks?projectId=&status=                list, create
/// /tasks/{id}                              get, update, delete
///
/// /discussions?projectId=                  list, create
///
/// /notifications                           list unread
/// /notifications/read-all                  mark all read (PUT)
/// /notifications/unread-count              unread count
/// /notifications/{id}/read                 mark one read (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/auth", auth::router())
        .nest("/profile", profile::router())
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/discussions", discussion::router())
        .nest("/notifications", notification::router())
}

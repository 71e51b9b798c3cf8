//! Route definitions for the `/projects` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                -> list_projects
/// POST   /                -> create_project
/// GET    /{id}            -> get_project
/// PUT    /{id}            -> update_project
/// DELETE /{id}            -> delete_project
/// PUT    /{id}/members    -> add_member
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list_projects).post(project::create_project))
        .route(
            "/{id}",
            get(project::get_project)
                .put(project::update_project)
                .delete(project::delete_project),
        )
        .route("/{id}/members", put(project::add_member))
}

use axum::routing::get;
use axum::Router;

use crate::handlers::discussion;
use crate::state::AppState;

/// Routes mounted at `/discussions`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(discussion::list_discussions).post(discussion::create_discussion),
    )
}

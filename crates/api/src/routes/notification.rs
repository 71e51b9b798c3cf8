//! Route definitions for the `/notifications` resource.
//!
//! All endpoints require authentication.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET    /                  -> list_notifications
/// PUT    /read-all          -> mark_all_read
/// GET    /unread-count      -> unread_count
/// PUT    /{id}/read         -> mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notification::list_notifications))
        .route("/read-all", put(notification::mark_all_read))
        .route("/unread-count", get(notification::unread_count))
        .route("/{id}/read", put(notification::mark_read))
}

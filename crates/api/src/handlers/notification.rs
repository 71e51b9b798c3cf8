//! Handlers for the `/notifications` resource.
//!
//! All endpoints require authentication via [`AuthUser`] and only ever
//! touch the caller's own notifications.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use synergy_core::error::CoreError;
use synergy_core::types::DbId;
use synergy_db::models::notification::Notification;
use synergy_db::repositories::NotificationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkedRead {
    pub marked_read: u64,
}

#[derive(Debug, Serialize)]
pub struct UnreadCount {
    pub count: i64,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Notification",
        id,
    })
}

/// GET /api/notifications
///
/// The caller's unread notifications, newest first.
pub async fn list_notifications(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Notification>>>> {
    let notifications = NotificationRepo::list_unread_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(ApiResponse::list(notifications)))
}

/// PUT /api/notifications/{id}/read
///
/// 404 if the notification does not exist, 401 if it belongs to someone else.
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ApiResponse<Notification>>> {
    let notification = NotificationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if notification.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not authorized to update this notification".into(),
        )));
    }

    let notification = NotificationRepo::mark_read(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(ApiResponse::data(notification)))
}

/// PUT /api/notifications/read-all
pub async fn mark_all_read(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<MarkedRead>>> {
    let marked_read = NotificationRepo::mark_all_read(&state.pool, auth.user_id).await?;
    tracing::debug!(user_id = auth.user_id, marked_read, "Notifications marked read");

    Ok(Json(
        ApiResponse::data(MarkedRead { marked_read })
            .with_message("All notifications marked as read"),
    ))
}

/// GET /api/notifications/unread-count
pub async fn unread_count(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<UnreadCount>>> {
    let count = NotificationRepo::unread_count(&state.pool, auth.user_id).await?;
    Ok(Json(ApiResponse::data(UnreadCount { count })))
}

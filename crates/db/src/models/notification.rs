//! Notification entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use synergy_core::notification_type::NotificationType;
use synergy_core::task_events::NotificationDraft;
use synergy_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    #[sqlx(try_from = "String")]
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub message: String,
    pub is_read: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting a notification. Never built from client input.
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub user_id: DbId,
    pub kind: NotificationType,
    pub message: String,
}

impl From<NotificationDraft> for CreateNotification {
    fn from(draft: NotificationDraft) -> Self {
        Self {
            user_id: draft.user_id,
            kind: draft.kind,
            message: draft.message,
        }
    }
}

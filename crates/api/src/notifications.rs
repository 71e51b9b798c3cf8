//! Best-effort delivery of notifier decisions.
//!
//! The task write has already committed when [`deliver`] runs. A failed
//! notification insert is logged and dropped; it never fails the request.

use synergy_core::task_events::NotificationDraft;
use synergy_db::models::notification::CreateNotification;
use synergy_db::repositories::NotificationRepo;
use synergy_db::DbPool;

/// Persist `draft`, if any.
pub async fn deliver(pool: &DbPool, draft: Option<NotificationDraft>) {
    let Some(draft) = draft else {
        return;
    };

    let input = CreateNotification::from(draft);
    match NotificationRepo::create(pool, &input).await {
        Ok(notification) => {
            tracing::debug!(
                notification_id = notification.id,
                user_id = notification.user_id,
                kind = %notification.kind,
                "Notification delivered",
            );
        }
        Err(e) => {
            tracing::warn!(
                user_id = input.user_id,
                kind = %input.kind,
                error = %e,
                "Failed to deliver notification",
            );
        }
    }
}

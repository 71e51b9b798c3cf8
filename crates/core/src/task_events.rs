//! Decides which notification, if any, a task event produces.
//!
//! These functions only decide. Persisting the resulting
//! [`NotificationDraft`] is the caller's job and happens after the task write
//! has committed. A user's own action never notifies that same user.

use crate::notification_type::{NotificationType, MAX_MESSAGE_CHARS};
use crate::task_status::TaskStatus;
use crate::types::DbId;

/// The parts of a task the notifier looks at.
pub trait TaskSubject {
    fn title(&self) -> &str;
    fn assignee_id(&self) -> Option<DbId>;
}

/// A notification that should be written for `user_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationDraft {
    pub user_id: DbId,
    pub kind: NotificationType,
    pub message: String,
}

impl NotificationDraft {
    fn new(user_id: DbId, kind: NotificationType, message: String) -> Self {
        Self {
            user_id,
            kind,
            message: truncate_chars(message, MAX_MESSAGE_CHARS),
        }
    }
}

/// Creation path: notify the assignee, unless unset or the creator themself.
pub fn on_task_created<T: TaskSubject + ?Sized>(
    task: &T,
    actor: DbId,
) -> Option<NotificationDraft> {
    let assignee = task.assignee_id().filter(|&a| a != actor)?;
    Some(NotificationDraft::new(
        assignee,
        NotificationType::TaskAssigned,
        format!("You have been assigned a new task: {}", task.title()),
    ))
}

/// Update path: only a real status change on an assigned task qualifies.
///
/// `task` is the task as it reads after the update (its title may have
/// changed in the same write).
pub fn on_task_status_changed<T: TaskSubject + ?Sized>(
    old: TaskStatus,
    new: TaskStatus,
    task: &T,
    actor: DbId,
) -> Option<NotificationDraft> {
    if old == new {
        return None;
    }
    let assignee = task.assignee_id()?;

    let title = task.title();
    let (kind, message) = match new {
        TaskStatus::Done => (
            NotificationType::TaskCompleted,
            format!("Task completed: {title}"),
        ),
        TaskStatus::InProgress => (
            NotificationType::ProjectUpdate,
            format!("Task in progress: {title}"),
        ),
        TaskStatus::ToDo => (
            NotificationType::ProjectUpdate,
            format!("Task updated: {title}"),
        ),
    };

    if assignee == actor {
        return None;
    }
    Some(NotificationDraft::new(assignee, kind, message))
}

fn truncate_chars(mut s: String, max: usize) -> String {
    if let Some((idx, _)) = s.char_indices().nth(max) {
        s.truncate(idx);
    }
    s
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    struct Fixture {
        title: String,
        assignee: Option<DbId>,
    }

    impl TaskSubject for Fixture {
        fn title(&self) -> &str {
            &self.title
        }
        fn assignee_id(&self) -> Option<DbId> {
            self.assignee
        }
    }

    fn task(title: &str, assignee: Option<DbId>) -> Fixture {
        Fixture {
            title: title.to_string(),
            assignee,
        }
    }

    const ACTOR: DbId = 10;
    const OTHER: DbId = 20;

    // -- creation path --

    #[test]
    fn test_created_with_other_assignee_notifies() {
        let draft = on_task_created(&task("Write docs", Some(OTHER)), ACTOR).unwrap();
        assert_eq!(draft.user_id, OTHER);
        assert_eq!(draft.kind, NotificationType::TaskAssigned);
        assert_eq!(draft.message, "You have been assigned a new task: Write docs");
    }

    #[test]
    fn test_created_self_assigned_is_silent() {
        assert!(on_task_created(&task("Mine", Some(ACTOR)), ACTOR).is_none());
    }

    #[test]
    fn test_created_unassigned_is_silent() {
        assert!(on_task_created(&task("Nobody", None), ACTOR).is_none());
    }

    // -- update path --

    #[test]
    fn test_status_to_done_is_task_completed() {
        let draft = on_task_status_changed(
            TaskStatus::InProgress,
            TaskStatus::Done,
            &task("Ship", Some(OTHER)),
            ACTOR,
        )
        .unwrap();
        assert_eq!(draft.kind, NotificationType::TaskCompleted);
        assert_eq!(draft.message, "Task completed: Ship");
        assert_eq!(draft.user_id, OTHER);
    }

    #[test]
    fn test_status_to_in_progress_is_project_update() {
        let draft = on_task_status_changed(
            TaskStatus::ToDo,
            TaskStatus::InProgress,
            &task("Ship", Some(OTHER)),
            ACTOR,
        )
        .unwrap();
        assert_eq!(draft.kind, NotificationType::ProjectUpdate);
        assert_eq!(draft.message, "Task in progress: Ship");
    }

    #[test]
    fn test_status_back_to_todo_is_task_updated() {
        let draft = on_task_status_changed(
            TaskStatus::Done,
            TaskStatus::ToDo,
            &task("Ship", Some(OTHER)),
            ACTOR,
        )
        .unwrap();
        assert_eq!(draft.kind, NotificationType::ProjectUpdate);
        assert_eq!(draft.message, "Task updated: Ship");
    }

    #[test]
    fn test_unchanged_status_is_silent() {
        for s in [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done] {
            assert!(on_task_status_changed(s, s, &task("Same", Some(OTHER)), ACTOR).is_none());
        }
    }

    #[test]
    fn test_self_update_is_suppressed() {
        assert_matches!(
            on_task_status_changed(
                TaskStatus::ToDo,
                TaskStatus::Done,
                &task("Mine", Some(ACTOR)),
                ACTOR
            ),
            None
        );
    }

    #[test]
    fn test_unassigned_status_change_is_silent() {
        assert!(on_task_status_changed(
            TaskStatus::ToDo,
            TaskStatus::Done,
            &task("Floating", None),
            ACTOR
        )
        .is_none());
    }

    #[test]
    fn test_message_truncated_to_limit() {
        let long = "x".repeat(300);
        let draft = on_task_created(&task(&long, Some(OTHER)), ACTOR).unwrap();
        assert_eq!(draft.message.chars().count(), MAX_MESSAGE_CHARS);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let s = "é".repeat(5);
        assert_eq!(truncate_chars(s, 3), "ééé");
    }
}

//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use synergy_core::task_events::TaskSubject;
use synergy_core::task_status::TaskStatus;
use synergy_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::fields::{
    double_option, not_blank, nullable_due_date, optional_due_date, trimmed, trimmed_option,
};
use crate::models::user::UserSummary;

/// A row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "assigneeId")]
    pub assignee: Option<DbId>,
    pub due_date: Option<Timestamp>,
    #[sqlx(try_from = "String")]
    pub status: TaskStatus,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TaskSubject for Task {
    fn title(&self) -> &str {
        &self.title
    }

    fn assignee_id(&self) -> Option<DbId> {
        self.assignee
    }
}

/// A task with its assignee resolved to a display-safe user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetail {
    #[serde(flatten)]
    pub task: Task,
    pub assignee: Option<UserSummary>,
}

/// Join row produced by the listing query (`tasks LEFT JOIN users`).
#[derive(Debug, FromRow)]
pub struct TaskWithAssignee {
    #[sqlx(flatten)]
    pub task: Task,
    pub assignee_name: Option<String>,
    pub assignee_email: Option<String>,
    pub assignee_profile_image: Option<String>,
}

impl From<TaskWithAssignee> for TaskDetail {
    fn from(row: TaskWithAssignee) -> Self {
        let assignee = match (row.task.assignee, row.assignee_name, row.assignee_email) {
            (Some(id), Some(name), Some(email)) => Some(UserSummary {
                id,
                name,
                email,
                profile_image: row.assignee_profile_image,
            }),
            _ => None,
        };
        TaskDetail {
            task: row.task,
            assignee,
        }
    }
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTask {
    pub project_id: DbId,
    #[validate(
        length(min = 1, max = 100, message = "Task title must be 1-100 characters"),
        custom(function = "not_blank", message = "Task title is required")
    )]
    #[serde(deserialize_with = "trimmed")]
    pub title: String,
    #[validate(length(max = 500, message = "Task description cannot be more than 500 characters"))]
    pub description: Option<String>,
    pub assignee: Option<DbId>,
    #[serde(default, deserialize_with = "optional_due_date")]
    pub due_date: Option<Timestamp>,
    /// Defaults to `To-Do` when omitted.
    pub status: Option<TaskStatus>,
}

/// Body of `PUT /tasks/{id}`. Absent fields are left untouched; `assignee`
/// and `dueDate` may be set to `null` to clear them.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTask {
    #[validate(
        length(min = 1, max = 100, message = "Task title must be 1-100 characters"),
        custom(function = "not_blank", message = "Task title cannot be blank")
    )]
    #[serde(default, deserialize_with = "trimmed_option")]
    pub title: Option<String>,
    #[validate(length(max = 500, message = "Task description cannot be more than 500 characters"))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub assignee: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "nullable_due_date")]
    pub due_date: Option<Option<Timestamp>>,
    pub status: Option<TaskStatus>,
}

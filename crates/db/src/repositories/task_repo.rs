//! Repository for the `tasks` table.

use sqlx::PgPool;
use synergy_core::task_status::TaskStatus;
use synergy_core::types::DbId;

use crate::models::task::{CreateTask, Task, TaskDetail, TaskWithAssignee, UpdateTask};
use crate::repositories::UserRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, description, assignee, due_date, status, \
                       created_by, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// If `status` is `None` in the input, the column default (`To-Do`) applies.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTask,
        created_by: DbId,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, title, description, assignee, due_date, status, created_by)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'To-Do'), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(input.title.trim())
            .bind(&input.description)
            .bind(input.assignee)
            .bind(input.due_date)
            .bind(input.status.map(TaskStatus::as_str))
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's tasks, most recently created first, with assignees
    /// resolved. `status` restricts the result to one status value.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
        status: Option<TaskStatus>,
    ) -> Result<Vec<TaskDetail>, sqlx::Error> {
        let rows = sqlx::query_as::<_, TaskWithAssignee>(
            "SELECT t.id, t.project_id, t.title, t.description, t.assignee, t.due_date,
                    t.status, t.created_by, t.created_at, t.updated_at,
                    u.name AS assignee_name,
                    u.email AS assignee_email,
                    u.profile_image AS assignee_profile_image
             FROM tasks t
             LEFT JOIN users u ON u.id = t.assignee
             WHERE t.project_id = $1
               AND ($2::TEXT IS NULL OR t.status = $2)
             ORDER BY t.created_at DESC, t.id DESC",
        )
        .bind(project_id)
        .bind(status.map(TaskStatus::as_str))
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(TaskDetail::from).collect())
    }

    /// Update a task. Absent fields are kept; `Some(None)` clears
    /// `assignee` / `due_date`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                assignee = CASE WHEN $4 THEN $5 ELSE assignee END,
                due_date = CASE WHEN $6 THEN $7 ELSE due_date END,
                status = COALESCE($8, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(input.title.as_deref().map(str::trim))
            .bind(input.description.as_deref())
            .bind(input.assignee.is_some())
            .bind(input.assignee.flatten())
            .bind(input.due_date.is_some())
            .bind(input.due_date.flatten())
            .bind(input.status.map(TaskStatus::as_str))
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Resolve the assignee of an already-loaded task.
    pub async fn populate(pool: &PgPool, task: Task) -> Result<TaskDetail, sqlx::Error> {
        let assignee = match task.assignee {
            Some(id) => UserRepo::find_summary(pool, id).await?,
            None => None,
        };
        Ok(TaskDetail { task, assignee })
    }
}

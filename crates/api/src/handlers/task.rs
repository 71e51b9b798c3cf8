//! Handlers for the `/tasks` resource.
//!
//! Access to a task is access to its project. Creation and status changes
//! run the notifier after the task write; delivery failures do not affect
//! the response.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use synergy_core::access::ensure_access;
use synergy_core::error::CoreError;
use synergy_core::task_events::{on_task_created, on_task_status_changed};
use synergy_core::task_status::TaskStatus;
use synergy_core::types::DbId;
use synergy_db::models::task::{CreateTask, Task, TaskDetail, UpdateTask};
use synergy_db::repositories::TaskRepo;
use synergy_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};
use crate::handlers::project::require_project;
use crate::middleware::auth::AuthUser;
use crate::notifications::deliver;
use crate::response::{ApiResponse, Empty};
use crate::state::AppState;

/// Query parameters for `GET /tasks`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListQuery {
    /// Required; reported as 400 when missing.
    pub project_id: Option<DbId>,
    /// Optional single-status filter.
    pub status: Option<String>,
}

async fn require_task(pool: &DbPool, id: DbId) -> AppResult<Task> {
    TaskRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))
}

/// GET /api/tasks?projectId=&status=
///
/// Tasks of one project, newest first.
pub async fn list_tasks(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TaskListQuery>,
) -> AppResult<Json<ApiResponse<Vec<TaskDetail>>>> {
    let project_id = params
        .project_id
        .ok_or_else(|| AppError::BadRequest("Please provide a project ID".into()))?;
    let status = params
        .status
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(str::parse::<TaskStatus>)
        .transpose()
        .map_err(AppError::BadRequest)?;

    let project = require_project(&state.pool, project_id).await?;
    ensure_access(auth.user_id, &project, "view tasks for this project")?;

    let tasks = TaskRepo::list_for_project(&state.pool, project_id, status).await?;
    Ok(Json(ApiResponse::list(tasks)))
}

/// POST /api/tasks
pub async fn create_task(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateTask>,
) -> AppResult<(StatusCode, Json<ApiResponse<TaskDetail>>)> {
    let project = require_project(&state.pool, input.project_id).await?;
    ensure_access(auth.user_id, &project, "create tasks for this project")?;

    let task = TaskRepo::create(&state.pool, &input, auth.user_id).await?;
    tracing::info!(task_id = task.id, project_id = task.project_id, "Task created");

    deliver(&state.pool, on_task_created(&task, auth.user_id)).await;

    let task = TaskRepo::populate(&state.pool, task).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::data(task))))
}

/// GET /api/tasks/{id}
pub async fn get_task(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ApiResponse<TaskDetail>>> {
    let task = require_task(&state.pool, id).await?;
    let project = require_project(&state.pool, task.project_id).await?;
    ensure_access(auth.user_id, &project, "view this task")?;

    let task = TaskRepo::populate(&state.pool, task).await?;
    Ok(Json(ApiResponse::data(task)))
}

/// PUT /api/tasks/{id}
///
/// Partial update. A status change on an assigned task notifies the
/// assignee unless they made the change.
pub async fn update_task(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateTask>,
) -> AppResult<Json<ApiResponse<TaskDetail>>> {
    let task = require_task(&state.pool, id).await?;
    let project = require_project(&state.pool, task.project_id).await?;
    ensure_access(auth.user_id, &project, "update this task")?;

    let old_status = task.status;
    let updated = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    if input.status.is_some() {
        let draft = on_task_status_changed(old_status, updated.status, &updated, auth.user_id);
        deliver(&state.pool, draft).await;
    }

    let task = TaskRepo::populate(&state.pool, updated).await?;
    Ok(Json(ApiResponse::data(task)))
}

/// DELETE /api/tasks/{id}
pub async fn delete_task(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ApiResponse<Empty>>> {
    let task = require_task(&state.pool, id).await?;
    let project = require_project(&state.pool, task.project_id).await?;
    ensure_access(auth.user_id, &project, "delete this task")?;

    TaskRepo::delete(&state.pool, id).await?;
    tracing::info!(task_id = id, user_id = auth.user_id, "Task deleted");
    Ok(Json(ApiResponse::data(Empty::default())))
}

//! Handlers for the `/projects` resource.
//!
//! Every handler loads the project first (404 if missing) and only then asks
//! the access gate (401 if denied).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use synergy_core::access::{ensure_access, ensure_manage};
use synergy_core::error::CoreError;
use synergy_core::types::DbId;
use synergy_db::models::project::{AddMember, CreateProject, Project, ProjectDetail, UpdateProject};
use synergy_db::repositories::{ProjectRepo, UserRepo};
use synergy_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiPath, ValidatedJson};
use crate::middleware::auth::AuthUser;
use crate::response::{ApiResponse, Empty};
use crate::state::AppState;

/// Load a project or fail with 404.
pub(crate) async fn require_project(pool: &DbPool, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}

/// GET /api/projects
///
/// Projects the caller owns or belongs to, newest first.
pub async fn list_projects(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<ProjectDetail>>>> {
    let projects = ProjectRepo::list_for_user(&state.pool, auth.user_id).await?;
    let projects = ProjectRepo::populate(&state.pool, projects).await?;
    Ok(Json(ApiResponse::list(projects)))
}

/// POST /api/projects
///
/// The caller becomes owner and sole initial member.
pub async fn create_project(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> AppResult<(StatusCode, Json<ApiResponse<ProjectDetail>>)> {
    let project = ProjectRepo::create(&state.pool, auth.user_id, &input).await?;
    tracing::info!(project_id = project.id, user_id = auth.user_id, "Project created");

    let project = ProjectRepo::populate_one(&state.pool, project).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::data(project))))
}

/// GET /api/projects/{id}
pub async fn get_project(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ApiResponse<ProjectDetail>>> {
    let project = require_project(&state.pool, id).await?;
    ensure_access(auth.user_id, &project, "view this project")?;

    let project = ProjectRepo::populate_one(&state.pool, project).await?;
    Ok(Json(ApiResponse::data(project)))
}

/// PUT /api/projects/{id}
pub async fn update_project(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> AppResult<Json<ApiResponse<ProjectDetail>>> {
    let project = require_project(&state.pool, id).await?;
    ensure_manage(auth.user_id, &project, "update this project")?;

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    let project = ProjectRepo::populate_one(&state.pool, project).await?;
    Ok(Json(ApiResponse::data(project)))
}

/// DELETE /api/projects/{id}
///
/// Tasks and discussions of the project are not removed.
pub async fn delete_project(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<Json<ApiResponse<Empty>>> {
    let project = require_project(&state.pool, id).await?;
    ensure_manage(auth.user_id, &project, "delete this project")?;

    ProjectRepo::delete(&state.pool, id).await?;
    tracing::info!(project_id = id, user_id = auth.user_id, "Project deleted");
    Ok(Json(ApiResponse::data(Empty::default())))
}

/// PUT /api/projects/{id}/members
///
/// Add one existing user to the member set.
pub async fn add_member(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ValidatedJson(input): ValidatedJson<AddMember>,
) -> AppResult<Json<ApiResponse<ProjectDetail>>> {
    let project = require_project(&state.pool, id).await?;
    ensure_manage(auth.user_id, &project, "add members to this project")?;

    if UserRepo::find_by_id(&state.pool, input.user_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.user_id,
        }));
    }

    if !ProjectRepo::add_member(&state.pool, id, input.user_id).await? {
        return Err(AppError::BadRequest(
            "User is already a member of this project".into(),
        ));
    }
    tracing::info!(project_id = id, member_id = input.user_id, "Member added");

    let project = require_project(&state.pool, id).await?;
    let project = ProjectRepo::populate_one(&state.pool, project).await?;
    Ok(Json(ApiResponse::data(project)))
}

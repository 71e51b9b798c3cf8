//! Handlers for the `/discussions` resource. Messages are append-only.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use synergy_core::access::ensure_access;
use synergy_core::types::DbId;
use synergy_db::models::discussion::{CreateDiscussion, DiscussionDetail};
use synergy_db::repositories::DiscussionRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiQuery, ValidatedJson};
use crate::handlers::project::require_project;
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query parameters for `GET /discussions`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionListQuery {
    pub project_id: Option<DbId>,
}

/// GET /api/discussions?projectId=
///
/// Messages of one project, oldest first.
pub async fn list_discussions(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<DiscussionListQuery>,
) -> AppResult<Json<ApiResponse<Vec<DiscussionDetail>>>> {
    let project_id = params
        .project_id
        .ok_or_else(|| AppError::BadRequest("Please provide a project ID".into()))?;

    let project = require_project(&state.pool, project_id).await?;
    ensure_access(auth.user_id, &project, "view discussions for this project")?;

    let messages = DiscussionRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(ApiResponse::list(messages)))
}

/// POST /api/discussions
pub async fn create_discussion(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateDiscussion>,
) -> AppResult<(StatusCode, Json<ApiResponse<DiscussionDetail>>)> {
    let project = require_project(&state.pool, input.project_id).await?;
    ensure_access(auth.user_id, &project, "create discussions for this project")?;

    let message = DiscussionRepo::create(
        &state.pool,
        input.project_id,
        auth.user_id,
        input.message.trim(),
    )
    .await?;
    let message = DiscussionRepo::populate(&state.pool, message).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::data(message))))
}

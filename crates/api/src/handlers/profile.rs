//! Handlers for the caller's own account at `/profile`.

use axum::extract::State;
use axum::Json;
use synergy_core::error::CoreError;
use synergy_core::types::DbId;
use synergy_db::models::user::{UpdateProfile, UserResponse};
use synergy_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::auth::normalize_email;
use crate::middleware::auth::AuthUser;
use crate::response::{ApiResponse, Empty};
use crate::state::AppState;

fn user_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "User", id })
}

/// GET /api/profile
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| user_not_found(auth.user_id))?;
    Ok(Json(ApiResponse::data(UserResponse::from(user))))
}

/// PUT /api/profile
///
/// Update name, email or profile image. An email already held by another
/// account is rejected with 400.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(mut input): ValidatedJson<UpdateProfile>,
) -> AppResult<Json<ApiResponse<UserResponse>>> {
    if let Some(email) = input.email.as_deref().map(normalize_email) {
        if let Some(existing) = UserRepo::find_by_email(&state.pool, &email).await? {
            if existing.id != auth.user_id {
                return Err(AppError::BadRequest("Email is already in use".into()));
            }
        }
        input.email = Some(email);
    }

    let user = UserRepo::update_profile(&state.pool, auth.user_id, &input)
        .await?
        .ok_or_else(|| user_not_found(auth.user_id))?;
    Ok(Json(ApiResponse::data(UserResponse::from(user))))
}

/// DELETE /api/profile
///
/// Delete the caller's account. Owned projects, tasks and messages remain.
pub async fn delete_profile(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Empty>>> {
    if !UserRepo::delete(&state.pool, auth.user_id).await? {
        return Err(user_not_found(auth.user_id));
    }
    tracing::info!(user_id = auth.user_id, "Account deleted");
    Ok(Json(ApiResponse::data(Empty::default())))
}

//! Development-only error detail.
//!
//! [`AppError`](crate::error::AppError) always answers 500s with a sanitized
//! message and stashes the real cause in an [`InternalErrorDetail`]
//! extension. When `APP_ENV=development` this middleware copies that cause
//! into an `error` field of the body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::{InternalErrorDetail, INTERNAL_ERROR_MESSAGE};

/// `map_response` function; install with
/// `axum::middleware::map_response(expose_internal_errors)`.
pub async fn expose_internal_errors(response: Response) -> Response {
    let Some(InternalErrorDetail(detail)) = response.extensions().get::<InternalErrorDetail>().cloned()
    else {
        return response;
    };

    let body = json!({
        "success": false,
        "message": INTERNAL_ERROR_MESSAGE,
        "code": "INTERNAL_ERROR",
        "error": detail,
    });
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

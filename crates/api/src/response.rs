//! Shared response envelope types for API handlers.
//!
//! Every successful response uses the `{ "success": true, ... }` envelope.
//! Use [`ApiResponse`] instead of ad-hoc `serde_json::json!` so the shape is
//! checked at compile time.

use serde::Serialize;
use synergy_db::models::user::UserResponse;

/// Standard success envelope.
///
/// `count` is present on list responses, `message` on actions that report
/// one, `data` whenever there is a payload.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::list(projects)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// `{ success: true, data }`
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            count: None,
            message: None,
            data: Some(data),
        }
    }

    /// Attach a human-readable message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: Serialize> ApiResponse<Vec<T>> {
    /// `{ success: true, count, data }`
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(items.len()),
            message: None,
            data: Some(items),
        }
    }
}

/// Serializes as `{}`. Used as the payload of delete responses.
#[derive(Debug, Default, Serialize)]
pub struct Empty {}

/// Body returned by signup and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub data: UserResponse,
}

impl AuthResponse {
    pub fn new(token: String, user: UserResponse) -> Self {
        Self {
            success: true,
            token,
            data: user,
        }
    }
}

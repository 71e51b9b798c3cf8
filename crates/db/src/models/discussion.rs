//! Discussion message model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use synergy_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::fields::not_blank;
use crate::models::user::UserSummary;

/// A row from the `discussions` table. Messages are never edited.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discussion {
    pub id: DbId,
    pub project_id: DbId,
    pub user_id: DbId,
    pub message: String,
    /// Server-assigned posting time.
    #[serde(rename = "timestamp")]
    pub created_at: Timestamp,
}

/// A message with its author resolved.
#[derive(Debug, Clone, Serialize)]
pub struct DiscussionDetail {
    #[serde(flatten)]
    pub discussion: Discussion,
    pub author: Option<UserSummary>,
}

/// Join row produced by the listing query (`discussions LEFT JOIN users`).
#[derive(Debug, FromRow)]
pub struct DiscussionWithAuthor {
    #[sqlx(flatten)]
    pub discussion: Discussion,
    pub author_name: Option<String>,
    pub author_email: Option<String>,
    pub author_profile_image: Option<String>,
}

impl From<DiscussionWithAuthor> for DiscussionDetail {
    fn from(row: DiscussionWithAuthor) -> Self {
        let author = match (row.author_name, row.author_email) {
            (Some(name), Some(email)) => Some(UserSummary {
                id: row.discussion.user_id,
                name,
                email,
                profile_image: row.author_profile_image,
            }),
            _ => None,
        };
        DiscussionDetail {
            discussion: row.discussion,
            author,
        }
    }
}

/// Body of `POST /discussions`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateDiscussion {
    pub project_id: DbId,
    #[validate(
        length(min = 1, max = 1000, message = "Message must be 1-1000 characters"),
        custom(function = "not_blank", message = "Message is required")
    )]
    pub message: String,
}

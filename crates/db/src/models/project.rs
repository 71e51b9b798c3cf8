//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use synergy_core::access::ProjectScope;
use synergy_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::fields::{not_blank, trimmed, trimmed_option};
use crate::models::user::UserSummary;

/// A project row joined with its member ids (from `project_members`).
#[derive(Debug, Clone, FromRow)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_by: DbId,
    /// Ordered by the time each member was added.
    pub member_ids: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProjectScope for Project {
    fn owner_id(&self) -> DbId {
        self.created_by
    }

    fn member_ids(&self) -> &[DbId] {
        &self.member_ids
    }
}

/// A project with owner and members resolved to display-safe users.
///
/// `created_by` is `None` when the owner's account no longer exists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_by_id: DbId,
    pub created_by: Option<UserSummary>,
    pub members: Vec<UserSummary>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProjectDetail {
    /// Compose from a stored project and a lookup of already-loaded users.
    ///
    /// Member ids with no matching user are skipped.
    pub fn compose(project: Project, lookup: impl Fn(DbId) -> Option<UserSummary>) -> Self {
        let members = project.member_ids.iter().filter_map(|&id| lookup(id)).collect();
        Self {
            id: project.id,
            created_by: lookup(project.created_by),
            created_by_id: project.created_by,
            name: project.name,
            description: project.description,
            members,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// Body of `POST /projects`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateProject {
    #[validate(
        length(min = 1, max = 100, message = "Project name must be 1-100 characters"),
        custom(function = "not_blank", message = "Project name cannot be blank")
    )]
    #[serde(deserialize_with = "trimmed")]
    pub name: String,
    #[validate(length(max = 500, message = "Description cannot be more than 500 characters"))]
    pub description: Option<String>,
}

/// Body of `PUT /projects/{id}`. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateProject {
    #[validate(
        length(min = 1, max = 100, message = "Project name must be 1-100 characters"),
        custom(function = "not_blank", message = "Project name cannot be blank")
    )]
    #[serde(default, deserialize_with = "trimmed_option")]
    pub name: Option<String>,
    #[validate(length(max = 500, message = "Description cannot be more than 500 characters"))]
    pub description: Option<String>,
}

/// Body of `PUT /projects/{id}/members`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddMember {
    #[validate(range(min = 1, message = "Please provide a valid user ID"))]
    pub user_id: DbId,
}

//! Repository for the `discussions` table. Append-only: there is no update
//! or delete.

use sqlx::PgPool;
use synergy_core::types::DbId;

use crate::models::discussion::{Discussion, DiscussionDetail, DiscussionWithAuthor};
use crate::repositories::UserRepo;

/// Provides append and listing operations for discussion messages.
pub struct DiscussionRepo;

impl DiscussionRepo {
    /// Append a message. The timestamp is assigned by the database.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
        message: &str,
    ) -> Result<Discussion, sqlx::Error> {
        sqlx::query_as::<_, Discussion>(
            "INSERT INTO discussions (project_id, user_id, message)
             VALUES ($1, $2, $3)
             RETURNING id, project_id, user_id, message, created_at",
        )
        .bind(project_id)
        .bind(user_id)
        .bind(message)
        .fetch_one(pool)
        .await
    }

    /// List a project's messages oldest first, authors resolved.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<DiscussionDetail>, sqlx::Error> {
        let rows = sqlx::query_as::<_, DiscussionWithAuthor>(
            "SELECT d.id, d.project_id, d.user_id, d.message, d.created_at,
                    u.name AS author_name,
                    u.email AS author_email,
                    u.profile_image AS author_profile_image
             FROM discussions d
             LEFT JOIN users u ON u.id = d.user_id
             WHERE d.project_id = $1
             ORDER BY d.created_at ASC, d.id ASC",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(DiscussionDetail::from).collect())
    }

    /// Resolve the author of a freshly created message.
    pub async fn populate(
        pool: &PgPool,
        discussion: Discussion,
    ) -> Result<DiscussionDetail, sqlx::Error> {
        let author = UserRepo::find_summary(pool, discussion.user_id).await?;
        Ok(DiscussionDetail { discussion, author })
    }
}

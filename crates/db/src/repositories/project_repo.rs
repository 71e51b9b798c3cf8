//! Repository for the `projects` and `project_members` tables.

use std::collections::HashMap;

use sqlx::PgPool;
use synergy_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectDetail, UpdateProject};
use crate::models::user::UserSummary;
use crate::repositories::UserRepo;

/// Member ids aggregated for the project aliased `p`, oldest membership first.
const MEMBER_IDS: &str = "COALESCE(
        (SELECT array_agg(pm.user_id ORDER BY pm.added_at, pm.user_id)
         FROM project_members pm WHERE pm.project_id = p.id),
        ARRAY[]::BIGINT[]
    ) AS member_ids";

/// Provides CRUD and membership operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project owned by `owner`, who also becomes its sole member.
    ///
    /// Both rows are written by one statement.
    pub async fn create(
        pool: &PgPool,
        owner: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        sqlx::query_as::<_, Project>(
            "WITH p AS (
                INSERT INTO projects (name, description, created_by)
                VALUES ($1, $2, $3)
                RETURNING id, name, description, created_by, created_at, updated_at
             ), m AS (
                INSERT INTO project_members (project_id, user_id)
                SELECT id, created_by FROM p
             )
             SELECT p.id, p.name, p.description, p.created_by,
                    ARRAY[p.created_by] AS member_ids,
                    p.created_at, p.updated_at
             FROM p",
        )
        .bind(input.name.trim())
        .bind(&input.description)
        .bind(owner)
        .fetch_one(pool)
        .await
    }

    /// Find a project by its internal ID, with member ids.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "SELECT p.id, p.name, p.description, p.created_by, {MEMBER_IDS},
                    p.created_at, p.updated_at
             FROM projects p
             WHERE p.id = $1"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects the user owns or belongs to, most recently created first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT p.id, p.name, p.description, p.created_by, {MEMBER_IDS},
                    p.created_at, p.updated_at
             FROM projects p
             WHERE p.created_by = $1
                OR EXISTS (SELECT 1 FROM project_members pm
                           WHERE pm.project_id = p.id AND pm.user_id = $1)
             ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                UPDATE projects SET
                    name = COALESCE($2, name),
                    description = COALESCE($3, description)
                WHERE id = $1
                RETURNING id, name, description, created_by, created_at, updated_at
             )
             SELECT p.id, p.name, p.description, p.created_by, {MEMBER_IDS},
                    p.created_at, p.updated_at
             FROM p"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.description.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a project and its member set. Tasks and discussions that
    /// reference it are not touched.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Add `user_id` to the member set.
    ///
    /// Returns `false` if the user was already a member.
    pub async fn add_member(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO project_members (project_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT (project_id, user_id) DO NOTHING",
        )
        .bind(project_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Resolve owners and members of `projects` to display-safe users with a
    /// single lookup. Input order is preserved.
    pub async fn populate(
        pool: &PgPool,
        projects: Vec<Project>,
    ) -> Result<Vec<ProjectDetail>, sqlx::Error> {
        let ids = projects
            .iter()
            .flat_map(|p| std::iter::once(p.created_by).chain(p.member_ids.iter().copied()));
        let users = Self::user_lookup(pool, ids).await?;

        Ok(projects
            .into_iter()
            .map(|p| ProjectDetail::compose(p, |id| users.get(&id).cloned()))
            .collect())
    }

    /// [`populate`](Self::populate) for a single project.
    pub async fn populate_one(pool: &PgPool, project: Project) -> Result<ProjectDetail, sqlx::Error> {
        let ids = std::iter::once(project.created_by).chain(project.member_ids.iter().copied());
        let users = Self::user_lookup(pool, ids).await?;
        Ok(ProjectDetail::compose(project, |id| users.get(&id).cloned()))
    }

    async fn user_lookup(
        pool: &PgPool,
        ids: impl Iterator<Item = DbId>,
    ) -> Result<HashMap<DbId, UserSummary>, sqlx::Error> {
        let mut ids: Vec<DbId> = ids.collect();
        ids.sort_unstable();
        ids.dedup();

        Ok(UserRepo::find_summaries(pool, &ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect())
    }
}

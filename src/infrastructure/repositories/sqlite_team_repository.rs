use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

use super::map_write_error;
use crate::domain::repositories::{RepositoryError, TeamRepository};
use crate::domain::team::{Team, TeamStatus};

const SELECT_TEAM: &str = r#"
    SELECT id, name, members, status, active, created_at, updated_at
    FROM teams
"#;

#[derive(sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    members: Json<Vec<String>>,
    status: TeamStatus,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Team::from_persistence(
            row.id,
            row.name,
            row.members.0,
            row.status,
            row.active,
            row.created_at,
            row.updated_at,
        )
    }
}

/// SQLite implementation of TeamRepository
///
/// A partial unique index on `active` keeps at most one active row; writes
/// that would break it fail with `ActiveConflict`.
#[derive(Clone)]
pub struct SqliteTeamRepository {
    pool: SqlitePool,
}

impl SqliteTeamRepository {
    /// Creates a new SqliteTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool with migrations applied
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch_all(&self, sql: &str, status: Option<TeamStatus>) -> Result<Vec<Team>, RepositoryError> {
        let mut query = sqlx::query_as::<_, TeamRow>(sql);
        if let Some(status) = status {
            query = query.bind(status);
        }

        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Team::from).collect())
    }
}

#[async_trait]
impl TeamRepository for SqliteTeamRepository {
    async fn create(&self, team: &Team) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO teams (id, name, members, status, active, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .bind(Json(team.members().to_vec()))
        .bind(team.status())
        .bind(team.is_active())
        .bind(team.created_at())
        .bind(team.updated_at())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(())
    }

    async fn save(&self, team: &Team) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE teams
            SET name = ?1, members = ?2, status = ?3, active = ?4, updated_at = ?5
            WHERE id = ?6
            "#,
        )
        .bind(team.name())
        .bind(Json(team.members().to_vec()))
        .bind(team.status())
        .bind(team.is_active())
        .bind(team.updated_at())
        .bind(team.id())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(team.id()));
        }

        Ok(())
    }

    async fn update_status(&self, team: &Team) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE teams SET status = ?1, active = ?2, updated_at = ?3 WHERE id = ?4",
        )
        .bind(team.status())
        .bind(team.is_active())
        .bind(team.updated_at())
        .bind(team.id())
        .execute(&self.pool)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(team.id()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, RepositoryError> {
        let row = sqlx::query_as::<_, TeamRow>(&format!("{SELECT_TEAM} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Team::from))
    }

    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError> {
        self.fetch_all(&format!("{SELECT_TEAM} ORDER BY name ASC"), None)
            .await
    }

    async fn find_by_status(&self, status: TeamStatus) -> Result<Vec<Team>, RepositoryError> {
        self.fetch_all(
            &format!("{SELECT_TEAM} WHERE status = ?1 ORDER BY name ASC"),
            Some(status),
        )
        .await
    }

    async fn find_active(&self) -> Result<Option<Team>, RepositoryError> {
        let row = sqlx::query_as::<_, TeamRow>(&format!("{SELECT_TEAM} WHERE active = 1"))
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Team::from))
    }

    async fn activate(&self, team: &Team) -> Result<bool, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        // Clear first: the unique index on active is checked row by row.
        sqlx::query("UPDATE teams SET active = 0, updated_at = ?1 WHERE active = 1 AND id != ?2")
            .bind(team.updated_at())
            .bind(team.id())
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query(
            r#"
            UPDATE teams
            SET status = ?1, active = ?2, updated_at = ?3
            WHERE id = ?4 AND status = ?5
            "#,
        )
        .bind(team.status())
        .bind(team.is_active())
        .bind(team.updated_at())
        .bind(team.id())
        .bind(TeamStatus::Unpresented)
        .execute(&mut *tx)
        .await
        .map_err(map_write_error)?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }

    async fn reset_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("UPDATE teams SET status = ?1, active = 0, updated_at = ?2")
            .bind(TeamStatus::Unpresented)
            .bind(Utc::now())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM teams WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(())
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM teams")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

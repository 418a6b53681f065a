use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::repositories::{RepositoryError, TeamRepository};
use crate::domain::team::{Team, TeamId};

/// Row shape of the `teams` table
#[derive(Debug, sqlx::FromRow)]
struct TeamRow {
    id: i64,
    name: String,
    address: String,
    size: i32,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Team::from_persistence(row.id, row.name, row.address, row.size)
    }
}

/// PostgreSQL implementation of TeamRepository
///
/// Ids come from the `BIGSERIAL` primary key, so they are assigned by the
/// database on insert.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, team: &Team) -> Result<Team, RepositoryError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            INSERT INTO teams (name, address, size)
            VALUES ($1, $2, $3)
            RETURNING id, name, address, size
            "#,
        )
        .bind(team.name())
        .bind(team.address())
        .bind(team.size())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: TeamId, team: &Team) -> Result<Team, RepositoryError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            UPDATE teams
            SET name = $2, address = $3, size = $4
            WHERE id = $1
            RETURNING id, name, address, size
            "#,
        )
        .bind(id)
        .bind(team.name())
        .bind(team.address())
        .bind(team.size())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Team::from).ok_or(RepositoryError::Missing(id))
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: Team) -> Result<Team, RepositoryError> {
        match team.id() {
            None => self.insert(&team).await,
            Some(id) => self.update(id, &team).await,
        }
    }

    async fn find_by_id(&self, id: TeamId) -> Result<Option<Team>, RepositoryError> {
        let row = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, address, size
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Team::from))
    }

    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError> {
        let rows = sqlx::query_as::<_, TeamRow>(
            r#"
            SELECT id, name, address, size
            FROM teams
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Team::from).collect())
    }

    async fn delete_by_id(&self, id: TeamId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(team_id = id, "Delete matched no team");
        }

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM teams").execute(&self.pool).await?;
        Ok(())
    }
}

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::team::{Team, TeamId};

/// Failures raised by a team store
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("No stored team with id {0}")]
    Missing(TeamId),
}

/// Repository trait for Team aggregate
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations should handle storage-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team
    ///
    /// Inserts when the team has no id yet and returns it with the id the
    /// store assigned; otherwise overwrites the stored row with that id.
    async fn save(&self, team: Team) -> Result<Team, RepositoryError>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: TeamId) -> Result<Option<Team>, RepositoryError>;

    /// Find all teams in storage order
    async fn find_all(&self) -> Result<Vec<Team>, RepositoryError>;

    /// Delete a team by ID; a missing id is not an error
    async fn delete_by_id(&self, id: TeamId) -> Result<(), RepositoryError>;

    /// Delete every stored team
    async fn delete_all(&self) -> Result<(), RepositoryError>;
}

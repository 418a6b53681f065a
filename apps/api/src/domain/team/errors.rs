use thiserror::Error;

use super::team::TeamId;
use super::validation::ValidationErrors;
use crate::domain::repositories::RepositoryError;

/// Errors that can occur in team operations
#[derive(Debug, Error)]
pub enum TeamError {
    #[error("Invalid team: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Team not found: {0}")]
    NotFound(TeamId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type TeamResult<T> = Result<T, TeamError>;

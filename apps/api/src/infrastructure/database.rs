use std::sync::Arc;

use sqlx::migrate::MigrateError;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::{DatabaseConfig, StorageBackend};
use crate::domain::repositories::TeamRepository;
use crate::infrastructure::repositories::{InMemoryTeamRepository, PostgresTeamRepository};

/// Opens a PostgreSQL connection pool
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Applies the embedded migrations under `migrations/`
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Failure while preparing the configured team store
#[derive(Debug, thiserror::Error)]
pub enum StoreSetupError {
    #[error("Failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] MigrateError),
}

/// Builds the team repository selected by `database.backend`
pub async fn team_repository(
    config: &DatabaseConfig,
) -> Result<Arc<dyn TeamRepository>, StoreSetupError> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory team store; data is lost on restart");
            Ok(Arc::new(InMemoryTeamRepository::new()))
        }
        StorageBackend::Postgres => {
            tracing::info!("Connecting to database...");
            let pool = connect(config).await?;
            tracing::info!("Database connected successfully");

            if config.run_migrations {
                run_migrations(&pool).await?;
                tracing::info!("Database migrations applied");
            }

            Ok(Arc::new(PostgresTeamRepository::new(pool)))
        }
    }
}

use sporting_api::api::{build_router, AppState};
use sporting_api::config::AppConfig;
use sporting_api::infrastructure::database::{self, StoreSetupError};
use sporting_api::infrastructure::logging::init_logging;

/// Failures that stop the server from starting
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Store(#[from] StoreSetupError),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("Server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    init_logging(&config.logging);

    let repository = database::team_repository(&config.database).await?;
    let app = build_router(AppState::new(repository));

    // Start server
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.clone(),
            source,
        })?;

    if let Ok(local) = listener.local_addr() {
        tracing::info!("Server listening on {}", local);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}

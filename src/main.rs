//! idledger server — identifier-generation log query service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use idledger_core::config::AppConfig;
use idledger_core::error::AppError;
use idledger_database::DatabasePool;
use idledger_database::repositories::{LogEntryRepository, SourceRepository, UserRepository};
use idledger_service::{LogQueryService, LogStore, SourceLookup, UserLookup};

#[tokio::main]
async fn main() {
    let env = std::env::var("IDLEDGER_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting idledger v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    idledger_database::migration::run_migrations(db.pool()).await?;

    // ── Step 2: Initialize repositories ──────────────────────────
    let source_repo = Arc::new(SourceRepository::new(db.pool().clone()));
    let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
    let log_repo = Arc::new(LogEntryRepository::new(db.pool().clone()));

    // ── Step 3: Initialize the query service ─────────────────────
    let log_query = Arc::new(LogQueryService::new(
        source_repo.clone() as Arc<dyn SourceLookup>,
        user_repo.clone() as Arc<dyn UserLookup>,
        log_repo.clone() as Arc<dyn LogStore>,
    ));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = idledger_api::AppState {
        config: Arc::new(config.clone()),
        db: db.clone(),
        source_repo,
        user_repo,
        log_repo,
        log_query,
    };

    let app = idledger_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("idledger server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    db.close().await;
    tracing::info!("idledger server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

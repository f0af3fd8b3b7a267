//! HTTP server initialization and runtime setup.
//!
//! Builds the storage backend, the QR encoder and the link service from the
//! loaded [`Config`], then runs the Axum server until shutdown.

use crate::application::services::LinkService;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::persistence::{InMemoryLinkRepository, PgLinkRepository};
use crate::infrastructure::qr::PngQrEncoder;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Link repository (PostgreSQL pool + migrations, or in-memory)
/// - Link service with the PNG QR encoder
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let link_repository = build_repository(&config).await?;

    let link_service = LinkService::new(
        link_repository,
        Arc::new(PngQrEncoder::new(config.qr_module_size)),
        Arc::new(RandomCodeGenerator),
        config.base_url.clone(),
    );

    let state = AppState::new(Arc::new(link_service));

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn build_repository(config: &Config) -> Result<Arc<dyn LinkRepository>> {
    match (config.storage, &config.database_url) {
        (StorageBackend::Postgres, Some(database_url)) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;
            tracing::info!("Migrations applied");

            Ok(Arc::new(PgLinkRepository::new(Arc::new(pool))))
        }
        (StorageBackend::Postgres, None) => {
            anyhow::bail!("DATABASE_URL is required for the postgres storage backend")
        }
        (StorageBackend::Memory, _) => {
            tracing::warn!("Using in-memory storage; links are lost on restart");
            Ok(Arc::new(InMemoryLinkRepository::new()))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

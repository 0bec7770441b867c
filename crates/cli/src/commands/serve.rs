use std::sync::Arc;

use anyhow::{Context as _, Result};
use unionboard_core::ServerConfig;
use unionboard_http::{create_router, AppState};
use unionboard_service::IssueService;
use unionboard_storage::StorageBackend;

pub(crate) async fn run(port: Option<u16>, host: Option<String>) -> Result<()> {
    let config = ServerConfig::from_env()?;
    let addr = bind_addr(&config.bind_addr, host.as_deref(), port);

    let storage = open_storage(config.database_url.as_deref()).await?;
    tracing::info!(backend = storage.kind(), "issue store ready");

    if let Some(ref path) = config.version_file {
        tracing::info!(path = %path.display(), "publishing version descriptor");
    }
    let issue_service = Arc::new(IssueService::new(Arc::new(storage)));
    let state = Arc::new(AppState::new(issue_service, config.admin, config.version_file));

    let router = create_router(state);
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, router).await?;

    Ok(())
}

async fn open_storage(database_url: Option<&str>) -> Result<StorageBackend> {
    match database_url {
        Some(url) => Ok(StorageBackend::new_postgres(url)
            .await
            .context("failed to connect to PostgreSQL")?),
        None => Ok(memory_storage()),
    }
}

fn memory_storage() -> StorageBackend {
    tracing::warn!("UNIONBOARD_DATABASE_URL not set, issues are kept in memory and lost on exit");
    StorageBackend::new_memory()
}

/// Applies `--host` / `--port` over the configured `host:port`.
fn bind_addr(configured: &str, host: Option<&str>, port: Option<u16>) -> String {
    let (base_host, base_port) = configured.rsplit_once(':').unwrap_or((configured, ""));
    let host = host.unwrap_or(base_host);
    match port {
        Some(port) => format!("{host}:{port}"),
        None => format!("{host}:{base_port}"),
    }
}

//! HTTP API server for unionboard.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod auth;
mod handlers;
mod payload;
mod response_types;

use axum::{
    Json, Router,
    routing::{get, put},
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use unionboard_core::AdminCredentials;
use unionboard_service::IssueService;

pub use auth::AdminUser;
pub use response_types::{CreatedResponse, IssueResponse, MutationResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Issue CRUD over the configured store
    pub issue_service: Arc<IssueService>,
    /// The shared admin credential pair
    pub admin: AdminCredentials,
    /// Version descriptor served at `/meta/version`
    pub version_file: Option<PathBuf>,
}

impl AppState {
    #[must_use]
    pub const fn new(
        issue_service: Arc<IssueService>,
        admin: AdminCredentials,
        version_file: Option<PathBuf>,
    ) -> Self {
        Self { issue_service, admin, version_file }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/admin", get(handlers::admin::admin_page))
        .route(
            "/issues",
            get(handlers::issues::list_issues).post(handlers::issues::create_issue),
        )
        .route(
            "/issues/{id}",
            put(handlers::issues::update_issue).delete(handlers::issues::delete_issue),
        )
        .route("/meta/version", get(handlers::meta::version_descriptor))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}

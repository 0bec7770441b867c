//! Admin management page - embedded HTML for listing and editing issues.
//!
//! The page talks to the same `/issues` endpoints; the browser replays the
//! Basic credentials it was challenged for.

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};

use crate::auth::AdminUser;

/// Embedded HTML for the admin page
pub const ADMIN_HTML: &str = include_str!("../../admin.html");

pub async fn admin_page(admin: AdminUser) -> Response {
    tracing::info!(user = %admin.username, "admin page served");
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(ADMIN_HTML))
        .into_response()
}

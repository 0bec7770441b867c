//! HTTP Basic credential check for admin routes.
//!
//! Handlers that mutate issues or serve the admin page take an
//! [`AdminUser`] argument; extraction fails with 401 before the body is
//! read or the store is touched.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use unionboard_core::AdminCredentials;

use crate::AppState;
use crate::api_error::ApiError;

/// Proof that the request carried the configured admin credentials.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub username: String,
}

impl FromRequestParts<Arc<AppState>> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Some((username, password)) = basic_credentials(&parts.headers) else {
            tracing::debug!(path = %parts.uri.path(), "admin request without basic credentials");
            return Err(ApiError::Unauthorized);
        };
        if !verify(&state.admin, &username, &password) {
            tracing::warn!(path = %parts.uri.path(), "admin credential check failed");
            return Err(ApiError::Unauthorized);
        }
        Ok(Self { username })
    }
}

/// Decodes `Authorization: Basic base64(user:pass)`.
pub(crate) fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_owned(), password.to_owned()))
}

/// Both halves are always compared so timing does not reveal which one failed.
pub(crate) fn verify(expected: &AdminCredentials, username: &str, password: &str) -> bool {
    let user_ok = constant_time_eq(username.as_bytes(), expected.username.as_bytes());
    let pass_ok = constant_time_eq(password.as_bytes(), expected.password.as_bytes());
    user_ok & pass_ok
}

fn constant_time_eq(left: &[u8], right: &[u8]) -> bool {
    let mut diff = left.len() ^ right.len();
    for i in 0..left.len().max(right.len()) {
        let a = left.get(i).copied().unwrap_or(0);
        let b = right.get(i).copied().unwrap_or(0);
        diff |= usize::from(a ^ b);
    }
    diff == 0
}

//! Shared constants for unionboard.

/// Default bind address for the issue API server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Default base URL the client uses to reach the issue API.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Path under the API base where the server publishes its version descriptor.
pub const VERSION_DESCRIPTOR_PATH: &str = "/meta/version";

/// Upper bound for a single client fetch before it is abandoned as failed.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Realm announced in `WWW-Authenticate` challenges.
pub const ADMIN_REALM: &str = "unionboard";

/// Directory name under the platform data dir for client state files.
pub const CLIENT_DATA_DIR: &str = "unionboard";

//! # Data Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  sqlx::Error / tokio timeout                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreUnavailableError (this module) ← names the phase that failed     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Binary logs a warning and carries on; the catalog never sees it       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;
use thiserror::Error;

/// The configured data store could not be reached.
#[derive(Debug, Error)]
pub enum StoreUnavailableError {
    /// The database URL could not be parsed.
    #[error("Invalid database URL: {0}")]
    InvalidUrl(String),

    /// Opening a connection failed.
    ///
    /// ## When This Occurs
    /// - Server not listening / host unreachable
    /// - Bad credentials
    /// - No driver for the URL scheme
    /// - SQLite file missing and not allowed to be created
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// No connection within the configured timeout.
    #[error("Connection timed out after {0:?}")]
    Timeout(Duration),

    /// Connected, but the server did not answer the ping.
    #[error("Ping failed: {0}")]
    PingFailed(String),
}

/// Convert sqlx errors to StoreUnavailableError.
///
/// ```text
/// sqlx::Error::Configuration → InvalidUrl
/// sqlx::Error::PoolTimedOut  → ConnectionFailed
/// Other                      → ConnectionFailed
/// ```
impl From<sqlx::Error> for StoreUnavailableError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Configuration(e) => StoreUnavailableError::InvalidUrl(e.to_string()),
            other => StoreUnavailableError::ConnectionFailed(other.to_string()),
        }
    }
}

/// Result type for data store operations.
pub type StoreResult<T> = Result<T, StoreUnavailableError>;

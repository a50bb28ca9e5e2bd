//! Typed errors for page fetching.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on the failure class. Extraction itself is total and has no error type.

use thiserror::Error;

/// Errors that can occur while fetching a job-posting page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport failed (connection, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status; the page body is
    /// considered unavailable as a whole
    #[error("HTTP status {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Convenience alias for fetch results.
pub type FetchResult<T> = Result<T, FetchError>;

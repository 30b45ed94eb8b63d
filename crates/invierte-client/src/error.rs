//! Error types for invierte-client.

use thiserror::Error;

/// Result type alias for invierte-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the project-listing API.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Transport-level failure (connect, timeout, TLS) or body decode
    /// failure surfaced by the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned HTTP {status} for {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The requested URL.
        url: String,
    },
}

impl Error {
    /// Returns whether re-triggering the request could plausibly succeed.
    ///
    /// Transport failures and server-side (5xx) statuses are retryable;
    /// client-side (4xx) statuses and decode failures are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(source) => !source.is_decode(),
            Error::Status { status, .. } => *status >= 500,
        }
    }
}

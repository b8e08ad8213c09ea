//! Error types for the ephe-dl library
//!
//! Provides error handling for listing and download operations.

use std::fmt;

/// Main error type for ephe-dl operations
#[derive(Debug)]
pub enum Error {
    /// Listing page fetch returned a non-success HTTP status.
    /// Fatal for the whole run: no file downloads are attempted.
    ListingFailed(u16),

    /// HTTP-specific error
    HttpError(String),

    /// Network connectivity issues (connect failures, timeouts)
    NetworkError(String),

    /// File I/O error
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ListingFailed(status) => {
                write!(f, "Listing fetch failed with HTTP status {}", status)
            }
            Error::HttpError(msg) => {
                write!(f, "HTTP error: {}", msg)
            }
            Error::NetworkError(msg) => {
                write!(f, "Network error: {}", msg)
            }
            Error::IoError(err) => {
                write!(f, "I/O error: {}", err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Error::NetworkError(err.to_string())
        } else {
            Error::HttpError(err.to_string())
        }
    }
}

/// Convenience result type for ephe-dl operations
pub type Result<T> = std::result::Result<T, Error>;

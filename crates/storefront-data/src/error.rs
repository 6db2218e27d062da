//! Catalog client error types.

use thiserror::Error;

/// Errors that can occur when talking to the remote catalog.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The requested resource does not exist upstream.
    #[error("Not found")]
    NotFound,

    /// The upstream returned a non-success status.
    #[error("Upstream returned HTTP {status}")]
    Upstream { status: u16 },

    /// The request could not be sent or the connection failed.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

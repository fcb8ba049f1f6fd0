//! Error type for a single raw-file fetch.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop a fetch. Only `Remote` and `Transport` involve the network;
/// `MissingToken` and `InvalidRequest` are raised before any request is sent.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The credential environment variable is not set.
    #[error("{var} not found in environment")]
    MissingToken { var: String },

    /// The token contains CR, LF or NUL and cannot be sent as a header value.
    #[error("API token contains a line break or NUL byte")]
    InvalidToken,

    /// A request field was empty.
    #[error("invalid download request: {field} must not be empty")]
    InvalidRequest { field: &'static str },

    /// `server_url` did not parse or is not http(s).
    #[error("invalid server URL {url:?}: {reason}")]
    InvalidServerUrl { url: String, reason: String },

    /// Server answered with a non-2xx status. The body is discarded.
    #[error("failed to download file: HTTP {status}")]
    Remote { status: u32 },

    /// libcurl failed before a status was available (DNS, TLS, malformed URL, ...).
    #[error("GET request failed: {0}")]
    Transport(#[from] curl::Error),

    /// Writing the output file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// HTTP status carried by a `Remote` error.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Remote { status } => Some(*status),
            _ => None,
        }
    }
}

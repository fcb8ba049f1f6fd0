//! Authenticated download of one file from the raw-file endpoint.
//!
//! One GET, one status check, one write. The body is buffered in memory and
//! written only after a 2xx status, so a failed request never touches the output path.

use crate::credential::AuthToken;
use crate::error::FetchError;
use crate::request::{normalize_server_url, DownloadRequest, PathEncoding};
use crate::transport::{CurlTransport, Transport};

/// Header GitLab reads the token from.
pub const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Number of bytes written to the output path.
pub type BytesWritten = u64;

pub struct FileFetcher<T = CurlTransport> {
    transport: T,
    server_url: String,
    encoding: PathEncoding,
}

impl FileFetcher<CurlTransport> {
    /// Fetcher using libcurl against `server_url` (e.g. `https://gitlab.com`).
    pub fn new(server_url: &str, encoding: PathEncoding) -> Result<Self, FetchError> {
        Self::with_transport(CurlTransport, server_url, encoding)
    }
}

impl<T: Transport> FileFetcher<T> {
    pub fn with_transport(
        transport: T,
        server_url: &str,
        encoding: PathEncoding,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            transport,
            server_url: normalize_server_url(server_url)?,
            encoding,
        })
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    pub fn url_for(&self, request: &DownloadRequest) -> String {
        request.raw_file_url(&self.server_url, self.encoding)
    }

    /// Download `request` and write the body to its output path, replacing any existing file.
    /// The parent directory must already exist.
    pub fn fetch(
        &self,
        request: &DownloadRequest,
        token: &AuthToken,
    ) -> Result<BytesWritten, FetchError> {
        if !token.is_header_safe() {
            return Err(FetchError::InvalidToken);
        }

        let url = self.url_for(request);
        tracing::info!(%url, output = %request.output_path().display(), "fetching file");

        let response = self
            .transport
            .get(&url, &[(TOKEN_HEADER, token.as_str())])?;

        if !response.is_success() {
            tracing::warn!(%url, status = response.status, "download failed");
            return Err(FetchError::Remote {
                status: response.status,
            });
        }

        let path = request.output_path();
        std::fs::write(path, &response.body).map_err(|source| FetchError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let written = response.body.len() as BytesWritten;
        tracing::info!(bytes = written, output = %path.display(), "file downloaded");
        Ok(written)
    }

    /// Read the token from `token_env` now, then fetch.
    /// A missing variable fails before any request is made.
    pub fn fetch_with_env_token(
        &self,
        request: &DownloadRequest,
        token_env: &str,
    ) -> Result<BytesWritten, FetchError> {
        let token = AuthToken::from_env(token_env)?;
        self.fetch(request, &token)
    }
}

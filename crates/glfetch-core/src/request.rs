//! Download request model and raw-file URL construction.

use crate::error::FetchError;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Public GitLab instance.
pub const DEFAULT_SERVER_URL: &str = "https://gitlab.com";

/// Everything except RFC 3986 unreserved characters.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Bytes a URL cannot carry at all. Non-ASCII is always escaped by `utf8_percent_encode`.
const URL_ILLEGAL: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// How request fields are embedded into the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathEncoding {
    /// Substitute fields as-is; `path/to/file.txt` stays `path/to/file.txt`.
    /// Only bytes that are illegal in a URL (space, controls, quotes, non-ASCII) are escaped.
    #[default]
    Literal,
    /// Percent-encode each field; `path/to/file.txt` becomes `path%2Fto%2Ffile.txt`.
    Encoded,
}

impl PathEncoding {
    fn apply(self, value: &str) -> String {
        match self {
            PathEncoding::Literal => utf8_percent_encode(value, URL_ILLEGAL).to_string(),
            PathEncoding::Encoded => utf8_percent_encode(value, COMPONENT).to_string(),
        }
    }
}

/// One file to download. Fields are validated once in `new` and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    project_id: String,
    file_path: String,
    branch: String,
    output_path: PathBuf,
}

impl DownloadRequest {
    pub fn new(
        project_id: impl Into<String>,
        file_path: impl Into<String>,
        branch: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Result<Self, FetchError> {
        let project_id = project_id.into();
        let file_path = file_path.into();
        let branch = branch.into();
        let output_path = output_path.into();

        if project_id.trim().is_empty() {
            return Err(FetchError::InvalidRequest { field: "project_id" });
        }
        if file_path.trim().is_empty() {
            return Err(FetchError::InvalidRequest { field: "file_path" });
        }
        if branch.trim().is_empty() {
            return Err(FetchError::InvalidRequest { field: "branch" });
        }
        if output_path.as_os_str().is_empty() {
            return Err(FetchError::InvalidRequest { field: "output_path" });
        }

        Ok(Self {
            project_id,
            file_path,
            branch,
            output_path,
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// `{server_url}/api/v4/projects/{project_id}/repository/files/{file_path}/raw?ref={branch}`
    ///
    /// `server_url` is expected without a trailing slash (see `normalize_server_url`).
    pub fn raw_file_url(&self, server_url: &str, encoding: PathEncoding) -> String {
        format!(
            "{}/api/v4/projects/{}/repository/files/{}/raw?ref={}",
            server_url,
            encoding.apply(&self.project_id),
            encoding.apply(&self.file_path),
            encoding.apply(&self.branch),
        )
    }
}

/// Validate a server base URL and strip trailing slashes.
pub fn normalize_server_url(raw: &str) -> Result<String, FetchError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = url::Url::parse(trimmed).map_err(|e| FetchError::InvalidServerUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(FetchError::InvalidServerUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme {other:?}"),
        }),
    }
}

//! Shared fetch step for `get` and `task`.

use anyhow::{Context, Result};
use glfetch_core::config::GlfetchConfig;
use glfetch_core::{AuthToken, DownloadRequest, FileFetcher};

/// Load the token, then download `request`. The token is read before the fetcher
/// is built, so a missing variable never reaches the network.
pub(super) fn fetch_request(cfg: &GlfetchConfig, request: &DownloadRequest) -> Result<()> {
    let token = AuthToken::from_env(&cfg.token_env)?;
    let fetcher = FileFetcher::new(&cfg.server_url, cfg.path_encoding)?;

    let bytes = fetcher.fetch(request, &token).with_context(|| {
        format!(
            "{}:{}@{}",
            request.project_id(),
            request.file_path(),
            request.branch()
        )
    })?;

    tracing::debug!(bytes, "fetch complete");
    println!("File downloaded: {}", request.output_path().display());
    Ok(())
}

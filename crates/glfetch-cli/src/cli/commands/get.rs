//! `glfetch get <project> <file>` – download one file.

use super::fetch::fetch_request;
use anyhow::Result;
use glfetch_core::config::GlfetchConfig;
use glfetch_core::DownloadRequest;
use std::path::{Path, PathBuf};

pub fn run_get(
    cfg: &GlfetchConfig,
    project_id: &str,
    file_path: &str,
    git_ref: &str,
    output: Option<&Path>,
) -> Result<()> {
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output(file_path)?,
    };
    let request = DownloadRequest::new(project_id, file_path, git_ref, output)?;
    fetch_request(cfg, &request)
}

/// Last `/`-separated component of the repository path.
fn default_output(file_path: &str) -> Result<PathBuf> {
    match file_path.trim_end_matches('/').rsplit('/').next() {
        Some(name) if !name.is_empty() => Ok(PathBuf::from(name)),
        _ => anyhow::bail!("cannot derive output name from {:?}; pass --output", file_path),
    }
}

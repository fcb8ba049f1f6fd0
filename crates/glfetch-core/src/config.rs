use crate::credential::DEFAULT_TOKEN_ENV;
use crate::request::{DownloadRequest, PathEncoding, DEFAULT_SERVER_URL};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// A named download, the config-file form of a build task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskConfig {
    pub name: String,
    /// Numeric project id or namespaced path (`group/project`).
    pub project_id: String,
    /// Path of the file inside the repository.
    pub file_path: String,
    /// Branch, tag or commit to read from.
    #[serde(default = "default_branch")]
    pub branch: String,
    /// Local destination; relative paths resolve against the working directory.
    pub output: PathBuf,
}

impl TaskConfig {
    pub fn to_request(&self) -> Result<DownloadRequest> {
        DownloadRequest::new(
            self.project_id.as_str(),
            self.file_path.as_str(),
            self.branch.as_str(),
            self.output.as_path(),
        )
        .with_context(|| format!("task {:?}", self.name))
    }
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

/// Global configuration loaded from `~/.config/glfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlfetchConfig {
    /// Base URL of the GitLab instance.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Environment variable holding the API token.
    #[serde(default = "default_token_env")]
    pub token_env: String,
    /// "literal" (default) or "encoded".
    #[serde(default)]
    pub path_encoding: PathEncoding,
    #[serde(default)]
    pub tasks: Vec<TaskConfig>,
}

impl Default for GlfetchConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            token_env: default_token_env(),
            path_encoding: PathEncoding::Literal,
            tasks: Vec::new(),
        }
    }
}

impl GlfetchConfig {
    /// Look up a task by name.
    pub fn task(&self, name: &str) -> Option<&TaskConfig> {
        self.tasks.iter().find(|t| t.name == name)
    }

    /// Reject duplicate or empty task names. Task fields are checked when the task runs.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for task in &self.tasks {
            if task.name.trim().is_empty() {
                anyhow::bail!("task with empty name");
            }
            if !seen.insert(task.name.as_str()) {
                anyhow::bail!("duplicate task name {:?}", task.name);
            }
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("glfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
/// If the config location is unusable (no home, read-only home) the built-in
/// defaults are used. An existing file that fails to parse is still an error.
pub fn load_or_default() -> Result<GlfetchConfig> {
    match config_path() {
        Ok(path) => load_or_default_at(&path),
        Err(e) => {
            tracing::warn!("config location unavailable ({:#}); using defaults", e);
            Ok(GlfetchConfig::default())
        }
    }
}

/// `load_or_default` for an explicit path.
pub fn load_or_default_at(path: &Path) -> Result<GlfetchConfig> {
    if path.exists() {
        return load_from_path(path);
    }
    let default_cfg = GlfetchConfig::default();
    match write_default(path, &default_cfg) {
        Ok(()) => tracing::info!("created default config at {}", path.display()),
        Err(e) => tracing::warn!(
            "could not create {} ({:#}); using defaults",
            path.display(),
            e
        ),
    }
    Ok(default_cfg)
}

fn write_default(path: &Path, cfg: &GlfetchConfig) -> Result<()> {
    let toml = toml::to_string_pretty(cfg)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml)?;
    Ok(())
}

/// Load configuration from an explicit file. The file must exist.
pub fn load_from_path(path: &Path) -> Result<GlfetchConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: GlfetchConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

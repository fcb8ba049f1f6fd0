//! `glfetch task <name>` – run a download task from the config file.

use super::fetch::fetch_request;
use anyhow::Result;
use glfetch_core::config::GlfetchConfig;

pub fn run_task(cfg: &GlfetchConfig, name: &str) -> Result<()> {
    let Some(task) = cfg.task(name) else {
        anyhow::bail!("no task named {:?} in config", name);
    };
    tracing::info!(task = %task.name, "running task");
    let request = task.to_request()?;
    fetch_request(cfg, &request)
}

//! CLI for glfetch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use glfetch_core::config::{self, GlfetchConfig};
use glfetch_core::PathEncoding;
use std::path::PathBuf;

use commands::{run_completions, run_get, run_list_tasks, run_man, run_task};

/// Top-level CLI for glfetch.
#[derive(Debug, Parser)]
#[command(name = "glfetch")]
#[command(about = "glfetch: download a raw file from a GitLab repository", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/glfetch/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// GitLab base URL (overrides `server_url` from the config).
    #[arg(long, global = true, value_name = "URL")]
    pub server_url: Option<String>,

    /// Environment variable holding the API token (overrides `token_env`).
    #[arg(long, global = true, value_name = "VAR")]
    pub token_env: Option<String>,

    /// Percent-encode project id, file path and ref in the request URL.
    #[arg(long, global = true)]
    pub encode_path: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download one file.
    Get {
        /// Project id or namespaced path (group/project).
        project_id: String,

        /// Path of the file inside the repository.
        file_path: String,

        /// Branch, tag or commit.
        #[arg(long = "ref", default_value = "main", value_name = "REF")]
        git_ref: String,

        /// Destination file (default: last component of FILE_PATH). Parent directory must exist.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Run a download task defined in the config file.
    Task {
        /// Task name.
        name: String,
    },

    /// List configured tasks.
    Tasks,

    /// Print shell completions.
    Completions {
        shell: Shell,
    },

    /// Print a man page.
    Man,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    fn load_config(&self) -> Result<GlfetchConfig> {
        let mut cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_default()?,
        };
        if let Some(url) = &self.server_url {
            cfg.server_url = url.clone();
        }
        if let Some(var) = &self.token_env {
            cfg.token_env = var.clone();
        }
        if self.encode_path {
            cfg.path_encoding = PathEncoding::Encoded;
        }
        Ok(cfg)
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match &cli.command {
            CliCommand::Completions { shell } => return run_completions(*shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = cli.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Get {
                project_id,
                file_path,
                git_ref,
                output,
            } => run_get(&cfg, &project_id, &file_path, &git_ref, output.as_deref())?,
            CliCommand::Task { name } => run_task(&cfg, &name)?,
            CliCommand::Tasks => run_list_tasks(&cfg),
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

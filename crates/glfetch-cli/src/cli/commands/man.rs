//! `glfetch man` – render the man page to stdout.

use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;

pub fn run_man() -> Result<()> {
    clap_mangen::Man::new(Cli::command()).render(&mut std::io::stdout())?;
    Ok(())
}

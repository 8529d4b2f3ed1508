//! Implementation of the `docqa config` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::infrastructure::setup::{create_config_file, project_config_path};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write a commented default .docqa/config.yaml in the current directory
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing config file (with --init)
    #[arg(short, long, requires = "init")]
    pub force: bool,
}

#[derive(Debug, Serialize)]
pub struct ShowConfigOutput {
    #[serde(flatten)]
    pub config: Config,
}

impl CommandOutput for ShowConfigOutput {
    fn to_human(&self) -> String {
        serde_yaml::to_string(&self.config)
            .unwrap_or_else(|e| format!("Failed to render configuration: {e}"))
    }
}

#[derive(Debug, Serialize)]
pub struct InitConfigOutput {
    pub path: PathBuf,
    pub written: bool,
}

impl CommandOutput for InitConfigOutput {
    fn to_human(&self) -> String {
        if self.written {
            format!("Wrote default configuration to {}", self.path.display())
        } else {
            format!(
                "{} already exists. Use --force to overwrite.",
                self.path.display()
            )
        }
    }
}

pub async fn execute(args: ConfigArgs, config: &Config, json_mode: bool) -> Result<()> {
    if args.init {
        let root = std::env::current_dir().context("Failed to get current directory")?;
        let written = create_config_file(&root, args.force)?;
        output(
            &InitConfigOutput {
                path: project_config_path(&root),
                written,
            },
            json_mode,
        );
        return Ok(());
    }

    output(
        &ShowConfigOutput {
            config: config.clone(),
        },
        json_mode,
    );
    Ok(())
}

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::config::Settings;

#[derive(Parser, Debug)]
#[command(name = "langshare")]
#[command(
    about = "Report the programming-language composition of a file or directory",
    long_about = None
)]
pub struct Args {
    /// File or directory to analyze
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Settings file (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Extra substring that excludes matching paths. Can be specified multiple times.
    #[arg(short, long, value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Extra label to leave out of the report. Can be specified multiple times.
    #[arg(short, long, value_name = "LABEL")]
    pub unwanted: Vec<String>,

    /// Deadline for the whole run, in milliseconds
    #[arg(short, long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Checks the flags. The input path is stat'ed once, by the run itself.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref config_path) = self.config {
            if !config_path.is_file() {
                anyhow::bail!("Settings file does not exist: {}", config_path.display());
            }
        }
        Ok(())
    }

    /// Settings from the config file (or defaults), extended by the flags.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match self.config {
            Some(ref path) => Settings::load(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };

        settings.ignore.extend(self.ignore.iter().cloned());
        settings.unwanted.extend(self.unwanted.iter().cloned());
        if let Some(timeout_ms) = self.timeout_ms {
            settings.timeout_ms = timeout_ms;
        }
        Ok(settings)
    }
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILENAME;

/// Match CentOS errata against Katello/Satellite repositories and publish them
#[derive(Parser, Debug)]
#[command(name = "errata-sync")]
#[command(version)]
#[command(about = "Match CentOS errata against Katello/Satellite repositories and publish them through Pulp", long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILENAME, global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Parse the errata and OVAL documents into the advisory store
    Load,
    /// Allocate stored advisories to repositories and publish them
    Import {
        /// Log the payloads instead of invoking the publishing tool
        #[arg(long)]
        dry_run: bool,
    },
    /// Run `load` followed by `import`
    Sync {
        /// Log the payloads instead of invoking the publishing tool
        #[arg(long)]
        dry_run: bool,
    },
}

impl Command {
    pub fn loads(&self) -> bool {
        matches!(self, Command::Load | Command::Sync { .. })
    }

    pub fn imports(&self) -> bool {
        matches!(self, Command::Import { .. } | Command::Sync { .. })
    }

    pub fn dry_run(&self) -> bool {
        match self {
            Command::Load => false,
            Command::Import { dry_run } | Command::Sync { dry_run } => *dry_run,
        }
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::pacman::DEFAULT_LOOKUP_TIMEOUT_SECS;
use crate::config::{self, ConfigFile};
use crate::shared::Result;

/// Report explicitly installed packages that other explicitly installed
/// packages depend on
#[derive(Parser, Debug)]
#[command(name = "pacrev")]
#[command(version)]
#[command(
    about = "Report explicitly installed packages that are also dependencies",
    long_about = None
)]
pub struct Args {
    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Bounded wait per reverse-dependency lookup, in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,

    /// Config file path (defaults to ./pacrev.config.yml when present)
    #[arg(short, long)]
    pub config: Option<String>,
}

/// Effective options after merging CLI flags over config-file values.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
    pub output: Option<PathBuf>,
    pub timeout_secs: u64,
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolves effective options: explicit config file, else auto-discovered
    /// config in the working directory, with CLI flags taking precedence.
    pub fn resolve(&self) -> Result<ResolvedOptions> {
        let file = match &self.config {
            Some(path) => Some(config::load_config_from_path(Path::new(path))?),
            None => config::discover_config(Path::new("."))?,
        };
        Ok(self.merge(file.unwrap_or_default()))
    }

    fn merge(&self, file: ConfigFile) -> ResolvedOptions {
        ResolvedOptions {
            output: self
                .output
                .clone()
                .or(file.output)
                .map(PathBuf::from),
            timeout_secs: self
                .timeout
                .or(file.timeout_secs)
                .unwrap_or(DEFAULT_LOOKUP_TIMEOUT_SECS),
            quiet: self.quiet || file.quiet.unwrap_or(false),
        }
    }
}

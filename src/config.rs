//! Configuration for the `schema-spec` checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Specification selection (flag, then `SCHEMA_SPEC`, then the default)

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Specification used when neither `--spec` nor `SCHEMA_SPEC` names one
pub const DEFAULT_SPEC: &str = "person";

/// Command-line arguments for the checker
#[derive(Debug, Parser)]
#[command(name = "schema-spec")]
#[command(about = "Check JSON or TOML documents against built-in specifications")]
#[command(version)]
pub struct Args {
    /// Name of the catalog specification to check against
    #[arg(long, help = "Specification to check against (see --list)")]
    pub spec: Option<String>,

    /// List the available specifications and exit
    #[arg(long)]
    pub list: bool,

    /// Log level for the checker
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    /// Documents to check; `.toml` files are read as TOML, anything else as JSON
    pub files: Vec<PathBuf>,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog name of the specification to apply
    pub spec_name: String,
    /// Documents to check, in command-line order
    pub files: Vec<PathBuf>,
    /// Only list the catalog
    pub list_only: bool,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments and environment
    pub fn from_args_and_env() -> Result<Self> {
        let mut args = Args::parse();
        if args.spec.is_none() {
            args.spec = std::env::var("SCHEMA_SPEC").ok().filter(|s| !s.is_empty());
        }
        Self::from_args(args)
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        if !args.list && args.files.is_empty() {
            bail!("no documents to check");
        }

        Ok(Config {
            spec_name: args.spec.unwrap_or_else(|| DEFAULT_SPEC.to_string()),
            files: args.files,
            list_only: args.list,
            log_level: args.log_level,
        })
    }
}

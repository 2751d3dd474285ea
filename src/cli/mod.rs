//! Command-line interface for the cmdshell demo binary
//!
//! This module handles:
//! - Command-line argument parsing using clap
//! - Configuration loading and overrides from flags
//! - The demo command tree the binary serves

mod demo;

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, LogLevel};
use crate::error::Result;

pub use demo::demo_tree;

/// cmdshell - interactive command tree demo
#[derive(Parser, Debug)]
#[command(
    name = "cmdshell",
    version,
    about = "Interactive shell over a command tree",
    long_about = "Interactive shell demonstrating command tree registration, wildcard
arguments and context-aware tab completion."
)]
pub struct CliArgs {
    /// Configuration file path
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Run a single command line and exit
    #[arg(short = 'e', long = "exec", value_name = "LINE")]
    pub exec: Option<String>,

    /// Disable tab completion
    #[arg(long = "no-complete")]
    pub no_complete: bool,

    /// Do not read or write the history file
    #[arg(long = "no-history")]
    pub no_history: bool,

    /// Verbose mode (detailed logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Very verbose mode (trace logging)
    #[arg(long = "vv")]
    pub very_verbose: bool,
}

/// CLI interface handler
pub struct CliInterface {
    /// Parsed command-line arguments
    args: CliArgs,

    /// Loaded configuration
    config: Config,
}

impl CliInterface {
    /// Parse process arguments and load configuration
    ///
    /// # Returns
    /// * `Result<Self>` - New CLI interface or error
    pub fn new() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Build from already parsed arguments
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let mut config = Config::load(args.config_file.as_deref())?;
        Self::apply_args_to_config(&mut config, &args);
        Ok(Self { args, config })
    }

    /// Get effective configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get parsed arguments
    pub fn args(&self) -> &CliArgs {
        &self.args
    }

    /// Apply CLI arguments on top of the loaded configuration
    fn apply_args_to_config(config: &mut Config, args: &CliArgs) {
        if args.no_complete {
            config.completion.enabled = false;
        }
        if args.no_history {
            config.history.persist = false;
        }

        config.logging.level = if args.very_verbose {
            LogLevel::Trace
        } else if args.verbose {
            LogLevel::Debug
        } else {
            config.logging.level
        };
    }
}

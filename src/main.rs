//! cmdshell - interactive command tree demo
//!
//! Serves a small demo command tree through a reedline prompt with
//! context-aware tab completion.
//!
//! # Usage
//!
//! ```bash
//! # Interactive mode
//! cmdshell
//!
//! # Run a single line
//! cmdshell -e "greet Ada"
//! ```

use std::sync::Arc;

use tracing::debug;

use cmdshell::cli::{CliInterface, demo_tree};
use cmdshell::error::Result;
use cmdshell::repl::ReplEngine;

/// Application entry point
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Main application logic
///
/// 1. Parse command-line arguments and load configuration
/// 2. Initialize logging
/// 3. Build the command tree
/// 4. Run one line or the interactive loop
fn run() -> Result<()> {
    let cli = CliInterface::new()?;
    initialize_logging(&cli);

    let root = Arc::new(demo_tree()?);
    debug!("Command tree ready with {} top-level command(s)", root.children().len());

    let mut repl = ReplEngine::new(root, cli.config())?;

    if let Some(line) = &cli.args().exec {
        return repl.execute(line);
    }

    run_repl_loop(&mut repl)?;
    println!("Goodbye!");
    Ok(())
}

/// Main REPL loop
fn run_repl_loop(repl: &mut ReplEngine) -> Result<()> {
    while repl.is_running() {
        let input = match repl.read_line()? {
            Some(line) if !line.trim().is_empty() => line,
            Some(_) => continue,
            None => break,
        };

        if matches!(input.trim(), "exit" | "quit") {
            repl.stop();
            continue;
        }

        if let Err(e) = repl.execute(&input) {
            eprintln!("{}", e);
        }
    }

    Ok(())
}

/// Initialize logging system from the effective configuration
///
/// # Arguments
/// * `cli` - CLI interface with logging settings
fn initialize_logging(cli: &CliInterface) {
    let level = cli.config().logging.level.to_tracing_level();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr);

    if cli.config().logging.timestamps {
        subscriber.init();
    } else {
        subscriber.without_time().init();
    }
}

//! cmdshell library
//!
//! Command registration and tab completion for interactive shells: a
//! hierarchical command tree with literal subcommands, aliases and one
//! wildcard child per node, plus a completion engine that turns a
//! partially typed line into suggestions and an inline help block.
//!
//! # Modules
//!
//! - `cli`: Command-line interface of the demo binary
//! - `command`: Command tree, resolution, help and dispatch
//! - `config`: Configuration management
//! - `error`: Error types and handling
//! - `parser`: Line tokenizing
//! - `repl`: Completion engine and reedline integration
//!
//! # Example
//!
//! ```
//! use cmdshell::command::{Arg, Command};
//! use cmdshell::repl::completion::{BufferSink, CompletionEngine};
//! use std::sync::Arc;
//!
//! let mut root = Command::root();
//! root.add_command(Command::new("user/:name/show").with_help("Show a user"))?;
//! root.add_command(
//!     Command::new("export").with_arg(Arg::new("--out").pair().with_help("output file")),
//! )?;
//!
//! let mut engine = CompletionEngine::with_sink(Arc::new(root), BufferSink::new());
//! let completion = engine.complete("user alice ", 11);
//! assert_eq!(completion.suggestions, vec!["show"]);
//! # Ok::<(), cmdshell::ShellError>(())
//! ```

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod parser;
pub mod repl;

// Re-export commonly used types
pub use command::{Arg, Command, Context, Param};
pub use config::Config;
pub use error::{Result, ShellError};
pub use repl::ReplEngine;
pub use repl::completion::{Completion, CompletionEngine};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}

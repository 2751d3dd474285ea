//! Interactive shell front end for cmdshell
//!
//! This module provides:
//! - Tab completion over a command tree (`completion`)
//! - The reedline adapter for that completion (`ShellCompleter`)
//! - A styled prompt (`ShellPrompt`)
//! - A REPL engine wiring history, completion and dispatch (`ReplEngine`)

pub mod completion;

mod completer;
mod engine;
mod prompt;

pub use completer::ShellCompleter;
pub use engine::ReplEngine;
pub use prompt::ShellPrompt;

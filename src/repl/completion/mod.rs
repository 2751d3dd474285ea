//! Tab completion for cmdshell command trees
//!
//! The completion system consists of:
//!
//! - **Suggestion**: a candidate word with its help and kind
//! - **Sink**: where the hint block is printed
//! - **Engine**: tokenizes the line, resolves it against the tree and
//!   collects, ranks and prints candidates
//!
//! # Examples
//!
//! ```
//! use cmdshell::command::Command;
//! use cmdshell::repl::completion::{BufferSink, CompletionEngine};
//! use std::sync::Arc;
//!
//! let mut root = Command::root();
//! for name in ["start", "stop", "status"] {
//!     root.add_command(Command::new(name)).unwrap();
//! }
//!
//! let mut engine = CompletionEngine::with_sink(Arc::new(root), BufferSink::new());
//! let completion = engine.complete("st", 2);
//! assert_eq!(completion.suggestions, vec!["art", "atus", "op"]);
//! assert_eq!(completion.replace_len, 2);
//! ```

mod engine;
mod sink;
mod suggestion;

pub use engine::{Completion, CompletionEngine};
pub use sink::{BufferSink, HintSink, StdoutSink, WriterSink};
pub use suggestion::Suggestion;

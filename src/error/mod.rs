//! Error handling module for cmdshell.
//!
//! Registration failures are reported the moment a command is added, so a
//! misconfigured tree never reaches the interactive phase. Resolution and
//! completion have no error path at all: "nothing matched" is an ordinary
//! result shape there.
//!
//! # Example
//!
//! ```rust
//! use cmdshell::command::Command;
//! use cmdshell::error::{RegistrationError, ShellError};
//!
//! let mut root = Command::root();
//! let err = root.add_command(Command::new("db/:")).unwrap_err();
//! assert!(matches!(
//!     err,
//!     ShellError::Registration(RegistrationError::EmptyWildcard { .. })
//! ));
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{ConfigError, DispatchError, RegistrationError, Result, ShellError};

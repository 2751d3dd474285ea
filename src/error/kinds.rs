use std::{fmt, io};

/// Crate-wide `Result` type using [`ShellError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, ShellError>;

/// Top-level error type for cmdshell operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum ShellError {
    /// Command tree construction errors.
    Registration(RegistrationError),

    /// Command dispatch errors.
    Dispatch(DispatchError),

    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// Line editor errors.
    Readline(String),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Errors raised while building the command tree.
///
/// These are programmer errors: the registration code has to be fixed,
/// they never occur once the tree is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// The command name is empty.
    EmptyName,

    /// The path contains an empty segment, e.g. `a//b`.
    EmptySegment { path: String },

    /// A wildcard segment has nothing after the `:` marker.
    EmptyWildcard { path: String },
}

/// Errors raised while running a command line.
#[derive(Debug)]
pub enum DispatchError {
    /// No command matches the first token.
    UnknownCommand(String),

    /// The matched command has no handler attached.
    NoHandler(String),

    /// The handler reported a failure.
    Failed(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Registration(e) => write!(f, "Registration error: {e}"),
            ShellError::Dispatch(e) => write!(f, "{e}"),
            ShellError::Config(e) => write!(f, "Configuration error: {e}"),
            ShellError::Io(e) => write!(f, "I/O error: {e}"),
            ShellError::Readline(msg) => write!(f, "Readline error: {msg}"),
            ShellError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationError::EmptyName => write!(f, "command name should not be empty"),
            RegistrationError::EmptySegment { path } => {
                write!(f, "command path '{path}' contains an empty segment")
            }
            RegistrationError::EmptyWildcard { path } => {
                write!(f, "wildcards must be named with a non-empty name '{path}'")
            }
        }
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::UnknownCommand(name) => write!(f, "Unknown command: {name}"),
            DispatchError::NoHandler(path) => write!(f, "Command '{path}' cannot be run directly"),
            DispatchError::Failed(msg) => write!(f, "Command failed: {msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Io(e) => Some(e),
            _ => None,
        }
    }
}
impl std::error::Error for RegistrationError {}
impl std::error::Error for DispatchError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to ShellError ========================= */

impl From<io::Error> for ShellError {
    fn from(err: io::Error) -> Self {
        ShellError::Io(err)
    }
}

impl From<RegistrationError> for ShellError {
    fn from(err: RegistrationError) -> Self {
        ShellError::Registration(err)
    }
}

impl From<DispatchError> for ShellError {
    fn from(err: DispatchError) -> Self {
        ShellError::Dispatch(err)
    }
}

impl From<ConfigError> for ShellError {
    fn from(err: ConfigError) -> Self {
        ShellError::Config(err)
    }
}

impl From<String> for ShellError {
    fn from(msg: String) -> Self {
        ShellError::Generic(msg)
    }
}

impl From<&str> for ShellError {
    fn from(msg: &str) -> Self {
        ShellError::Generic(msg.to_owned())
    }
}

impl From<reedline::ReedlineError> for ShellError {
    fn from(err: reedline::ReedlineError) -> Self {
        ShellError::Readline(err.to_string())
    }
}

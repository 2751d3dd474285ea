//! Named argument descriptors attached to commands

/// A named argument a command accepts after its path, such as `--out`.
///
/// Arguments only feed completion: the tree never validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arg {
    /// Argument name as typed by the user
    pub name: String,

    /// Whether the argument must be immediately followed by a value token
    pub pair: bool,

    /// Whether the argument may be omitted
    pub optional: bool,

    /// One-line help shown in completion hints
    pub help: String,
}

impl Arg {
    /// Create a required flag-style argument
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pair: false,
            optional: false,
            help: String::new(),
        }
    }

    /// Mark the argument as taking a value in the next token
    pub fn pair(mut self) -> Self {
        self.pair = true;
        self
    }

    /// Mark the argument as optional
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Set the help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }
}

//! Line tokenizing for cmdshell
//!
//! Command lines are split into words with POSIX shell rules: single and
//! double quotes group words, backslash escapes the next character. A line
//! the shell rules reject (an unbalanced quote, a trailing backslash) is
//! split on whitespace instead, so tokenizing never fails.
//!
//! # Examples
//!
//! ```
//! use cmdshell::parser::split_line;
//!
//! assert_eq!(split_line("say 'hello world'"), vec!["say", "hello world"]);
//! assert_eq!(split_line("say 'unterminated"), vec!["say", "'unterminated"]);
//! ```

mod tokenizer;

pub use tokenizer::{ShellWordsTokenizer, Tokenizer, WhitespaceTokenizer};

/// Split `line` with [`ShellWordsTokenizer`], falling back to whitespace
pub fn split_line(line: &str) -> Vec<String> {
    ShellWordsTokenizer.split_or_fallback(line)
}

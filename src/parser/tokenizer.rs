use tracing::trace;

/// Splits a raw line into words
///
/// `tokenize` returns `None` when the line cannot be split under the
/// tokenizer's rules.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, line: &str) -> Option<Vec<String>>;

    /// Tokenize, or split on whitespace if the rules reject the line
    fn split_or_fallback(&self, line: &str) -> Vec<String> {
        match self.tokenize(line) {
            Some(words) => words,
            None => {
                trace!("Tokenizer rejected line, splitting on whitespace");
                WhitespaceTokenizer.split(line)
            }
        }
    }
}

/// POSIX shell word splitting backed by `shell-words`
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellWordsTokenizer;

impl Tokenizer for ShellWordsTokenizer {
    fn tokenize(&self, line: &str) -> Option<Vec<String>> {
        shell_words::split(line).ok()
    }
}

/// Plain whitespace splitting; never fails
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    fn split(&self, line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_owned).collect()
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, line: &str) -> Option<Vec<String>> {
        Some(self.split(line))
    }
}

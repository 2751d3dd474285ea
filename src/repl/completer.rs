//! Completer for reedline - provides completion suggestions

use reedline::{Completer, Span, Suggestion};

use super::completion::{CompletionEngine, HintSink, StdoutSink};

/// Command tree completer for reedline
pub struct ShellCompleter<S: HintSink = StdoutSink> {
    /// Completion engine bound to the command tree
    completion_engine: CompletionEngine<S>,
}

impl<S: HintSink> ShellCompleter<S> {
    /// Create a new completer
    ///
    /// # Arguments
    /// * `completion_engine` - Engine bound to the command tree
    pub fn new(completion_engine: CompletionEngine<S>) -> Self {
        Self { completion_engine }
    }

    pub fn engine(&self) -> &CompletionEngine<S> {
        &self.completion_engine
    }
}

impl<S: HintSink> Completer for ShellCompleter<S> {
    /// Complete the input at the given cursor position
    ///
    /// # Arguments
    /// * `line` - The input line
    /// * `pos` - Cursor position (byte index)
    ///
    /// # Returns
    /// * `Vec<Suggestion>` - One suggestion per completion, replacing the
    ///   typed prefix with the full word
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let completion = self.completion_engine.complete(line, pos);

        let start = pos.saturating_sub(completion.replace_len);
        let typed = line.get(start..pos).unwrap_or_default();

        completion
            .suggestions
            .into_iter()
            .zip(completion.descriptions)
            .map(|(rest, help)| Suggestion {
                value: format!("{typed}{rest}"),
                description: (!help.is_empty()).then_some(help),
                style: None,
                extra: None,
                span: Span::new(start, pos),
                append_whitespace: false,
                match_indices: None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::command::Command;
    use crate::repl::completion::BufferSink;

    fn create_test_completer() -> ShellCompleter<BufferSink> {
        let mut root = Command::root();
        for name in ["start", "stop", "status", "restart"] {
            root.add_command(Command::new(name)).unwrap();
        }
        root.add_command(Command::new("reload").with_help("Reload configuration"))
            .unwrap();
        root.add_command(Command::new("user/:name")).unwrap();
        ShellCompleter::new(CompletionEngine::with_sink(
            Arc::new(root),
            BufferSink::new(),
        ))
    }

    #[test]
    fn test_complete_with_prefix() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("st", 2);

        let values: Vec<&str> = suggestions.iter().map(|s| s.value.as_str()).collect();
        assert_eq!(values, vec!["start", "status", "stop"]);
    }

    #[test]
    fn test_description_carries_help() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("rel", 3);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].value, "reload");
        assert_eq!(
            suggestions[0].description.as_deref(),
            Some("Reload configuration")
        );
    }

    #[test]
    fn test_span_position() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("user x st", 9);

        // "user x" resolves to the <name> wildcard, which has no children
        assert!(suggestions.is_empty());

        let suggestions = completer.complete("re", 2);
        for suggestion in suggestions {
            assert_eq!(suggestion.span.start, 0);
            assert_eq!(suggestion.span.end, 2);
        }
    }

    #[test]
    fn test_full_word_suggests_space() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("restart", 7);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].value, "restart ");
        assert_eq!(suggestions[0].span.start, 0);
    }

    #[test]
    fn test_wildcard_only_prints_hint() {
        let mut completer = create_test_completer();
        let suggestions = completer.complete("user ", 5);

        assert!(suggestions.is_empty());
        let printed = completer.engine().sink().lines();
        assert_eq!(printed.len(), 2);
        assert!(printed[1].starts_with("<name>"));
    }
}

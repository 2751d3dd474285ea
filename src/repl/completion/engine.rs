//! Completion engine - turns a partial line into suggestions
//!
//! The engine tokenizes the line, resolves all but the word under the
//! cursor against the command tree, and collects candidates from the
//! resolved command: its subcommands, its wildcard slot, and the
//! arguments not typed yet. When more than one thing could come next it
//! prints a hint block listing every candidate with its help.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, warn};

use super::sink::{HintSink, StdoutSink};
use super::suggestion::Suggestion;
use crate::command::{Command, Resolution};
use crate::config::CompletionConfig;
use crate::parser::{ShellWordsTokenizer, Tokenizer};

/// Result of one completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Text to insert after the typed prefix, one entry per candidate
    pub suggestions: Vec<String>,
    /// Help text of the candidate behind each entry of `suggestions`
    pub descriptions: Vec<String>,
    /// Number of candidates, counting any pending value slot once
    pub length: usize,
    /// Number of bytes before the cursor the candidates apply to
    pub replace_len: usize,
}

impl Completion {
    fn empty(replace_len: usize) -> Self {
        Self {
            suggestions: Vec::new(),
            descriptions: Vec::new(),
            length: 0,
            replace_len,
        }
    }
}

/// Completion engine bound to one command tree
pub struct CompletionEngine<S: HintSink = StdoutSink> {
    root: Arc<Command>,
    sink: S,
    tokenizer: Box<dyn Tokenizer>,
    disabled: Option<Box<dyn Fn() -> bool + Send + Sync>>,
    hint_width: usize,
}

impl CompletionEngine<StdoutSink> {
    /// Create an engine that prints hints to stdout
    pub fn new(root: Arc<Command>) -> Self {
        Self::with_sink(root, StdoutSink)
    }
}

impl<S: HintSink> CompletionEngine<S> {
    /// Create an engine that prints hints to `sink`
    pub fn with_sink(root: Arc<Command>, sink: S) -> Self {
        Self {
            root,
            sink,
            tokenizer: Box::new(ShellWordsTokenizer),
            disabled: None,
            hint_width: CompletionConfig::default().hint_width,
        }
    }

    /// Apply completion settings
    pub fn with_config(mut self, config: &CompletionConfig) -> Self {
        self.hint_width = config.hint_width;
        if !config.enabled {
            self.disabled = Some(Box::new(|| true));
        }
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    /// Turn completion into a no-op whenever `predicate` returns true
    pub fn with_disabled<F>(mut self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.disabled = Some(Box::new(predicate));
        self
    }

    pub fn with_hint_width(mut self, width: usize) -> Self {
        self.hint_width = width;
        self
    }

    pub fn root(&self) -> &Command {
        &self.root
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Complete `line` with the cursor at byte offset `pos`
    ///
    /// Each returned suggestion is the remainder of a literal candidate
    /// after the typed prefix. Value slots only show up in the printed
    /// hints. When the prefix already spells the only candidate the single
    /// suggestion is a space, so the editor moves on to the next word.
    pub fn complete(&mut self, line: &str, pos: usize) -> Completion {
        if self.disabled.as_ref().is_some_and(|disabled| disabled()) {
            return Completion::empty(line.len());
        }

        let words = self.tokenizer.split_or_fallback(line);

        let before_cursor = line.get(..pos.min(line.len())).unwrap_or(line);
        let in_word = before_cursor
            .chars()
            .next_back()
            .is_some_and(|c| !c.is_whitespace());

        let (prefix, resolve_tokens) = match words.split_last() {
            Some((last, init)) if in_word => (last.as_str(), init),
            _ => ("", words.as_slice()),
        };

        let candidates = self.suggest(prefix, resolve_tokens);

        let mut has_param = false;
        let mut hints = Vec::with_capacity(candidates.len());
        let mut suggestions = Vec::new();
        let mut descriptions = Vec::new();

        for candidate in &candidates {
            if candidate.param {
                has_param = true;
            }
            hints.push(candidate.hint_line(self.hint_width));

            if !candidate.param {
                if let Some(rest) = candidate.word.strip_prefix(prefix) {
                    suggestions.push(rest.to_string());
                    descriptions.push(candidate.help.clone());
                }
            }
        }

        if suggestions.len() == 1 && !prefix.is_empty() && suggestions[0].is_empty() {
            suggestions = vec![" ".to_string()];
            has_param = false;
        }

        let length = suggestions.len() + usize::from(has_param);
        if length > 1 || has_param {
            self.print_hints(&hints);
        }

        debug!(
            "Completed '{}' at {}: prefix '{}', {} candidate(s)",
            line, pos, prefix, length
        );

        Completion {
            suggestions,
            descriptions,
            length,
            replace_len: prefix.len(),
        }
    }

    /// Candidates for the word after `tokens`, sorted by word
    ///
    /// If `tokens` resolve to nothing, the root is used and every token
    /// counts as an argument to it.
    pub fn suggest(&self, prefix: &str, tokens: &[String]) -> Vec<Suggestion> {
        let mut params = Vec::new();
        let (node, args) = match self.root.resolve(tokens, &mut params) {
            Resolution::Found { node, rest } => (node, rest),
            Resolution::NotFound { .. } => (self.root.as_ref(), tokens),
        };

        let mut candidates: Vec<Suggestion> = match &node.completer {
            Some(completer) => completer(prefix, args)
                .into_iter()
                .map(Suggestion::word)
                .collect(),
            None => Self::command_candidates(node, prefix, args),
        };

        candidates.sort_by(|a, b| a.word.cmp(&b.word));
        candidates
    }

    fn command_candidates(node: &Command, prefix: &str, args: &[String]) -> Vec<Suggestion> {
        let mut candidates: Vec<Suggestion> = node
            .static_children()
            .into_iter()
            .filter(|child| child.name.starts_with(prefix))
            .map(|child| Suggestion {
                word: child.name.clone(),
                param: false,
                optional: false,
                help: child.resolved_help(),
            })
            .collect();

        // wildcards match anything, so the prefix never filters them
        if let Some(param) = node.param_child() {
            candidates.push(Suggestion {
                word: param.name.clone(),
                param: true,
                optional: false,
                help: param.resolved_help(),
            });
        }

        let present: HashSet<&str> = args.iter().map(String::as_str).collect();

        if let Some(last) = args.last() {
            if let Some(arg) = node.args.iter().find(|a| a.pair && a.name == *last) {
                candidates.push(Suggestion {
                    word: arg.name.clone(),
                    param: true,
                    optional: arg.optional,
                    help: arg.help.clone(),
                });
                return candidates;
            }
        }

        candidates.extend(
            node.args
                .iter()
                .filter(|arg| !present.contains(arg.name.as_str()))
                .map(|arg| Suggestion {
                    word: arg.name.clone(),
                    param: false,
                    optional: arg.optional,
                    help: arg.help.clone(),
                }),
        );

        candidates
    }

    fn print_hints(&mut self, hints: &[String]) {
        let lines = std::iter::once("").chain(hints.iter().map(String::as_str));
        for line in lines {
            if let Err(e) = self.sink.print_line(line) {
                warn!("Failed to print completion hints: {}", e);
                return;
            }
        }
    }
}

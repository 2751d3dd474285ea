//! Custom prompt implementation for cmdshell

use std::borrow::Cow;

use nu_ansi_term::{Color, Style};
use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

/// Prompt showing a fixed text
pub struct ShellPrompt {
    /// Prompt text
    text: String,
    /// Style applied when colors are enabled
    style: Option<Style>,
}

impl ShellPrompt {
    /// Create a new prompt
    ///
    /// # Arguments
    /// * `text` - Text shown before the cursor
    /// * `colored` - Whether to style the text
    pub fn new(text: impl Into<String>, colored: bool) -> Self {
        Self {
            text: text.into(),
            style: colored.then(|| Style::new().bold().fg(Color::Green)),
        }
    }
}

impl Prompt for ShellPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        match self.style {
            Some(style) => style.paint(&self.text).to_string().into(),
            None => Cow::Borrowed(self.text.as_str()),
        }
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        "".into()
    }

    /// The indicator is part of the configured text
    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        "".into()
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        "... ".into()
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };

        format!("({}reverse-search: {}) ", prefix, history_search.term).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prompt() {
        let prompt = ShellPrompt::new("demo> ", false);
        assert_eq!(prompt.render_prompt_left(), "demo> ");
    }

    #[test]
    fn test_colored_prompt_wraps_text() {
        let prompt = ShellPrompt::new("demo> ", true);
        let rendered = prompt.render_prompt_left();
        assert!(rendered.contains("demo> "));
        assert_ne!(rendered, "demo> ");
    }

    #[test]
    fn test_right_prompt_empty() {
        let prompt = ShellPrompt::new("demo> ", false);
        assert_eq!(prompt.render_prompt_right(), "");
        assert_eq!(prompt.render_prompt_indicator(PromptEditMode::Default), "");
    }

    #[test]
    fn test_multiline_indicator() {
        let prompt = ShellPrompt::new("demo> ", false);
        assert_eq!(prompt.render_prompt_multiline_indicator(), "... ");
    }
}

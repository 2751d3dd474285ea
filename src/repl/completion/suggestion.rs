//! Completion candidates and their hint rendering

/// A single completion candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Word as it would appear on the line
    pub word: String,
    /// Whether this is a value slot (wildcard or argument value) rather
    /// than a literal the user can type
    pub param: bool,
    /// Whether the argument may be omitted
    pub optional: bool,
    /// Help shown next to the word
    pub help: String,
}

impl Suggestion {
    /// A literal word with no help
    pub fn word(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            param: false,
            optional: false,
            help: String::new(),
        }
    }

    /// Render the hint line: `<word>` for value slots, `[word]` for
    /// optional arguments, the bare word otherwise
    pub fn hint_line(&self, width: usize) -> String {
        let token = if self.param {
            format!("<{}>", self.word)
        } else if self.optional {
            format!("[{}]", self.word)
        } else {
            self.word.clone()
        };

        let line = format!("{token:<width$} {}", self.help);
        line.trim_end().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_line_brackets() {
        let mut s = Suggestion::word("name");
        s.help = "user name".to_string();
        assert_eq!(s.hint_line(8), "name     user name");

        s.optional = true;
        assert_eq!(s.hint_line(8), "[name]   user name");

        // a value slot is never shown as optional
        s.param = true;
        assert_eq!(s.hint_line(8), "<name>   user name");
    }

    #[test]
    fn test_hint_line_overflowing_word() {
        let mut s = Suggestion::word("--very-long-flag");
        s.help = "x".to_string();
        assert_eq!(s.hint_line(4), "--very-long-flag x");
    }

    #[test]
    fn test_hint_line_without_help() {
        assert_eq!(Suggestion::word("stop").hint_line(15), "stop");
    }
}

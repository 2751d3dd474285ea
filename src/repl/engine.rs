use std::io::{self, Write};
use std::sync::Arc;

use reedline::{
    ColumnarMenu, Emacs, FileBackedHistory, KeyCode, KeyModifiers, MenuBuilder, Reedline,
    ReedlineEvent, ReedlineMenu, Signal, default_emacs_keybindings,
};
use tracing::debug;

use crate::command::Command;
use crate::config::Config;
use crate::error::Result;
use crate::parser;

use super::completer::ShellCompleter;
use super::completion::CompletionEngine;
use super::prompt::ShellPrompt;

const COMPLETION_MENU: &str = "completion_menu";

/// REPL engine for interactive command execution
pub struct ReplEngine {
    /// Line editor for command input
    editor: Reedline,

    /// Prompt rendered before each line
    prompt: ShellPrompt,

    /// Command tree lines are dispatched against
    root: Arc<Command>,

    /// Whether to continue running
    running: bool,
}

impl ReplEngine {
    /// Create a new REPL engine over a finished command tree
    ///
    /// # Arguments
    /// * `root` - Root of the command tree
    /// * `config` - Completion, history and prompt settings
    ///
    /// # Returns
    /// * `Result<Self>` - New REPL engine or error
    pub fn new(root: Arc<Command>, config: &Config) -> Result<Self> {
        let mut editor = Reedline::create();

        if config.completion.enabled {
            let engine = CompletionEngine::new(root.clone()).with_config(&config.completion);
            let menu = ColumnarMenu::default().with_name(COMPLETION_MENU);

            let mut keybindings = default_emacs_keybindings();
            keybindings.add_binding(
                KeyModifiers::NONE,
                KeyCode::Tab,
                ReedlineEvent::UntilFound(vec![
                    ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
                    ReedlineEvent::MenuNext,
                ]),
            );

            editor = editor
                .with_completer(Box::new(ShellCompleter::new(engine)))
                .with_menu(ReedlineMenu::EngineCompleter(Box::new(menu)))
                .with_edit_mode(Box::new(Emacs::new(keybindings)));
        }

        if config.history.persist {
            let history = FileBackedHistory::with_file(
                config.history.max_size,
                config.history.file_path.clone(),
            )?;
            editor = editor.with_history(Box::new(history));
            debug!("History file: {}", config.history.file_path.display());
        }

        Ok(Self {
            editor,
            prompt: ShellPrompt::new(config.prompt.text.clone(), true),
            root,
            running: true,
        })
    }

    /// Read a single line of input
    ///
    /// # Returns
    /// * `Result<Option<String>>` - Input line, empty on Ctrl-C, `None` on EOF
    ///   or any other break signal
    pub fn read_line(&mut self) -> Result<Option<String>> {
        match self.editor.read_line(&self.prompt)? {
            Signal::Success(line) => Ok(Some(line)),
            Signal::CtrlC => Ok(Some(String::new())),
            _ => {
                self.running = false;
                Ok(None)
            }
        }
    }

    /// Run one line against the command tree, writing to stdout
    ///
    /// `help [path...]` prints the help of the named command unless `help`
    /// already leads somewhere in the tree: a command or alias of that
    /// name, or a wildcard at the root.
    pub fn execute(&self, line: &str) -> Result<()> {
        execute_line(&self.root, line, &mut io::stdout())
    }

    /// Stop the REPL loop
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Check if REPL is still running
    pub fn is_running(&self) -> bool {
        self.running
    }
}

fn execute_line(root: &Command, line: &str, out: &mut dyn Write) -> Result<()> {
    let tokens = parser::split_line(line);

    if let Some((first, rest)) = tokens.split_first() {
        if first == "help" && root.find_child(first).is_none() {
            write!(out, "{}", root.help_for(rest))?;
            return Ok(());
        }
    }

    root.dispatch(&tokens, out)
}

//! Handler context and command dispatch

use std::io::Write;

use tracing::debug;

use super::{Command, Param};
use crate::error::{DispatchError, Result};
use crate::parser;

/// Everything a handler sees about the line that invoked it
pub struct Context<'a> {
    path: String,
    params: Vec<Param>,
    args: Vec<String>,
    out: &'a mut dyn Write,
}

impl<'a> Context<'a> {
    pub fn new(
        path: String,
        params: Vec<Param>,
        args: Vec<String>,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            path,
            params,
            args,
            out,
        }
    }

    /// Display path of the command being run
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Wildcard values bound on the way down, outermost first
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Value bound to the wildcard named `key`
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    /// Tokens after the command path
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Output stream for the handler
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Write a line to the output stream
    pub fn println(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{line}")?;
        Ok(())
    }
}

impl Command {
    /// Resolve `tokens` from this node and run the matched handler
    ///
    /// A matched command without a handler writes its full help to `out`
    /// and reports [`DispatchError::NoHandler`].
    pub fn dispatch(&self, tokens: &[String], out: &mut dyn Write) -> Result<()> {
        let Some(first) = tokens.first() else {
            return Ok(());
        };

        let mut params = Vec::new();
        let resolution = self.resolve(tokens, &mut params);
        let Some(node) = resolution.node() else {
            return Err(DispatchError::UnknownCommand(first.clone()).into());
        };

        match &node.handler {
            Some(handler) => {
                debug!("Dispatching '{}'", node.display_path());
                let mut ctx = Context::new(
                    node.display_path(),
                    params,
                    resolution.rest().to_vec(),
                    out,
                );
                handler(&mut ctx)
            }
            None => {
                out.write_all(node.full_help().as_bytes())?;
                Err(DispatchError::NoHandler(node.display_path()).into())
            }
        }
    }

    /// Split `line` into words and dispatch them
    pub fn execute_line(&self, line: &str, out: &mut dyn Write) -> Result<()> {
        let tokens = parser::split_line(line);
        self.dispatch(&tokens, out)
    }
}

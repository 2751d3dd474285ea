//! Greedy left-to-right resolution of tokens against the command tree

use tracing::trace;

use super::{Command, CommandKind};

/// A wildcard value bound during resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Name of the wildcard command
    pub key: String,
    /// Token the wildcard matched
    pub value: String,
}

impl Param {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Outcome of walking tokens down the tree
///
/// `rest` is the unconsumed suffix starting at the first token that
/// matched nothing; it is empty when every token was consumed.
#[derive(Debug, Clone, Copy)]
pub enum Resolution<'c, 't> {
    /// At least one token matched; `node` is the deepest match
    Found {
        node: &'c Command,
        rest: &'t [String],
    },
    /// Not even the first token matched, or there were no tokens
    NotFound { rest: &'t [String] },
}

impl<'c, 't> Resolution<'c, 't> {
    /// The deepest matched command, if any
    pub fn node(&self) -> Option<&'c Command> {
        match *self {
            Resolution::Found { node, .. } => Some(node),
            Resolution::NotFound { .. } => None,
        }
    }

    /// Tokens left after resolution stopped
    pub fn rest(&self) -> &'t [String] {
        match *self {
            Resolution::Found { rest, .. } | Resolution::NotFound { rest } => rest,
        }
    }
}

impl Command {
    /// Walk `tokens` from this node, binding wildcard values into `params`
    ///
    /// Each token is tried as an exact child name, then as an alias of a
    /// child, then against the wildcard child. The walk never backtracks:
    /// it stops at the first token that matches nothing.
    pub fn resolve<'c, 't>(
        &'c self,
        tokens: &'t [String],
        params: &mut Vec<Param>,
    ) -> Resolution<'c, 't> {
        let mut current = self;
        let mut matched: Option<&'c Command> = None;

        for (i, token) in tokens.iter().enumerate() {
            let Some(child) = current.find_child(token) else {
                trace!("Resolution stopped at '{}'", token);
                return Self::resolution(matched, &tokens[i..]);
            };

            if child.kind == CommandKind::Param {
                params.push(Param::new(child.name.clone(), token.clone()));
            }
            trace!("Token '{}' matched '{}'", token, child.name);

            matched = Some(child);
            current = child;
        }

        Self::resolution(matched, &[])
    }

    /// Find the child a single token leads to
    pub(crate) fn find_child(&self, token: &str) -> Option<&Command> {
        if let Some(child) = self.static_children.get(token) {
            return Some(child);
        }

        // alias lookup in name order so a shared alias always picks the same child
        let by_alias = self
            .static_children()
            .into_iter()
            .find(|child| child.aliases.iter().any(|alias| alias == token));
        if by_alias.is_some() {
            return by_alias;
        }

        self.param_child.as_deref()
    }

    fn resolution<'c, 't>(node: Option<&'c Command>, rest: &'t [String]) -> Resolution<'c, 't> {
        match node {
            Some(node) => Resolution::Found { node, rest },
            None => Resolution::NotFound { rest },
        }
    }
}

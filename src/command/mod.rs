//! Command tree for cmdshell
//!
//! A [`Command`] owns its subcommands through two separate slots:
//! - a map of literal (static) children, matched by name or alias
//! - at most one wildcard (param) child, which matches any token
//!
//! Paths are registered as `/`-separated strings. A segment starting with
//! `:` declares the wildcard child of its parent, e.g. `user/:name/show`.
//!
//! # Examples
//!
//! ```
//! use cmdshell::command::Command;
//!
//! let mut root = Command::root();
//! root.add_command(Command::new("user/:name/show").with_help("Show a user"))
//!     .unwrap();
//!
//! let node = root.node_at(&["user".into(), ":name".into(), "show".into()]);
//! assert_eq!(node.map(|c| c.name()), Some("show"));
//! ```

mod arg;
mod context;
mod help;
mod resolve;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::{RegistrationError, Result};

pub use arg::Arg;
pub use context::Context;
pub use resolve::{Param, Resolution};

/// Marker that turns a path segment into a wildcard
pub const PARAM_MARKER: char = ':';

/// Separator between path segments at registration
pub const SEPARATOR: char = '/';

/// Function run when a command line resolves to a command
pub type Handler = Arc<dyn Fn(&mut Context<'_>) -> Result<()> + Send + Sync>;

/// Custom completion for a command: takes the typed prefix and the
/// arguments after the command, returns candidate words
pub type CustomCompleter = Arc<dyn Fn(&str, &[String]) -> Vec<String> + Send + Sync>;

/// How a command is reached from its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommandKind {
    /// Matched by its literal name or one of its aliases
    #[default]
    Static,

    /// Matched by any token; the token is bound under the command's name
    Param,
}

/// A node of the command tree
pub struct Command {
    pub(crate) name: String,
    pub(crate) aliases: Vec<String>,
    pub(crate) help: String,
    pub(crate) long_help: String,
    pub(crate) args: Vec<Arg>,
    pub(crate) handler: Option<Handler>,
    pub(crate) completer: Option<CustomCompleter>,
    pub(crate) kind: CommandKind,
    pub(crate) static_children: HashMap<String, Command>,
    pub(crate) param_child: Option<Box<Command>>,
    /// Segments from the tree root to this node. Wildcard segments keep
    /// the `:` marker. The parent is `path` minus its last segment.
    pub(crate) path: Vec<String>,
}

impl Command {
    /// Create a command to be registered at `name`
    ///
    /// `name` may be a full `/`-separated path; intermediate segments are
    /// created on registration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            help: String::new(),
            long_help: String::new(),
            args: Vec::new(),
            handler: None,
            completer: None,
            kind: CommandKind::Static,
            static_children: HashMap::new(),
            param_child: None,
            path: Vec::new(),
        }
    }

    /// Create an anonymous root node
    pub fn root() -> Self {
        Self::new("")
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Set the one-line help
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Set the descriptive help, preferred over the one-line help
    pub fn with_long_help(mut self, help: impl Into<String>) -> Self {
        self.long_help = help.into();
        self
    }

    pub fn with_arg(mut self, arg: Arg) -> Self {
        self.args.push(arg);
        self
    }

    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&mut Context<'_>) -> Result<()> + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Replace the default subcommand/argument completion of this command
    pub fn with_completer<F>(mut self, completer: F) -> Self
    where
        F: Fn(&str, &[String]) -> Vec<String> + Send + Sync + 'static,
    {
        self.completer = Some(Arc::new(completer));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn long_help(&self) -> &str {
        &self.long_help
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// The wildcard child, if one is registered
    pub fn param_child(&self) -> Option<&Command> {
        self.param_child.as_deref()
    }

    /// Path segments from the tree root to this node
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Path of the parent node, `None` for the root
    ///
    /// Resolve it with [`Command::node_at`] on the root.
    pub fn parent_path(&self) -> Option<&[String]> {
        self.path.split_last().map(|(_, parent)| parent)
    }

    /// Human-readable path, wildcards shown as `<name>`
    pub fn display_path(&self) -> String {
        self.path
            .iter()
            .map(|segment| match segment.strip_prefix(PARAM_MARKER) {
                Some(param) => format!("<{param}>"),
                None => segment.clone(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Register `cmd` under this node at the path given by its name
    ///
    /// Every intermediate segment is created as a bare placeholder if it
    /// does not exist yet. If a node is already registered at the final
    /// segment it is kept and returned; `cmd` is dropped.
    ///
    /// # Errors
    /// Fails without touching the tree if the name is empty, contains an
    /// empty segment, or contains a wildcard segment with no name.
    pub fn add_command(&mut self, mut cmd: Command) -> Result<&mut Command> {
        if cmd.name.is_empty() {
            return Err(RegistrationError::EmptyName.into());
        }

        let full = cmd.name.clone();
        let trimmed = full.trim_matches(SEPARATOR);
        if trimmed.is_empty() {
            return Err(RegistrationError::EmptyName.into());
        }

        let segments: Vec<&str> = trimmed.split(SEPARATOR).collect();
        for segment in &segments {
            if segment.is_empty() {
                return Err(RegistrationError::EmptySegment { path: full.clone() }.into());
            }
            if segment.strip_prefix(PARAM_MARKER) == Some("") {
                return Err(RegistrationError::EmptyWildcard { path: full.clone() }.into());
            }
        }

        let Some((last, parents)) = segments.split_last() else {
            return Err(RegistrationError::EmptyName.into());
        };

        let mut node = self;
        for segment in parents {
            node = node.attach(Command::new(*segment));
        }

        cmd.name = (*last).to_string();
        debug!("Registering command at '{}'", trimmed);
        Ok(node.attach(cmd))
    }

    /// Remove a direct child
    ///
    /// `:name` removes the wildcard child, but only if it is called `name`.
    /// Returns the removed subtree.
    pub fn remove_command(&mut self, name: &str) -> Option<Command> {
        let removed = match name.strip_prefix(PARAM_MARKER) {
            Some(param) => {
                if self.param_child.as_ref().is_some_and(|c| c.name == param) {
                    self.param_child.take().map(|boxed| *boxed)
                } else {
                    None
                }
            }
            None => self.static_children.remove(name),
        };

        if removed.is_some() {
            debug!("Removed command '{}' from '{}'", name, self.display_path());
        }
        removed
    }

    /// All children, static and wildcard, sorted by name
    pub fn children(&self) -> Vec<&Command> {
        let mut children: Vec<&Command> = self.static_children.values().collect();
        if let Some(param) = self.param_child.as_deref() {
            children.push(param);
        }
        children.sort_by(|a, b| a.name.cmp(&b.name));
        children
    }

    /// Static children sorted by name
    pub fn static_children(&self) -> Vec<&Command> {
        let mut children: Vec<&Command> = self.static_children.values().collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        children
    }

    /// Whether help should list subcommands
    ///
    /// A lone `help` child does not count.
    pub fn has_visible_subcommands(&self) -> bool {
        if self.static_children.len() > 1 || self.param_child.is_some() {
            return true;
        }
        !self.static_children.is_empty() && !self.static_children.contains_key("help")
    }

    /// Walk an exact path of segments, as stored in [`Command::path`]
    pub fn node_at(&self, path: &[String]) -> Option<&Command> {
        let mut node = self;
        for segment in path {
            node = match segment.strip_prefix(PARAM_MARKER) {
                Some(param) => node.param_child.as_deref().filter(|c| c.name == param)?,
                None => node.static_children.get(segment)?,
            };
        }
        Some(node)
    }

    /// Link `child` under this node, keeping any existing binding
    fn attach(&mut self, mut child: Command) -> &mut Command {
        let parent_path = self.path.clone();

        if let Some(param) = child.name.strip_prefix(PARAM_MARKER).map(str::to_owned) {
            if let Some(existing) = self.param_child.as_deref() {
                if existing.name != param {
                    debug!(
                        "Ignoring wildcard ':{}', '{}' already has ':{}'",
                        param,
                        self.display_path(),
                        existing.name
                    );
                }
            }
            let slot = self.param_child.get_or_insert_with(|| {
                child.name = param;
                child.kind = CommandKind::Param;
                child.rebase(&parent_path);
                Box::new(child)
            });
            return &mut **slot;
        }

        self.static_children
            .entry(child.name.clone())
            .or_insert_with(|| {
                child.kind = CommandKind::Static;
                child.rebase(&parent_path);
                child
            })
    }

    /// Recompute the stored path of this subtree below `parent`
    fn rebase(&mut self, parent: &[String]) {
        let segment = match self.kind {
            CommandKind::Param => format!("{PARAM_MARKER}{}", self.name),
            CommandKind::Static => self.name.clone(),
        };
        self.path = parent.to_vec();
        self.path.push(segment);

        for child in self.static_children.values_mut() {
            child.rebase(&self.path);
        }
        if let Some(child) = self.param_child.as_deref_mut() {
            child.rebase(&self.path);
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("aliases", &self.aliases)
            .field("args", &self.args)
            .field("has_handler", &self.handler.is_some())
            .field("has_completer", &self.completer.is_some())
            .field("children", &self.children())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_register_creates_intermediate_nodes() {
        let mut root = Command::root();
        root.add_command(Command::new("/db/users/list/").with_help("list users"))
            .unwrap();

        let db = root.node_at(&path(&["db"])).unwrap();
        assert!(!db.has_handler());
        assert!(db.help().is_empty());

        let list = root.node_at(&path(&["db", "users", "list"])).unwrap();
        assert_eq!(list.name(), "list");
        assert_eq!(list.help(), "list users");
        assert_eq!(list.kind(), CommandKind::Static);
    }

    #[test]
    fn test_first_static_registration_wins() {
        let mut root = Command::root();
        root.add_command(Command::new("start").with_help("first")).unwrap();
        let kept = root
            .add_command(Command::new("start").with_help("second"))
            .unwrap();
        assert_eq!(kept.help(), "first");
        assert_eq!(root.children().len(), 1);
    }

    #[test]
    fn test_single_wildcard_per_parent() {
        let mut root = Command::root();
        root.add_command(Command::new("user/:a")).unwrap();
        let kept = root.add_command(Command::new("user/:b")).unwrap();
        assert_eq!(kept.name(), "a");

        let user = root.node_at(&path(&["user"])).unwrap();
        let param = user.param_child().unwrap();
        assert_eq!(param.name(), "a");
        assert_eq!(param.kind(), CommandKind::Param);
    }

    #[test]
    fn test_wildcard_segment_continues_under_existing_param() {
        let mut root = Command::root();
        root.add_command(Command::new("user/:id/show")).unwrap();
        root.add_command(Command::new("user/:other/delete")).unwrap();

        let user = root.node_at(&path(&["user"])).unwrap();
        let param = user.param_child().unwrap();
        assert_eq!(param.name(), "id");
        let names: Vec<&str> = param.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["delete", "show"]);
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut root = Command::root();
        assert!(matches!(
            root.add_command(Command::new("")),
            Err(ShellError::Registration(RegistrationError::EmptyName))
        ));
        assert!(matches!(
            root.add_command(Command::new("//")),
            Err(ShellError::Registration(RegistrationError::EmptyName))
        ));
    }

    #[test]
    fn test_empty_wildcard_rejected_without_side_effects() {
        let mut root = Command::root();
        let result = root.add_command(Command::new("db/:/show"));
        assert!(matches!(
            result,
            Err(ShellError::Registration(RegistrationError::EmptyWildcard { .. }))
        ));
        assert!(root.children().is_empty());

        let result = root.add_command(Command::new("db/:"));
        assert!(matches!(
            result,
            Err(ShellError::Registration(RegistrationError::EmptyWildcard { .. }))
        ));
    }

    #[test]
    fn test_empty_segment_rejected() {
        let mut root = Command::root();
        assert!(matches!(
            root.add_command(Command::new("a//b")),
            Err(ShellError::Registration(RegistrationError::EmptySegment { .. }))
        ));
    }

    #[test]
    fn test_remove_static_and_param() {
        let mut root = Command::root();
        root.add_command(Command::new("start")).unwrap();
        root.add_command(Command::new(":target")).unwrap();

        assert!(root.remove_command(":other").is_none());
        assert!(root.param_child().is_some());

        let removed = root.remove_command(":target").unwrap();
        assert_eq!(removed.name(), "target");
        assert!(root.param_child().is_none());

        assert!(root.remove_command("start").is_some());
        assert!(root.remove_command("start").is_none());
        assert!(root.children().is_empty());
    }

    #[test]
    fn test_replace_wildcard_after_delete() {
        let mut root = Command::root();
        root.add_command(Command::new("user/:id")).unwrap();
        let user = root.add_command(Command::new("user")).unwrap();
        user.remove_command(":id");
        root.add_command(Command::new("user/:name").with_help("by name"))
            .unwrap();

        let mut params = Vec::new();
        let tokens = path(&["user", "alice"]);
        let resolution = root.resolve(&tokens, &mut params);
        assert_eq!(resolution.node().map(|c| c.name()), Some("name"));
        assert_eq!(params, vec![Param::new("name", "alice")]);
    }

    #[test]
    fn test_children_sorted_with_param() {
        let mut root = Command::root();
        for name in ["stop", "apply", ":id", "start"] {
            root.add_command(Command::new(name)).unwrap();
        }
        let names: Vec<&str> = root.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["apply", "id", "start", "stop"]);
    }

    #[test]
    fn test_visible_subcommands() {
        let mut root = Command::root();
        assert!(!root.has_visible_subcommands());

        root.add_command(Command::new("help")).unwrap();
        assert!(!root.has_visible_subcommands());

        root.add_command(Command::new("exit")).unwrap();
        assert!(root.has_visible_subcommands());

        let mut other = Command::root();
        other.add_command(Command::new("run")).unwrap();
        assert!(other.has_visible_subcommands());

        let mut wild = Command::root();
        wild.add_command(Command::new(":id")).unwrap();
        assert!(wild.has_visible_subcommands());
    }

    #[test]
    fn test_parent_path_navigation() {
        let mut root = Command::root();
        root.add_command(Command::new("user/:id/show")).unwrap();

        let show = root.node_at(&path(&["user", ":id", "show"])).unwrap();
        assert_eq!(show.display_path(), "user <id> show");

        let parent = root.node_at(show.parent_path().unwrap()).unwrap();
        assert_eq!(parent.name(), "id");
        assert_eq!(parent.kind(), CommandKind::Param);
        assert!(root.parent_path().is_none());
    }

    #[test]
    fn test_prebuilt_subtree_is_rebased() {
        let mut group = Command::new("net");
        group.add_command(Command::new("ping")).unwrap();

        let mut root = Command::root();
        root.add_command(Command::new("tools")).unwrap();
        let tools = root.add_command(Command::new("tools")).unwrap();
        tools.add_command(group).unwrap();

        let ping = root.node_at(&path(&["tools", "net", "ping"])).unwrap();
        assert_eq!(ping.path(), path(&["tools", "net", "ping"]).as_slice());
    }
}

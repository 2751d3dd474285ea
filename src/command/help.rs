//! Help text rendering

use super::Command;

impl Command {
    /// Help text for this command alone
    ///
    /// Long help is preferred over the one-liner. A named command with
    /// neither gets a `"<name> has no help"` placeholder; the root gets
    /// nothing.
    pub fn resolved_help(&self) -> String {
        if !self.long_help.is_empty() {
            self.long_help.clone()
        } else if !self.help.is_empty() {
            self.help.clone()
        } else if !self.name.is_empty() {
            format!("{} has no help", self.name)
        } else {
            String::new()
        }
    }

    /// Help text for this command followed by its subcommands
    pub fn full_help(&self) -> String {
        let mut out = String::new();

        let help = self.resolved_help();
        if !help.is_empty() {
            out.push('\n');
            out.push_str(&help);
            out.push('\n');
        }

        if self.has_visible_subcommands() {
            out.push_str("\nCommands:\n");

            let children = self.children();
            let width = children
                .iter()
                .map(|child| child.name.chars().count())
                .max()
                .unwrap_or(0);

            for child in children {
                let line = format!(
                    "  {:<width$}      {}",
                    child.name,
                    child.resolved_help(),
                    width = width
                );
                out.push_str(line.trim_end());
                out.push('\n');
            }
            out.push('\n');
        }

        out
    }

    /// Full help for the command `tokens` lead to, or for this node if
    /// they lead nowhere
    pub fn help_for(&self, tokens: &[String]) -> String {
        let mut params = Vec::new();
        self.resolve(tokens, &mut params)
            .node()
            .unwrap_or(self)
            .full_help()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_help_precedence() {
        let both = Command::new("run").with_help("short").with_long_help("long");
        assert_eq!(both.resolved_help(), "long");

        let short = Command::new("run").with_help("short");
        assert_eq!(short.resolved_help(), "short");

        let none = Command::new("run");
        assert_eq!(none.resolved_help(), "run has no help");

        assert_eq!(Command::root().resolved_help(), "");
    }

    #[test]
    fn test_full_help_lists_sorted_children() {
        let mut root = Command::root();
        root.add_command(Command::new("stop").with_help("Stop the service"))
            .unwrap();
        root.add_command(Command::new("apply").with_help("Apply changes"))
            .unwrap();

        let help = root.full_help();
        assert_eq!(
            help,
            "\nCommands:\n  apply      Apply changes\n  stop       Stop the service\n\n"
        );
    }

    #[test]
    fn test_full_help_leaf_has_no_commands_block() {
        let leaf = Command::new("ping").with_help("Check connectivity");
        assert_eq!(leaf.full_help(), "\nCheck connectivity\n");
    }

    #[test]
    fn test_full_help_with_paragraph_and_param() {
        let mut user = Command::new("user").with_long_help("Manage users");
        user.add_command(Command::new(":name").with_help("User name"))
            .unwrap();
        user.add_command(Command::new("list")).unwrap();

        let help = user.full_help();
        assert!(help.starts_with("\nManage users\n\nCommands:\n"));
        assert!(help.contains("  list      list has no help\n"));
        assert!(help.contains("  name      User name\n"));
    }

    #[test]
    fn test_help_for_path() {
        let mut root = Command::root();
        root.add_command(Command::new("user/list").with_help("List users"))
            .unwrap();
        root.add_command(Command::new("ping")).unwrap();

        let tokens = vec!["user".to_string(), "list".to_string()];
        assert_eq!(root.help_for(&tokens), "\nList users\n");

        let unknown = vec!["nope".to_string()];
        assert_eq!(root.help_for(&unknown), root.full_help());
    }

    #[test]
    fn test_lone_help_child_hidden() {
        let mut cmd = Command::new("tool").with_help("A tool");
        cmd.add_command(Command::new("help")).unwrap();
        assert!(!cmd.full_help().contains("Commands:"));
    }
}

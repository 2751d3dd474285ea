//! Demo command tree served by the binary

use crate::command::{Arg, Command, Context};
use crate::error::{DispatchError, Result};

/// Build the demo tree
///
/// # Errors
/// Returns a registration error if any demo path is malformed.
pub fn demo_tree() -> Result<Command> {
    let mut root = Command::root();

    root.add_command(
        Command::new("greet/:name")
            .with_help("Greet someone by name")
            .with_arg(Arg::new("--shout").optional().with_help("use capitals"))
            .with_handler(greet),
    )?;

    root.add_command(
        Command::new("service")
            .with_alias("svc")
            .with_help("Manage services"),
    )?;
    root.add_command(Command::new("service/:name").with_help("Service name"))?;
    for (action, help) in [
        ("start", "Start the service"),
        ("stop", "Stop the service"),
        ("status", "Show service status"),
    ] {
        root.add_command(
            Command::new(format!("service/:name/{action}"))
                .with_help(help)
                .with_handler(service_action),
        )?;
    }
    root.add_command(
        Command::new("service/:name/logs")
            .with_help("Show service logs")
            .with_arg(Arg::new("--lines").pair().optional().with_help("number of lines"))
            .with_arg(Arg::new("--follow").optional().with_help("keep streaming"))
            .with_handler(service_logs),
    )?;

    root.add_command(
        Command::new("echo")
            .with_help("Print the arguments")
            .with_handler(|ctx: &mut Context<'_>| {
                let line = ctx.args().join(" ");
                ctx.println(&line)
            }),
    )?;

    Ok(root)
}

fn greet(ctx: &mut Context<'_>) -> Result<()> {
    let name = ctx.param("name").unwrap_or_default().to_string();
    let greeting = format!("Hello, {name}!");
    if ctx.args().iter().any(|a| a == "--shout") {
        ctx.println(&greeting.to_uppercase())
    } else {
        ctx.println(&greeting)
    }
}

fn service_action(ctx: &mut Context<'_>) -> Result<()> {
    let name = ctx.param("name").unwrap_or_default().to_string();
    let action = ctx.path().rsplit(' ').next().unwrap_or_default().to_string();
    ctx.println(&format!("{action}: {name}"))
}

fn service_logs(ctx: &mut Context<'_>) -> Result<()> {
    let name = ctx.param("name").unwrap_or_default().to_string();
    let lines = match ctx.args().iter().position(|a| a == "--lines") {
        Some(i) => {
            let value = ctx.args().get(i + 1).ok_or_else(|| {
                DispatchError::Failed("--lines needs a value".to_string())
            })?;
            value
                .parse::<usize>()
                .map_err(|_| DispatchError::Failed(format!("invalid line count '{value}'")))?
        }
        None => 10,
    };
    ctx.println(&format!("last {lines} line(s) of {name}"))
}

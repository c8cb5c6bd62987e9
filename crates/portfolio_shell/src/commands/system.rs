use terminal_contract::{CommandDescriptor, CommandName};

use super::{entry, CLEARED_MESSAGE};
use crate::{
    content,
    markup,
    registry::{CommandContext, CommandHandler},
};

const CAT_USAGE: &str = "Usage: cat <filename>";

pub(super) fn registrations() -> Vec<(CommandDescriptor, CommandHandler)> {
    vec![
        entry(
            CommandDescriptor::new(CommandName::Clear, "Clear the terminal"),
            clear,
        ),
        entry(
            CommandDescriptor::new(CommandName::Whoami, "Display current user info"),
            whoami,
        ),
        entry(
            CommandDescriptor::new(CommandName::Ls, "List directory contents"),
            ls,
        ),
        entry(
            CommandDescriptor::new(CommandName::Cat, "Display file contents")
                .with_min_args(1, CAT_USAGE),
            cat,
        ),
        entry(
            CommandDescriptor::new(CommandName::Pwd, "Show current directory"),
            pwd,
        ),
        entry(
            CommandDescriptor::new(CommandName::Date, "Show current date and time"),
            date,
        ),
    ]
}

/// Empties the log, then confirms with a flavor comment.
pub(crate) fn clear(ctx: &mut CommandContext<'_>) {
    ctx.clear_log();
    ctx.print(CLEARED_MESSAGE);
    ctx.flavor_comment();
}

fn whoami(ctx: &mut CommandContext<'_>) {
    let line = ctx.choose(&content::WHOAMI_RESPONSES);
    ctx.print(line);
    ctx.comment("// Identity crisis resolved ✅");
}

fn ls(ctx: &mut CommandContext<'_>) {
    ctx.print("Listing directory contents...");
    ctx.later(800, vec![content::DIRECTORY_LISTING.to_string()]);
}

fn cat(ctx: &mut CommandContext<'_>) {
    let Some(name) = ctx.args().first().cloned() else {
        ctx.print(markup::escape_html(CAT_USAGE));
        return;
    };
    match content::virtual_file(&name) {
        Some(contents) => ctx.print(markup::line_breaks(contents)),
        None => {
            ctx.print(format!(
                "cat: {}: No such file or directory",
                markup::escape_html(&name)
            ));
            ctx.comment("// Maybe try 'ls' to see available files?");
        }
    }
}

fn pwd(ctx: &mut CommandContext<'_>) {
    let path = ctx.config().absolute_path(ctx.cwd());
    ctx.print(markup::escape_html(&path));
}

fn date(ctx: &mut CommandContext<'_>) {
    let now = ctx.now_text();
    ctx.print(now);
    ctx.comment("// Time flies when you're having fun (and debugging) 🕒");
}

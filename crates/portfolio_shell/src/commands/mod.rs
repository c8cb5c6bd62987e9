//! Built-in portfolio commands.

use leptos::logging;
use terminal_contract::{CommandDescriptor, CommandName};

use crate::registry::{CommandContext, CommandHandler, CommandRegistry};

mod fun;
mod profile;
mod system;

pub(crate) use system::clear;

/// Text appended after `clear` empties the log.
pub const CLEARED_MESSAGE: &str = "Terminal cleared! ✨";

/// Descriptor and handler for every built-in command, in help order.
pub fn builtin_registrations() -> Vec<(CommandDescriptor, CommandHandler)> {
    let mut registrations = Vec::new();
    registrations.push(entry(
        CommandDescriptor::new(CommandName::Help, "Show available commands").hidden(),
        help,
    ));
    registrations.extend(profile::registrations());
    registrations.extend(system::registrations());
    registrations.extend(fun::registrations());
    registrations
}

/// Registry holding every built-in command.
pub fn portfolio_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    for (descriptor, handler) in builtin_registrations() {
        if let Err(err) = registry.register(descriptor, handler) {
            logging::warn!("builtin command registration skipped: {err}");
        }
    }
    registry
}

fn entry(
    descriptor: CommandDescriptor,
    handler: CommandHandler,
) -> (CommandDescriptor, CommandHandler) {
    (descriptor, handler)
}

const HELP_NAME_COLUMN: usize = 11;

fn help(ctx: &mut CommandContext<'_>) {
    let mut text = String::from("Available Commands:<br>\n");
    let rows = ctx
        .descriptors()
        .filter(|descriptor| descriptor.is_public())
        .map(|descriptor| {
            let name = descriptor.name.as_str();
            format!(
                r#"<span class="link">{name}</span>{:pad$}- {} <br>"#,
                "",
                descriptor.summary,
                pad = HELP_NAME_COLUMN.saturating_sub(name.len()),
            )
        })
        .collect::<Vec<_>>();
    for row in rows {
        text.push_str(&row);
        text.push('\n');
    }
    ctx.print(text);
    ctx.flavor_comment();
}

/// Prints a loading line and its comment now, then `block` after `delay_ms`.
fn staged(ctx: &mut CommandContext<'_>, loading: &str, note: Note, delay_ms: u32, block: &str) {
    ctx.print(loading);
    match note {
        Note::Flavor => ctx.flavor_comment(),
        Note::Fixed(text) => ctx.comment(text),
    }
    ctx.later(delay_ms, vec![block.to_string()]);
}

/// Comment printed under a loading line.
enum Note {
    Flavor,
    Fixed(&'static str),
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn every_vocabulary_word_is_registered_once() {
        let registry = portfolio_registry();
        assert_eq!(registry.len(), CommandName::ALL.len());
        let names = builtin_registrations()
            .into_iter()
            .map(|(descriptor, _)| descriptor.name)
            .collect::<BTreeSet<_>>();
        assert_eq!(names.len(), CommandName::ALL.len());
    }

    #[test]
    fn hidden_commands_are_help_weather_and_sudo() {
        let hidden = portfolio_registry()
            .descriptors()
            .filter(|descriptor| !descriptor.is_public())
            .map(|descriptor| descriptor.name)
            .collect::<Vec<_>>();
        assert_eq!(
            hidden,
            vec![CommandName::Help, CommandName::Weather, CommandName::Sudo]
        );
    }
}

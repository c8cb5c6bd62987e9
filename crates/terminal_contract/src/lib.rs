//! Shared terminal session contracts used by the headless dispatcher and the terminal UI.
//!
//! This crate is intentionally runtime-agnostic. It defines serializable command metadata, session
//! log entries, and side-effect intents without depending on Leptos, browser APIs, or the session
//! engine itself.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every command name the terminal recognizes.
///
/// Declaration order is the order commands are listed in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandName {
    /// Lists the public commands.
    Help,
    /// Biography summary.
    About,
    /// Technical and general skills.
    Skills,
    /// Work history.
    Experience,
    /// Leadership, projects and awards.
    Projects,
    /// Schooling and coursework.
    Education,
    /// Contact details.
    Contact,
    /// Social media and websites.
    Links,
    /// Empties the session log.
    Clear,
    /// Identity one-liner.
    Whoami,
    /// Virtual directory listing.
    Ls,
    /// Virtual file contents.
    Cat,
    /// Cosmetic working path.
    Pwd,
    /// Host local date and time.
    Date,
    /// Decorative forecast.
    Weather,
    /// ASCII coffee cup.
    Coffee,
    /// Programming joke.
    Joke,
    /// Random binary rain.
    Matrix,
    /// Joke privilege escalation.
    Sudo,
}

impl CommandName {
    /// All command names in help order.
    pub const ALL: [CommandName; 19] = [
        CommandName::Help,
        CommandName::About,
        CommandName::Skills,
        CommandName::Experience,
        CommandName::Projects,
        CommandName::Education,
        CommandName::Contact,
        CommandName::Links,
        CommandName::Clear,
        CommandName::Whoami,
        CommandName::Ls,
        CommandName::Cat,
        CommandName::Pwd,
        CommandName::Date,
        CommandName::Weather,
        CommandName::Coffee,
        CommandName::Joke,
        CommandName::Matrix,
        CommandName::Sudo,
    ];

    /// Returns the token users type to run this command.
    pub const fn as_str(self) -> &'static str {
        match self {
            CommandName::Help => "help",
            CommandName::About => "about",
            CommandName::Skills => "skills",
            CommandName::Experience => "experience",
            CommandName::Projects => "projects",
            CommandName::Education => "education",
            CommandName::Contact => "contact",
            CommandName::Links => "links",
            CommandName::Clear => "clear",
            CommandName::Whoami => "whoami",
            CommandName::Ls => "ls",
            CommandName::Cat => "cat",
            CommandName::Pwd => "pwd",
            CommandName::Date => "date",
            CommandName::Weather => "weather",
            CommandName::Coffee => "coffee",
            CommandName::Joke => "joke",
            CommandName::Matrix => "matrix",
            CommandName::Sudo => "sudo",
        }
    }

    /// Resolves a typed token, ignoring ASCII case.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility policy for registered commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandVisibility {
    /// Command is listed in help.
    Public,
    /// Command is callable but omitted from help.
    Hidden,
}

/// Registration metadata for one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDescriptor {
    /// Command name.
    pub name: CommandName,
    /// One-line summary shown in help.
    pub summary: String,
    /// Minimum number of argument tokens the handler needs.
    pub min_args: usize,
    /// Message printed instead of running the handler when too few arguments are given.
    pub usage: Option<String>,
    /// Visibility policy.
    pub visibility: CommandVisibility,
}

impl CommandDescriptor {
    /// Creates a public, zero-arity descriptor.
    pub fn new(name: CommandName, summary: impl Into<String>) -> Self {
        Self {
            name,
            summary: summary.into(),
            min_args: 0,
            usage: None,
            visibility: CommandVisibility::Public,
        }
    }

    /// Requires at least `min_args` arguments, printing `usage` otherwise.
    pub fn with_min_args(mut self, min_args: usize, usage: impl Into<String>) -> Self {
        self.min_args = min_args;
        self.usage = Some(usage.into());
        self
    }

    /// Omits the command from help listings.
    pub fn hidden(mut self) -> Self {
        self.visibility = CommandVisibility::Hidden;
        self
    }

    /// Returns whether the command appears in help listings.
    pub fn is_public(&self) -> bool {
        self.visibility == CommandVisibility::Public
    }
}

/// Session-unique log entry identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u64);

/// What produced a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    /// Prompt plus the line the user submitted.
    Input,
    /// Handler or dispatcher response.
    Output,
    /// Startup banner rendered with a typewriter animation.
    Banner,
}

/// One immutable rendered line or block in the session log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Entry identifier.
    pub id: EntryId,
    /// Entry kind.
    pub kind: EntryKind,
    /// Trusted HTML markup.
    pub markup: String,
}

impl LogEntry {
    /// Returns the CSS class used by the terminal output container.
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            EntryKind::Input => "line",
            EntryKind::Output => "response",
            EntryKind::Banner => "response typing",
        }
    }
}

/// Identifier of a delayed-output task owned by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

/// Side-effect intents emitted by session transitions for the UI host to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SessionEffect {
    /// Scroll the output container to its bottom.
    ScrollToBottom,
    /// Call back into the session with `task` after `delay_ms`.
    Schedule {
        /// Task to complete when the timer fires.
        task: TaskId,
        /// Delay in milliseconds.
        delay_ms: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_parse_case_insensitively() {
        assert_eq!(CommandName::parse("HELP"), Some(CommandName::Help));
        assert_eq!(CommandName::parse("WhoAmI"), Some(CommandName::Whoami));
        assert_eq!(CommandName::parse("frobnicate"), None);
        assert_eq!(CommandName::parse(""), None);
    }

    #[test]
    fn every_name_round_trips_through_its_token() {
        for name in CommandName::ALL {
            assert_eq!(CommandName::parse(name.as_str()), Some(name));
        }
    }

    #[test]
    fn declaration_order_matches_help_order() {
        assert!(CommandName::ALL.windows(2).all(|pair| pair[0] < pair[1]));
        let tail = CommandName::ALL[13..17]
            .iter()
            .map(|name| name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(tail, vec!["date", "weather", "coffee", "joke"]);
    }

    #[test]
    fn schedule_effect_serializes_with_kind_tag() {
        let value = serde_json::to_value(SessionEffect::Schedule {
            task: TaskId(3),
            delay_ms: 800,
        })
        .expect("serialize effect");
        assert_eq!(value["kind"], "schedule");
        assert_eq!(value["delay_ms"], 800);
    }
}

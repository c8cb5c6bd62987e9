//! Error types for dispatch, registration and configuration.

use terminal_contract::CommandName;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Recoverable dispatch failures. The session renders these into the log; none is fatal.
pub enum DispatchError {
    /// The first token did not name a registered command.
    #[error("Command not found: {0}")]
    UnknownCommand(String),
    /// The command needs more arguments than were given.
    #[error("{usage}")]
    MissingArguments {
        /// Command that was invoked.
        command: CommandName,
        /// Usage message for the command.
        usage: String,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Registry mutation failures.
pub enum RegistryError {
    /// A handler is already registered under this name.
    #[error("command `{0}` is already registered")]
    DuplicateCommand(CommandName),
}

#[derive(Debug, Error)]
/// Launch parameter decoding failures.
pub enum ConfigError {
    /// The launch parameters were not a valid session config.
    #[error("invalid terminal config: {0}")]
    Invalid(#[from] serde_json::Error),
}

//! Command registration and the execution context handed to handlers.

use std::{collections::BTreeMap, fmt};

use rand::{Rng, RngCore};
use terminal_contract::{CommandDescriptor, CommandName};

use crate::{
    clock::Clock,
    config::SessionConfig,
    content::FLAVOR_COMMENTS,
    error::{DispatchError, RegistryError},
    markup,
};

/// Command handler. Handlers only write to their [`CommandContext`].
pub type CommandHandler = fn(&mut CommandContext<'_>);

/// Output deferred until a scheduled task completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayedOutput {
    /// Delay before the lines are appended.
    pub delay_ms: u32,
    /// Markup appended when the delay elapses.
    pub lines: Vec<String>,
}

/// Everything one handler invocation produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerOutput {
    /// Empty the log before appending `lines`.
    pub clear_log: bool,
    /// Markup appended immediately.
    pub lines: Vec<String>,
    /// Markup appended later.
    pub delayed: Vec<DelayedOutput>,
}

/// Per-invocation view of the session given to a handler.
pub struct CommandContext<'a> {
    args: &'a [String],
    cwd: &'a str,
    config: &'a SessionConfig,
    registry: &'a CommandRegistry,
    rng: &'a mut dyn RngCore,
    clock: &'a dyn Clock,
    output: HandlerOutput,
}

impl<'a> CommandContext<'a> {
    /// Creates a context for one invocation.
    pub fn new(
        args: &'a [String],
        cwd: &'a str,
        config: &'a SessionConfig,
        registry: &'a CommandRegistry,
        rng: &'a mut dyn RngCore,
        clock: &'a dyn Clock,
    ) -> Self {
        Self {
            args,
            cwd,
            config,
            registry,
            rng,
            clock,
            output: HandlerOutput::default(),
        }
    }

    /// Argument tokens after the command name.
    pub fn args(&self) -> &[String] {
        self.args
    }

    /// Cosmetic working path.
    pub fn cwd(&self) -> &str {
        self.cwd
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        self.config
    }

    /// Registered descriptors in help order.
    pub fn descriptors(&self) -> impl Iterator<Item = &CommandDescriptor> + '_ {
        self.registry.descriptors()
    }

    /// Human-readable local time.
    pub fn now_text(&self) -> String {
        self.clock.now_text()
    }

    /// Randomness source for handlers that build their own random output.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    /// Picks one candidate uniformly. Returns `""` for an empty set.
    pub fn choose(&mut self, candidates: &[&'static str]) -> &'static str {
        if candidates.is_empty() {
            return "";
        }
        candidates[self.rng.random_range(0..candidates.len())]
    }

    /// Appends markup now.
    pub fn print(&mut self, markup: impl Into<String>) {
        self.output.lines.push(markup.into());
    }

    /// Appends a styled comment now.
    pub fn comment(&mut self, text: &str) {
        self.print(markup::comment(text));
    }

    /// Appends a random flavor comment now.
    pub fn flavor_comment(&mut self) {
        let text = self.choose(&FLAVOR_COMMENTS);
        self.comment(text);
    }

    /// Queues markup to be appended after `delay_ms`.
    pub fn later(&mut self, delay_ms: u32, lines: Vec<String>) {
        self.output.delayed.push(DelayedOutput { delay_ms, lines });
    }

    /// Empties the log before this invocation's lines are appended.
    pub fn clear_log(&mut self) {
        self.output.clear_log = true;
    }

    /// Consumes the context and returns what the handler produced.
    pub fn into_output(self) -> HandlerOutput {
        self.output
    }
}

/// A descriptor bound to its handler.
#[derive(Clone)]
pub struct RegisteredCommand {
    /// Registration metadata.
    pub descriptor: CommandDescriptor,
    /// Handler function.
    pub handler: CommandHandler,
}

impl fmt::Debug for RegisteredCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredCommand")
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

impl RegisteredCommand {
    /// Checks the declared minimum arity.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::MissingArguments`] when too few arguments were given.
    pub fn check_arity(&self, args: &[String]) -> Result<(), DispatchError> {
        if args.len() >= self.descriptor.min_args {
            return Ok(());
        }
        Err(DispatchError::MissingArguments {
            command: self.descriptor.name,
            usage: self
                .descriptor
                .usage
                .clone()
                .unwrap_or_else(|| format!("Usage: {}", self.descriptor.name)),
        })
    }
}

/// Case-insensitive map from command name to handler.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    by_name: BTreeMap<CommandName, RegisteredCommand>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one command.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateCommand`] if the name is already taken.
    pub fn register(
        &mut self,
        descriptor: CommandDescriptor,
        handler: CommandHandler,
    ) -> Result<(), RegistryError> {
        let name = descriptor.name;
        if self.by_name.contains_key(&name) {
            return Err(RegistryError::DuplicateCommand(name));
        }
        self.by_name
            .insert(name, RegisteredCommand { descriptor, handler });
        Ok(())
    }

    /// Resolves a typed command token.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownCommand`] with the case-folded token on a miss.
    pub fn resolve(&self, token: &str) -> Result<&RegisteredCommand, DispatchError> {
        CommandName::parse(token)
            .and_then(|name| self.by_name.get(&name))
            .ok_or_else(|| DispatchError::UnknownCommand(token.to_lowercase()))
    }

    /// Returns the command registered under `name`.
    pub fn get(&self, name: CommandName) -> Option<&RegisteredCommand> {
        self.by_name.get(&name)
    }

    /// Registered descriptors in help order.
    pub fn descriptors(&self) -> impl Iterator<Item = &CommandDescriptor> + '_ {
        self.by_name.values().map(|registered| &registered.descriptor)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

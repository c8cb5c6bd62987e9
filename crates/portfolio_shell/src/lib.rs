//! Headless command dispatcher and session log for the terminal portfolio.
//!
//! A [`Session`] owns the input history, the append-only log, and the delayed output queued by
//! command handlers. Every transition returns [`SessionEffect`] intents (scroll, schedule) that the
//! UI host executes, so the whole engine runs without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod clock;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod history;
pub mod konami;
pub mod log;
pub mod markup;
pub mod registry;
pub mod session;
pub mod ticker;

pub use clock::{Clock, SystemClock};
pub use config::SessionConfig;
pub use error::{ConfigError, DispatchError, RegistryError};
pub use history::CommandHistory;
pub use konami::{KonamiTracker, KONAMI_MESSAGE, KONAMI_SEQUENCE};
pub use log::SessionLog;
pub use registry::{CommandContext, CommandHandler, CommandRegistry, HandlerOutput, RegisteredCommand};
pub use session::Session;
pub use terminal_contract::{
    CommandDescriptor, CommandName, EntryId, EntryKind, LogEntry, SessionEffect, TaskId,
};
pub use ticker::{
    quote_all, TickerDirection, TickerMagnitude, TickerQuote, TickerSymbol, TICKER_REFRESH_MS,
    TICKER_SYMBOLS,
};

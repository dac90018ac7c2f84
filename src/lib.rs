/*!
 * Air-Easy - Terminal Flight Booking
 *
 * A small interactive booking tool with:
 * - Flight record extraction from loosely structured fetch output
 * - An in-memory seat ledger with fixed per-flight capacity
 * - Pluggable flight sources (external command, saved payload, in-memory)
 * - A scripted or terminal-driven booking session
 */

pub mod cli_style;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod output;
pub mod session;
pub mod source;

// Re-export commonly used types
pub use crate::config::{AppConfig, LogLevel};
pub use crate::core::{
    extract_records, FlightRecord, Ledger, LedgerError, SEAT_CAPACITY, SENTINEL,
};
pub use error::{AirEasyError, Result};
pub use session::{
    LinePrompt, Outcome, Passenger, Prompt, ScriptedPrompt, Session, TerminalPrompt,
};
pub use source::{
    load_ledger, CommandSource, FetchError, FileSource, FlightSource, Route, StaticSource,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

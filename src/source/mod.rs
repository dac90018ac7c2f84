//! Flight data providers
//!
//! A `FlightSource` hands back the raw payload for a route. The booking core
//! only ever sees that text, so any provider can stand in for the real one:
//! - `CommandSource`: runs an external program and captures its stdout
//! - `FileSource`: reads a payload that was saved earlier
//! - `StaticSource`: in-memory payload for tests and demos

mod command;
mod file;
mod fixed;

pub use command::{default_artifact_path, CommandSource, ARTIFACT_NAME};
pub use file::FileSource;
pub use fixed::StaticSource;

use crate::core::{extract_records, Ledger};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to start fetch command {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Fetch command exited with {0}")]
    ExitStatus(String),

    #[error("Unable to read flight data from {path}: {source}")]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Flight data unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;

/// Origin and destination airport codes, taken as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// Anything that can produce a raw flight payload for a route
pub trait FlightSource {
    fn fetch(&self, route: &Route) -> Result<String>;
}

impl<S: FlightSource + ?Sized> FlightSource for &S {
    fn fetch(&self, route: &Route) -> Result<String> {
        (**self).fetch(route)
    }
}

impl<S: FlightSource + ?Sized> FlightSource for Box<S> {
    fn fetch(&self, route: &Route) -> Result<String> {
        (**self).fetch(route)
    }
}

/// Fetch and extract the flights for `route`.
///
/// A failed fetch is reported in the log and yields an empty ledger; it is
/// never escalated to the caller.
pub fn load_ledger<S: FlightSource + ?Sized>(source: &S, route: &Route) -> Ledger {
    match source.fetch(route) {
        Ok(payload) => {
            let records = extract_records(&payload);
            info!(route = %route, flights = records.len(), "flights loaded");
            Ledger::new(records)
        }
        Err(e) => {
            warn!(route = %route, error = %e, "flight fetch failed, treating as no flights");
            Ledger::default()
        }
    }
}

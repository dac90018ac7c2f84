//! Structured output writer supporting JSON and human-readable listings.

use serde::Serialize;
use std::io::Write;

use crate::cli_style;
use crate::core::FlightRecord;
use crate::error::Result;
use crate::source::Route;

/// Output mode for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Flight listing for JSON output
#[derive(Debug, Serialize)]
pub struct FlightListing<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub count: usize,
    pub flights: &'a [FlightRecord],
}

/// Structured output writer that supports both human-readable and JSON output
#[derive(Debug, Clone)]
pub struct OutputWriter {
    pub mode: OutputMode,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        Self {
            mode: if json { OutputMode::Json } else { OutputMode::Human },
        }
    }

    /// Write the flights found for a route
    pub fn flight_listing<W: Write>(
        &self,
        out: &mut W,
        route: &Route,
        flights: &[FlightRecord],
    ) -> Result<()> {
        match self.mode {
            OutputMode::Json => {
                let listing = FlightListing {
                    origin: &route.origin,
                    destination: &route.destination,
                    count: flights.len(),
                    flights,
                };
                serde_json::to_writer(&mut *out, &listing)?;
                writeln!(out)?;
            }
            OutputMode::Human => {
                if flights.is_empty() {
                    cli_style::write_warning(out, "No flights found for the given route.")?;
                } else {
                    cli_style::section_header(out, &format!("Flights {}", route))?;
                    writeln!(out, "{}", cli_style::flights_table(flights))?;
                }
            }
        }
        Ok(())
    }
}

/// Sanitize error messages by collapsing whitespace
pub fn sanitize_error(msg: &str) -> String {
    msg.split_whitespace().collect::<Vec<&str>>().join(" ")
}

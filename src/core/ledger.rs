/*!
 * In-memory seat ledger for one booking session
 *
 * Flights are addressed by their 1-based position in the listing shown to the
 * user. Positions are only stable because the ledger never reorders, inserts
 * or removes records after construction.
 */

use super::flight::FlightRecord;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Flight {index} is not in the listing (1..={len})")]
    OutOfRange { index: usize, len: usize },

    #[error("No seats available on flight {flight_number}")]
    NoSeatsAvailable { flight_number: String },
}

/// Ordered, exclusively owned set of flights for the run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    flights: Vec<FlightRecord>,
}

impl Ledger {
    pub fn new(flights: Vec<FlightRecord>) -> Self {
        Self { flights }
    }

    /// All flights in extraction order
    pub fn list(&self) -> &[FlightRecord] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Look up a flight by its 1-based listing position
    pub fn get(&self, index: usize) -> Option<&FlightRecord> {
        index.checked_sub(1).and_then(|i| self.flights.get(i))
    }

    fn slot(&mut self, index: usize) -> Result<&mut FlightRecord, LedgerError> {
        let len = self.flights.len();
        index
            .checked_sub(1)
            .and_then(|i| self.flights.get_mut(i))
            .ok_or(LedgerError::OutOfRange { index, len })
    }

    /// Book one seat on the flight at `index` (1-based).
    ///
    /// Returns the flight number on success. A failed booking leaves every
    /// record untouched.
    pub fn book_seat(&mut self, index: usize) -> Result<String, LedgerError> {
        let flight = self.slot(index)?;
        if !flight.has_available_seats() {
            debug!(index, flight = %flight.flight_number, "booking refused, flight full");
            return Err(LedgerError::NoSeatsAvailable {
                flight_number: flight.flight_number.clone(),
            });
        }
        flight.take_seat();

        info!(
            index,
            flight = %flight.flight_number,
            remaining = flight.available_seats(),
            "seat booked"
        );
        Ok(flight.flight_number.clone())
    }

    /// Cancel one seat on the flight at `index` (1-based).
    ///
    /// A flight already at capacity stays at capacity; the cancel still
    /// reports success.
    pub fn cancel_seat(&mut self, index: usize) -> Result<String, LedgerError> {
        let flight = self.slot(index)?;
        flight.release_seat();

        info!(
            index,
            flight = %flight.flight_number,
            remaining = flight.available_seats(),
            "seat cancelled"
        );
        Ok(flight.flight_number.clone())
    }
}

impl From<Vec<FlightRecord>> for Ledger {
    fn from(flights: Vec<FlightRecord>) -> Self {
        Self::new(flights)
    }
}

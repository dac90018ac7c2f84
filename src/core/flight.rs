/*!
 * Flight record model
 */

use serde::Serialize;
use std::fmt;

/// Seats on every flight when it is first extracted
pub const SEAT_CAPACITY: u32 = 60;

/// Fallback value for any field the payload does not carry
pub const SENTINEL: &str = "N/A";

/// One flight as seen by the booking session
///
/// `available_seats` is a bounded counter in `0..=SEAT_CAPACITY`. The only
/// mutation paths are [`FlightRecord::take_seat`] and
/// [`FlightRecord::release_seat`], both reached through the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightRecord {
    pub flight_number: String,
    pub departure: String,
    pub arrival: String,
    pub status: String,
    available_seats: u32,
}

impl FlightRecord {
    /// Create a record at full capacity
    pub fn new(
        flight_number: impl Into<String>,
        departure: impl Into<String>,
        arrival: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            departure: departure.into(),
            arrival: arrival.into(),
            status: status.into(),
            available_seats: SEAT_CAPACITY,
        }
    }

    pub fn available_seats(&self) -> u32 {
        self.available_seats
    }

    pub fn has_available_seats(&self) -> bool {
        self.available_seats > 0
    }

    /// Take one seat, never below zero
    pub(crate) fn take_seat(&mut self) {
        self.available_seats = self.available_seats.saturating_sub(1);
    }

    /// Give one seat back, never above capacity
    pub(crate) fn release_seat(&mut self) {
        if self.available_seats < SEAT_CAPACITY {
            self.available_seats += 1;
        }
    }
}

impl fmt::Display for FlightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> {} ({}, {} seats)",
            self.flight_number, self.departure, self.arrival, self.status, self.available_seats
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_at_capacity() {
        let record = FlightRecord::new("AE100", "JFK", "LAX", "On Time");
        assert_eq!(record.available_seats(), SEAT_CAPACITY);
        assert!(record.has_available_seats());
    }

    #[test]
    fn test_take_seat_stops_at_zero() {
        let mut record = FlightRecord::new("AE100", "JFK", "LAX", "On Time");
        for _ in 0..SEAT_CAPACITY {
            assert!(record.has_available_seats());
            record.take_seat();
        }
        assert_eq!(record.available_seats(), 0);
        assert!(!record.has_available_seats());
        record.take_seat();
        assert_eq!(record.available_seats(), 0);
    }

    #[test]
    fn test_release_seat_clamps_at_capacity() {
        let mut record = FlightRecord::new("AE100", "JFK", "LAX", "On Time");
        record.release_seat();
        assert_eq!(record.available_seats(), SEAT_CAPACITY);

        record.take_seat();
        record.release_seat();
        assert_eq!(record.available_seats(), SEAT_CAPACITY);
    }

    #[test]
    fn test_display() {
        let record = FlightRecord::new("AE100", "JFK", "LAX", "On Time");
        assert_eq!(record.to_string(), "AE100 JFK -> LAX (On Time, 60 seats)");
    }

    #[test]
    fn test_serializes_seat_count() {
        let record = FlightRecord::new("AE100", "JFK", "LAX", "On Time");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"available_seats\":60"));
        assert!(json.contains("\"flight_number\":\"AE100\""));
    }
}

/*!
 * Core booking model: record extraction and the seat ledger
 */

pub mod extract;
pub mod flight;
pub mod ledger;

pub use extract::extract_records;
pub use flight::{FlightRecord, SEAT_CAPACITY, SENTINEL};
pub use ledger::{Ledger, LedgerError};

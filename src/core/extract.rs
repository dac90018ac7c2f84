/*!
 * Record extraction from fetch payloads
 *
 * The payload is treated as a run of brace-delimited fragments, each of which
 * may carry `"key": "value"` pairs. This is a pattern matcher, not a JSON
 * parser: there is no escaping, no nesting and no numeric values. Anything it
 * cannot find degrades to the sentinel value.
 */

use super::flight::{FlightRecord, SENTINEL};
use tracing::{debug, trace};

/// Keys read out of each fragment
pub const FLIGHT_NUMBER_KEY: &str = "flight_number";
pub const DEPARTURE_KEY: &str = "departure";
pub const ARRIVAL_KEY: &str = "arrival";
pub const STATUS_KEY: &str = "status";

/// Split the payload into `{...}` fragments, in order.
///
/// Stops at the first `{` that has no closing `}` after it, dropping the rest
/// of the payload.
pub fn fragments(payload: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = payload[cursor..].find('{') {
        let start = cursor + offset;
        let Some(len) = payload[start..].find('}') else {
            trace!(at = start, "unterminated fragment, stopping");
            break;
        };
        let end = start + len;
        found.push(&payload[start..=end]);
        cursor = end + 1;
    }

    found
}

/// Look up the quoted value for `key` inside one fragment.
///
/// Returns `None` when the key is absent or the colon or either quote after it
/// cannot be found.
pub fn field<'a>(fragment: &'a str, key: &str) -> Option<&'a str> {
    let quoted_key = format!("\"{}\"", key);
    let key_pos = fragment.find(&quoted_key)?;

    let colon = key_pos + fragment[key_pos..].find(':')?;
    let open = colon + 1 + fragment[colon + 1..].find('"')?;
    let close = open + 1 + fragment[open + 1..].find('"')?;

    Some(&fragment[open + 1..close])
}

fn field_or_sentinel(fragment: &str, key: &str) -> String {
    field(fragment, key).unwrap_or(SENTINEL).to_string()
}

/// Build one record from a fragment. Seats always start at capacity.
pub fn record_from_fragment(fragment: &str) -> FlightRecord {
    FlightRecord::new(
        field_or_sentinel(fragment, FLIGHT_NUMBER_KEY),
        field_or_sentinel(fragment, DEPARTURE_KEY),
        field_or_sentinel(fragment, ARRIVAL_KEY),
        field_or_sentinel(fragment, STATUS_KEY),
    )
}

/// Extract every flight record from a raw payload
pub fn extract_records(payload: &str) -> Vec<FlightRecord> {
    let records: Vec<FlightRecord> = fragments(payload)
        .into_iter()
        .map(|fragment| {
            let record = record_from_fragment(fragment);
            trace!(flight = %record.flight_number, "extracted fragment");
            record
        })
        .collect();

    debug!(count = records.len(), bytes = payload.len(), "extracted flight records");
    records
}

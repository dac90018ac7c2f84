//! In-memory flight source
//!
//! Serves a fixed payload, or a fixed failure, for every route.

use super::{FetchError, FlightSource, Result, Route};

#[derive(Debug, Clone)]
pub struct StaticSource {
    outcome: std::result::Result<String, String>,
}

impl StaticSource {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            outcome: Ok(payload.into()),
        }
    }

    /// A source whose every fetch fails with `FetchError::Unavailable`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
        }
    }
}

impl FlightSource for StaticSource {
    fn fetch(&self, _route: &Route) -> Result<String> {
        self.outcome.clone().map_err(FetchError::Unavailable)
    }
}

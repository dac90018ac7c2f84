//! Saved-payload flight source

use super::{FetchError, FlightSource, Result, Route};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads a payload captured by an earlier fetch, whatever the route
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FlightSource for FileSource {
    fn fetch(&self, route: &Route) -> Result<String> {
        debug!(path = %self.path.display(), route = %route, "reading saved payload");
        fs::read_to_string(&self.path).map_err(|source| FetchError::Artifact {
            path: self.path.clone(),
            source,
        })
    }
}

//! External command flight source
//!
//! Runs `program [args...] <origin> <destination>` with stdout redirected into
//! a fixed-named artifact file, then reads the artifact back. The call blocks
//! until the command exits; there is no timeout and no retry.

use super::{FetchError, FlightSource, Result, Route};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Default name of the file that receives the command's stdout
pub const ARTIFACT_NAME: &str = "flights_output.json";

/// Default location of the fetch artifact (system temp directory)
pub fn default_artifact_path() -> PathBuf {
    std::env::temp_dir().join(ARTIFACT_NAME)
}

#[derive(Debug, Clone)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
    artifact: PathBuf,
}

impl CommandSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            artifact: default_artifact_path(),
        }
    }

    /// Leading arguments passed before the route codes
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_artifact(mut self, artifact: impl Into<PathBuf>) -> Self {
        self.artifact = artifact.into();
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn artifact(&self) -> &Path {
        &self.artifact
    }

    fn command_for(&self, route: &Route) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(&route.origin)
            .arg(&route.destination)
            .stdin(Stdio::null());
        command
    }
}

impl FlightSource for CommandSource {
    fn fetch(&self, route: &Route) -> Result<String> {
        let artifact_error = |source| FetchError::Artifact {
            path: self.artifact.clone(),
            source,
        };

        let stdout = File::create(&self.artifact).map_err(artifact_error)?;

        debug!(
            program = %self.program,
            args = ?self.args,
            route = %route,
            artifact = %self.artifact.display(),
            "running fetch command"
        );

        let status = self
            .command_for(route)
            .stdout(stdout)
            .status()
            .map_err(|source| FetchError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(FetchError::ExitStatus(status.to_string()));
        }

        fs::read_to_string(&self.artifact).map_err(artifact_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let source = CommandSource::new("python").with_args(["fetch_flights.py"]);
        assert_eq!(source.program(), "python");
        assert_eq!(source.args, vec!["fetch_flights.py".to_string()]);
        assert!(source.artifact().ends_with(ARTIFACT_NAME));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let dir = TempDir::new().unwrap();
        let source = CommandSource::new("air-easy-no-such-program-xyz")
            .with_artifact(dir.path().join(ARTIFACT_NAME));

        let err = source.fetch(&Route::new("JFK", "LAX")).unwrap_err();
        assert!(matches!(err, FetchError::Spawn { .. }));
    }

    #[test]
    fn test_unwritable_artifact() {
        let dir = TempDir::new().unwrap();
        let source = CommandSource::new("echo")
            .with_artifact(dir.path().join("missing").join(ARTIFACT_NAME));

        let err = source.fetch(&Route::new("JFK", "LAX")).unwrap_err();
        assert!(matches!(err, FetchError::Artifact { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout_with_route_arguments() {
        let dir = TempDir::new().unwrap();
        let artifact = dir.path().join(ARTIFACT_NAME);
        let source = CommandSource::new("sh")
            .with_args([
                "-c",
                r#"printf '{"flight_number": "AE1", "departure": "%s", "arrival": "%s"}' "$0" "$1""#,
            ])
            .with_artifact(&artifact);

        let payload = source.fetch(&Route::new("JFK", "LAX")).unwrap();
        assert_eq!(
            payload,
            r#"{"flight_number": "AE1", "departure": "JFK", "arrival": "LAX"}"#
        );
        assert_eq!(fs::read_to_string(&artifact).unwrap(), payload);
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit() {
        let dir = TempDir::new().unwrap();
        let source = CommandSource::new("sh")
            .with_args(["-c", "echo '{}'; exit 3"])
            .with_artifact(dir.path().join(ARTIFACT_NAME));

        let err = source.fetch(&Route::new("JFK", "LAX")).unwrap_err();
        assert!(matches!(err, FetchError::ExitStatus(_)));
    }
}

/*!
 * Error types for Air-Easy
 */

use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, AirEasyError>;

/// Exit code constants for structured process exit
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Failures that end a session early.
///
/// Booking and fetch problems are not in here: they are recovered inside the
/// session with a notice to the user.
#[derive(Debug)]
pub enum AirEasyError {
    /// I/O error
    Io(io::Error),

    /// Configuration error
    Config(String),

    /// Interactive prompt failed (terminal closed, input unreadable)
    Prompt(String),

    /// Writing results failed
    Output(String),
}

impl AirEasyError {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }

    /// Get error category for logging
    pub fn category(&self) -> ErrorCategory {
        match self {
            AirEasyError::Io(_) => ErrorCategory::IoError,
            AirEasyError::Config(_) => ErrorCategory::Configuration,
            AirEasyError::Prompt(_) => ErrorCategory::Input,
            AirEasyError::Output(_) => ErrorCategory::Output,
        }
    }

    /// Hint printed under the error message
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            AirEasyError::Io(_) => Some("Check that the --config and --log paths are readable"),
            AirEasyError::Config(_) => Some("Check the config file and command-line options"),
            AirEasyError::Prompt(_) => Some("Every question needs an answer; input ended early"),
            AirEasyError::Output(_) => None,
        }
    }
}

/// Error category for classification and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// I/O operation errors
    IoError,
    /// Configuration errors
    Configuration,
    /// User input errors
    Input,
    /// Result rendering errors
    Output,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::IoError => write!(f, "io"),
            ErrorCategory::Configuration => write!(f, "configuration"),
            ErrorCategory::Input => write!(f, "input"),
            ErrorCategory::Output => write!(f, "output"),
        }
    }
}

impl fmt::Display for AirEasyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AirEasyError::Io(err) => {
                write!(f, "I/O error: {}", err)
            }
            AirEasyError::Config(msg) => {
                write!(f, "Configuration error: {}", msg)
            }
            AirEasyError::Prompt(msg) => {
                write!(f, "Input error: {}", msg)
            }
            AirEasyError::Output(msg) => {
                write!(f, "Output error: {}", msg)
            }
        }
    }
}

impl std::error::Error for AirEasyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AirEasyError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AirEasyError {
    fn from(err: io::Error) -> Self {
        AirEasyError::Io(err)
    }
}

impl From<serde_json::Error> for AirEasyError {
    fn from(err: serde_json::Error) -> Self {
        AirEasyError::Output(format!("JSON encode error: {}", err))
    }
}

impl From<dialoguer::Error> for AirEasyError {
    fn from(err: dialoguer::Error) -> Self {
        AirEasyError::Prompt(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_exits_with_failure() {
        assert_eq!(AirEasyError::Io(io::Error::other("x")).exit_code(), EXIT_FAILURE);
        assert_eq!(AirEasyError::Config("x".into()).exit_code(), EXIT_FAILURE);
        assert_eq!(AirEasyError::Prompt("x".into()).exit_code(), EXIT_FAILURE);
        assert_eq!(AirEasyError::Output("x".into()).exit_code(), EXIT_FAILURE);
        assert_eq!(EXIT_SUCCESS, 0);
        assert_eq!(EXIT_FAILURE, 1);
    }

    #[test]
    fn test_error_display() {
        let err = AirEasyError::Config("bad toml".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad toml");

        let err = AirEasyError::Prompt("stdin closed".to_string());
        assert_eq!(err.to_string(), "Input error: stdin closed");
    }

    #[test]
    fn test_suggestions() {
        let err = AirEasyError::Prompt("input closed".to_string());
        assert!(err.suggestion().unwrap().contains("input ended early"));

        let err = AirEasyError::Config("bad toml".to_string());
        assert!(err.suggestion().unwrap().contains("config file"));

        assert!(AirEasyError::Output("x".to_string()).suggestion().is_none());
    }

    #[test]
    fn test_io_conversion_keeps_source() {
        use std::error::Error;

        let err: AirEasyError = io::Error::new(io::ErrorKind::UnexpectedEof, "eof").into();
        assert_eq!(err.category(), ErrorCategory::IoError);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_dialoguer_conversion() {
        let err: AirEasyError =
            dialoguer::Error::IO(io::Error::new(io::ErrorKind::BrokenPipe, "closed")).into();
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
        assert_eq!(ErrorCategory::Input.to_string(), "input");
    }
}

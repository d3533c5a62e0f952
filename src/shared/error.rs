use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Automation driving the sync (cron, CI) relies on these values only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Run completed, summary printed
    Success = 0,
    /// Configuration, source document, collaborator or publish failure
    Failure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for errata ingestion and import.
#[derive(Debug, Error)]
pub enum ErrataError {
    #[error("{label} doesn't exist in Katello/Satellite\n\n💡 Hint: Check the repository labels listed under 'repositories' in the configuration file")]
    UnknownRepository { label: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Failed to parse {document}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a complete, well-formed XML document")]
    SourceParse { document: String, details: String },

    #[error("Advisory {advisory} is missing the required attribute '{attribute}'")]
    MissingAttribute { advisory: String, attribute: String },

    /// Raised by the advisory builder before anything is persisted
    #[error("Advisory {id} is incomplete: '{field}' was never set")]
    IncompleteAdvisory { id: String, field: &'static str },

    #[error("Katello API request failed: {endpoint}\nDetails: {details}\n\n💡 Hint: Check the Katello server URL, credentials and network connectivity")]
    Catalog { endpoint: String, details: String },

    #[error("Advisory store operation '{operation}' failed\nDetails: {details}\n\n💡 Hint: Check that the Redis server is reachable")]
    Store { operation: String, details: String },

    #[error("Publishing {advisory_id} failed: {details}")]
    PublishFailed { advisory_id: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

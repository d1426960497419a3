use std::{panic::Location, path::PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

/// Longplay persistence errors with source location tracking.
#[derive(Error, Debug)]
pub enum LongplayError {
    /// Stream ended before a complete segment record was read.
    #[error("Truncated input {location}")]
    TruncatedInput {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Persisted envelope is malformed or shorter than its header claims.
    #[error("Corrupt envelope: {reason} {location}")]
    CorruptEnvelope {
        /// Description of what was wrong with the envelope.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Envelope carries a format version this build cannot read.
    #[error("Unsupported envelope version: {version} {location}")]
    UnsupportedVersion {
        /// Version tag found in the envelope.
        version: u32,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Join script could not be written.
    #[error("Failed to write join script {path:?}: {source} {location}")]
    ScriptWriteFailure {
        /// Path of the script that could not be written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Capture subsystem did not reach the requested state after a toggle.
    #[error("Capture did not reach requested state (active: {expected_active}) {location}")]
    CaptureTransition {
        /// State the capture was asked to reach.
        expected_active: bool,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// IO error while encoding to a stream.
    #[error("IO error: {source} {location}")]
    Io {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

impl From<std::io::Error> for LongplayError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        LongplayError::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Result type alias using [`LongplayError`].
pub type Result<T> = std::result::Result<T, LongplayError>;

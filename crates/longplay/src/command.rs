use crate::{AppError, AppResult};

use std::{panic::Location, path::PathBuf};

use error_location::ErrorLocation;

/// Usage text printed on bad arguments.
pub(crate) const USAGE: &str = "usage: longplay inspect <state-blob>\n       longplay script <state-blob> [output]";

/// Commands accepted on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Decode a saved longplay blob and log its contents.
    Inspect {
        /// Raw component bytes dumped from a save state.
        blob: PathBuf,
    },
    /// Write the join script for a saved longplay blob.
    Script {
        /// Raw component bytes dumped from a save state.
        blob: PathBuf,
        /// Script output, overriding the configured path.
        output: Option<PathBuf>,
    },
}

impl Command {
    /// Parse arguments, excluding the program name.
    #[track_caller]
    pub fn parse<I, S>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
            ["inspect", blob] => Ok(Command::Inspect {
                blob: PathBuf::from(blob),
            }),
            ["script", blob] => Ok(Command::Script {
                blob: PathBuf::from(blob),
                output: None,
            }),
            ["script", blob, output] => Ok(Command::Script {
                blob: PathBuf::from(blob),
                output: Some(PathBuf::from(output)),
            }),
            _ => Err(AppError::UsageError {
                reason: format!("unrecognized arguments {:?}\n{}", args, USAGE),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

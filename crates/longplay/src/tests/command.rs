use crate::{AppError, Command};

use std::path::PathBuf;

/// WHAT: Script command accepts an optional output path
/// WHY: The configured path is only a default
#[test]
#[allow(clippy::unwrap_used)]
fn given_script_with_output_when_parsing_then_output_overrides() {
    // Given/When: script with an explicit output
    let cmd = Command::parse(["script", "state.bin", "out.avs"]).unwrap();

    // Then: Both paths captured
    assert_eq!(
        cmd,
        Command::Script {
            blob: PathBuf::from("state.bin"),
            output: Some(PathBuf::from("out.avs")),
        }
    );
}

/// WHAT: Inspect takes exactly one blob path
/// WHY: Extra arguments signal a typo rather than intent
#[test]
#[allow(clippy::unwrap_used)]
fn given_inspect_when_parsing_then_blob_captured() {
    // Given/When: inspect with one path
    let cmd = Command::parse(["inspect", "state.bin"]).unwrap();

    // Then: Inspect command
    assert_eq!(
        cmd,
        Command::Inspect {
            blob: PathBuf::from("state.bin")
        }
    );
}

/// WHAT: Unknown or missing arguments are usage errors
/// WHY: The user gets the usage text instead of a silent no-op
#[test]
fn given_bad_arguments_when_parsing_then_usage_error() {
    // Given: Several malformed command lines
    let cases: [&[&str]; 3] = [&[], &["inspect"], &["play", "x"]];

    for args in cases {
        // When: Parsing
        let result = Command::parse(args.iter().copied());

        // Then: Usage error
        assert!(matches!(result, Err(AppError::UsageError { .. })));
    }
}

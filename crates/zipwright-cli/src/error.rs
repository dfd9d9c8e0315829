//! Error conversion utilities for CLI.
//!
//! Converts zipwright-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use std::path::Path;
use zipwright_core::ZipError;

/// Converts `ZipError` to a user-friendly anyhow error with context
///
/// Errors caused by the environment rather than the arguments get a hint
/// pointing at the filesystem.
pub fn convert_zip_error(err: ZipError, destination: &Path) -> anyhow::Error {
    let environmental = !err.is_user_error();
    let message = match err {
        ZipError::FileNotFound { path } => format!(
            "Named file '{}' does not exist\n\
             HINT: Check the PATH part of the --file NAME=PATH argument.",
            path.display()
        ),
        ZipError::PatternCompile { pattern, source } => format!(
            "Invalid pattern '{pattern}': {source}\n\
             HINT: Patterns are regular expressions, not globs (use '\\.txt$' instead of '*.txt')."
        ),
        ZipError::Configuration { reason } => {
            format!("Cannot create '{}': {reason}", destination.display())
        }
        ZipError::Io(io_err) => format!(
            "I/O error while creating '{}': {}",
            destination.display(),
            io_err
        ),
    };

    if environmental {
        anyhow!(
            "{message}\n\
             HINT: Check that the sources are readable and the destination directory is writable."
        )
    } else {
        anyhow!(message)
    }
}

/// Adds archive context to a core result
pub fn add_destination_context<T>(
    result: Result<T, ZipError>,
    destination: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_zip_error(e, destination))
}

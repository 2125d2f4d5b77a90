// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

/// Chopper error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Size string is not `<number><optional unit>`
    #[error(
        "cannot parse size '{input}'\n  Use a number optionally followed by a unit, e.g. '100MB', '2G', '512K'."
    )]
    InvalidFormat { input: String },

    /// Size string has a unit suffix that is not recognized
    #[error("unknown size unit '{unit}'\n  Supported units: B, K, KB, M, MB, G, GB, T, TB.")]
    UnknownUnit { unit: String },

    /// Source file to chop does not exist
    #[error("source file not found: {}\n  Check the path and try again.", .0.display())]
    SourceNotFound(PathBuf),

    /// A part file listed for joining does not exist
    #[error("part file not found: {}\n  Make sure all part files are present before joining.", .0.display())]
    PartNotFound(PathBuf),

    /// Directory given for part discovery does not exist
    #[error("directory not found: {}\n  Check the path and try again.", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Discovery found no parts for a base name
    #[error(
        "no part files found for '{base}' in {}\n  Expected files matching '{base}.partNNNN'.",
        .dir.display()
    )]
    NoParts { base: String, dir: PathBuf },

    /// Source is a directory, not a regular file
    #[error("{} is a directory, not a file\n  Only individual files can be chopped.", .0.display())]
    IsDirectory(PathBuf),

    /// Source has zero bytes
    #[error("{} is empty (0 bytes)\n  Nothing to split.", .0.display())]
    EmptyInput(PathBuf),

    /// Invalid argument combination or value
    #[error("{0}")]
    InvalidArgument(String),

    /// Chunk size would need more parts than the naming scheme supports
    #[error(
        "chopping would produce {count} parts, more than the maximum of {max}\n  Use a larger --size."
    )]
    TooManyParts { count: u64, max: u64 },

    /// File I/O error
    #[error(
        "io error: {}: {source}\n  Check that the path is accessible and the disk has free space.",
        .path.display()
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reassembled output does not match the recorded checksum
    #[error(
        "checksum mismatch for {}\n  Expected : {expected}\n  Got      : {actual}\n  The reassembled file has been removed. Ensure all part files are intact and retry.",
        .path.display()
    )]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    /// Configuration file not found or invalid
    #[error("config error: {}{message}", config_location(.path.as_deref()))]
    Config {
        message: String,
        path: Option<PathBuf>,
    },
}

impl Error {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// `"<path>: "` prefix for config errors that know their file.
fn config_location(path: Option<&Path>) -> String {
    path.map(|p| format!("{}: ", p.display())).unwrap_or_default()
}

/// Result type using chopper Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation completed
    Success = 0,
    /// User or I/O error
    Failure = 1,
    /// Reassembled file failed checksum verification
    IntegrityError = 2,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::ChecksumMismatch { .. } => ExitCode::IntegrityError,
            _ => ExitCode::Failure,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

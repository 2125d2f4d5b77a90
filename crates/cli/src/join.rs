// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reassembling parts into the original file.
//!
//! Parts are concatenated in the order given; callers that discover parts
//! from a directory sort them first. After writing, the output is checked
//! against the `<base>.sha256` sidecar found next to the *first part*, so
//! an overridden output path never changes which sidecar is used. On
//! mismatch the output is deleted before the error is returned.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::hash::{DEFAULT_BUFFER_SIZE, Hasher};
use crate::naming::{checksum_name, parse_part_name};
use crate::progress::{NoProgress, Progress};

/// Options for a single join.
#[derive(Debug, Clone)]
pub struct JoinOptions {
    /// Output path. Inferred from the first part's name when `None`.
    pub output: Option<PathBuf>,
    /// Verify the output against the checksum sidecar, if one exists.
    pub verify: bool,
}

impl Default for JoinOptions {
    fn default() -> Self {
        Self {
            output: None,
            verify: true,
        }
    }
}

/// Outcome of the integrity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// Output digest matched the sidecar.
    Verified,
    /// Verification was requested but no sidecar exists.
    NoSidecar,
    /// Verification was disabled.
    Skipped,
}

/// Result of a successful join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinReport {
    pub output: PathBuf,
    pub bytes: u64,
    pub verification: Verification,
}

/// Output path inferred from the first part.
///
/// `dir/name.bin.part0001` becomes `dir/name.bin`. A file that is not a
/// part falls back to its stem.
pub fn infer_output(first_part: &Path) -> PathBuf {
    let dir = first_part.parent().unwrap_or(Path::new(""));
    let name = first_part.file_name().and_then(|n| n.to_str());
    match name.and_then(parse_part_name) {
        Some((base, _)) => dir.join(base),
        None => dir.join(first_part.file_stem().unwrap_or_default()),
    }
}

/// Sidecar path for a join: beside the first part, named after its base.
///
/// Falls back to the output's file name when the first part is not a
/// `.partNNNN` file.
pub fn sidecar_path(first_part: &Path, output: &Path) -> PathBuf {
    let dir = first_part.parent().unwrap_or(Path::new(""));
    let first_name = first_part.file_name().and_then(|n| n.to_str());
    let base = match first_name.and_then(parse_part_name) {
        Some((base, _)) => base.to_string(),
        None => output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    dir.join(checksum_name(&base))
}

/// Total size of all parts, failing on the first one that does not exist.
pub fn total_size<P: AsRef<Path>>(parts: &[P]) -> Result<u64> {
    let mut total = 0u64;
    for part in parts {
        let part = part.as_ref();
        let metadata = match fs::metadata(part) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::PartNotFound(part.to_path_buf()));
            }
            Err(e) => return Err(Error::io(part, e)),
        };
        total += metadata.len();
    }
    Ok(total)
}

/// Sequential part concatenator with optional verification.
#[derive(Debug, Clone, Copy)]
pub struct Joiner {
    buffer_size: usize,
}

impl Default for Joiner {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}

impl Joiner {
    /// Create a joiner with the given copy buffer size (minimum 1).
    pub fn new(buffer_size: usize) -> Self {
        Self {
            buffer_size: buffer_size.max(1),
        }
    }

    /// Concatenate `parts` in order into the output and verify it.
    pub fn join<P: AsRef<Path>>(
        &self,
        parts: &[P],
        options: &JoinOptions,
        progress: &mut dyn Progress,
    ) -> Result<JoinReport> {
        let Some(first) = parts.first().map(AsRef::as_ref) else {
            return Err(Error::InvalidArgument(
                "no part files supplied\n  Pass a directory with --base, or list the .partNNNN files explicitly."
                    .to_string(),
            ));
        };
        let total = total_size(parts)?;

        let output = match &options.output {
            Some(path) => path.clone(),
            None => infer_output(first),
        };
        reject_output_among_parts(&output, parts)?;

        tracing::debug!(
            "joining {} parts ({} bytes) into {}",
            parts.len(),
            total,
            output.display()
        );

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let bytes = self.write_output(parts, &output, total, progress)?;

        let verification = if options.verify {
            self.verify(first, &output)?
        } else {
            Verification::Skipped
        };

        Ok(JoinReport {
            output,
            bytes,
            verification,
        })
    }

    fn write_output<P: AsRef<Path>>(
        &self,
        parts: &[P],
        output: &Path,
        total: u64,
        progress: &mut dyn Progress,
    ) -> Result<u64> {
        let file = File::create(output).map_err(|e| Error::io(output, e))?;
        let mut out = BufWriter::with_capacity(self.buffer_size, file);
        let mut buf = vec![0u8; self.buffer_size];
        let mut done = 0u64;

        for part in parts {
            let part = part.as_ref();
            let mut input = File::open(part).map_err(|e| Error::io(part, e))?;
            loop {
                let n = input.read(&mut buf).map_err(|e| Error::io(part, e))?;
                if n == 0 {
                    break;
                }
                out.write_all(&buf[..n]).map_err(|e| Error::io(output, e))?;
                done += n as u64;
                progress.update(done, total);
            }
            tracing::trace!("appended {}", part.display());
        }

        out.flush().map_err(|e| Error::io(output, e))?;
        Ok(done)
    }

    fn verify(&self, first_part: &Path, output: &Path) -> Result<Verification> {
        let sidecar = sidecar_path(first_part, output);
        if !sidecar.is_file() {
            tracing::debug!(
                "no checksum sidecar at {}, skipping verification",
                sidecar.display()
            );
            return Ok(Verification::NoSidecar);
        }

        let content = fs::read_to_string(&sidecar).map_err(|e| Error::io(&sidecar, e))?;
        let expected = content.split_whitespace().next().unwrap_or_default();
        let actual = Hasher::new(self.buffer_size).digest(output)?;

        if !actual.eq_ignore_ascii_case(expected) {
            tracing::warn!(
                "checksum mismatch for {}: expected {}, got {}",
                output.display(),
                expected,
                actual
            );
            if let Err(e) = fs::remove_file(output) {
                tracing::warn!("failed to remove {}: {}", output.display(), e);
            }
            return Err(Error::ChecksumMismatch {
                path: output.to_path_buf(),
                expected: expected.to_string(),
                actual,
            });
        }

        tracing::debug!("verified {} against {}", output.display(), sidecar.display());
        Ok(Verification::Verified)
    }
}

/// Writing over an input part would truncate it before it is read.
fn reject_output_among_parts<P: AsRef<Path>>(output: &Path, parts: &[P]) -> Result<()> {
    let Ok(output_canon) = fs::canonicalize(output) else {
        // Output does not exist yet, so it cannot be one of the parts.
        return Ok(());
    };
    for part in parts {
        let part = part.as_ref();
        let part_canon = fs::canonicalize(part).map_err(|e| Error::io(part, e))?;
        if part_canon == output_canon {
            return Err(Error::InvalidArgument(format!(
                "output {} is also an input part\n  Choose a different --output path.",
                output.display()
            )));
        }
    }
    Ok(())
}

/// Join with the default buffer size and no progress reporting.
pub fn join<P: AsRef<Path>>(parts: &[P], output: Option<&Path>, verify: bool) -> Result<PathBuf> {
    let options = JoinOptions {
        output: output.map(Path::to_path_buf),
        verify,
    };
    Joiner::default()
        .join(parts, &options, &mut NoProgress)
        .map(|report| report.output)
}

#[cfg(test)]
#[path = "join_tests.rs"]
mod tests;

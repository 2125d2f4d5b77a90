// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Splitting a file into numbered parts.
//!
//! The source is read once, front to back. Every part except possibly the
//! last holds exactly `chunk_size` bytes; parts are written to
//! `<output_dir>/<name>.partNNNN` starting at index 1. With verification
//! enabled a `<name>.sha256` sidecar is written next to the parts.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::hash::{DEFAULT_BUFFER_SIZE, Hasher};
use crate::naming::{MAX_PARTS, checksum_name, file_name_of, part_name};
use crate::progress::{NoProgress, Progress};

/// Options for a single chop.
#[derive(Debug, Clone)]
pub struct ChopOptions {
    /// Directory for parts and sidecar. Defaults to the source's directory.
    pub output_dir: Option<PathBuf>,
    /// Write a `.sha256` sidecar of the source.
    pub verify: bool,
}

impl Default for ChopOptions {
    fn default() -> Self {
        Self {
            output_dir: None,
            verify: true,
        }
    }
}

/// Part layout for a file of `total_bytes` cut into `chunk_size` pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChopPlan {
    pub total_bytes: u64,
    pub chunk_size: u64,
    pub part_count: u64,
}

impl ChopPlan {
    /// Compute the layout. `chunk_size` must be positive.
    pub fn new(total_bytes: u64, chunk_size: u64) -> Result<Self> {
        if chunk_size == 0 {
            return Err(Error::InvalidArgument(format!(
                "chunk size must be a positive number of bytes, got {chunk_size}\n  Pass a size such as --size 100MB."
            )));
        }
        Ok(Self {
            total_bytes,
            chunk_size,
            part_count: total_bytes.div_ceil(chunk_size),
        })
    }

    /// Size of the 1-based part `index`; 0 outside the plan.
    pub fn part_size(&self, index: u64) -> u64 {
        if index == 0 || index > self.part_count {
            0
        } else if index < self.part_count {
            self.chunk_size
        } else {
            self.total_bytes - (self.part_count - 1) * self.chunk_size
        }
    }

    /// Fail when the plan needs more parts than the naming scheme allows.
    pub fn check_limit(&self) -> Result<()> {
        if self.part_count > u64::from(MAX_PARTS) {
            return Err(Error::TooManyParts {
                count: self.part_count,
                max: u64::from(MAX_PARTS),
            });
        }
        Ok(())
    }
}

/// Directory parts are written to: `output_dir`, or the source's parent.
pub fn resolve_output_dir(source: &Path, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => source.parent().map(Path::to_path_buf).unwrap_or_default(),
    }
}

/// Sequential file splitter.
#[derive(Debug, Clone, Copy)]
pub struct Chopper {
    buffer_size: usize,
}

impl Default for Chopper {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}

impl Chopper {
    /// Create a chopper with the given read buffer size (minimum 1).
    pub fn new(buffer_size: usize) -> Self {
        Self {
            buffer_size: buffer_size.max(1),
        }
    }

    /// Validate `source` and `chunk_size` and compute the part layout.
    ///
    /// Checks, in order: the source exists, is not a directory, the chunk
    /// size is positive, the source is not empty, and the part count fits
    /// the 4-digit naming scheme. Nothing is written.
    pub fn inspect(&self, source: &Path, chunk_size: u64) -> Result<ChopPlan> {
        let metadata = match fs::metadata(source) {
            Ok(m) => m,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::SourceNotFound(source.to_path_buf()));
            }
            Err(e) => return Err(Error::io(source, e)),
        };
        if metadata.is_dir() {
            return Err(Error::IsDirectory(source.to_path_buf()));
        }

        let plan = ChopPlan::new(metadata.len(), chunk_size)?;
        if plan.total_bytes == 0 {
            return Err(Error::EmptyInput(source.to_path_buf()));
        }
        plan.check_limit()?;
        Ok(plan)
    }

    /// Split `source` into parts of at most `chunk_size` bytes.
    ///
    /// Returns the part paths in index order. Parts already written stay on
    /// disk if a later read or write fails.
    pub fn chop(
        &self,
        source: &Path,
        chunk_size: u64,
        options: &ChopOptions,
        progress: &mut dyn Progress,
    ) -> Result<Vec<PathBuf>> {
        let plan = self.inspect(source, chunk_size)?;
        let name = file_name_of(source)?;
        let output_dir = resolve_output_dir(source, options.output_dir.as_deref());

        tracing::debug!(
            "chopping {} ({} bytes) into {} parts of {} bytes in {}",
            source.display(),
            plan.total_bytes,
            plan.part_count,
            chunk_size,
            output_dir.display()
        );

        fs::create_dir_all(&output_dir).map_err(|e| Error::io(&output_dir, e))?;

        let file = File::open(source).map_err(|e| Error::io(source, e))?;
        let mut reader = BufReader::with_capacity(self.buffer_size, file);
        let mut parts = Vec::with_capacity(usize::try_from(plan.part_count).unwrap_or(0));
        let mut done = 0u64;
        let mut index = 0u32;

        loop {
            // Only start a part once there is at least one byte for it.
            let at_eof = reader
                .fill_buf()
                .map_err(|e| Error::io(source, e))?
                .is_empty();
            if at_eof {
                break;
            }

            index += 1;
            if index > MAX_PARTS {
                return Err(Error::TooManyParts {
                    count: u64::from(index),
                    max: u64::from(MAX_PARTS),
                });
            }

            let path = output_dir.join(part_name(name, index));
            let written = copy_part(&mut reader, source, &path, chunk_size)?;
            done += written;
            tracing::trace!("wrote {} ({} bytes)", path.display(), written);

            parts.push(path);
            progress.update(done, plan.total_bytes);
        }

        if options.verify {
            write_sidecar(&Hasher::new(self.buffer_size), source, name, &output_dir)?;
        }

        Ok(parts)
    }
}

/// Copy up to `limit` bytes from `reader` into a new file at `path`.
fn copy_part(
    reader: &mut BufReader<File>,
    source: &Path,
    path: &Path,
    limit: u64,
) -> Result<u64> {
    let mut out = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut remaining = limit;

    while remaining > 0 {
        let buf = reader.fill_buf().map_err(|e| Error::io(source, e))?;
        if buf.is_empty() {
            break;
        }
        let n = buf.len().min(usize::try_from(remaining).unwrap_or(usize::MAX));
        out.write_all(&buf[..n]).map_err(|e| Error::io(path, e))?;
        reader.consume(n);
        remaining -= n as u64;
    }

    out.flush().map_err(|e| Error::io(path, e))?;
    Ok(limit - remaining)
}

/// Write `<digest>  <name>\n` to `<output_dir>/<name>.sha256`.
fn write_sidecar(hasher: &Hasher, source: &Path, name: &str, output_dir: &Path) -> Result<PathBuf> {
    let digest = hasher.digest(source)?;
    let path = output_dir.join(checksum_name(name));
    fs::write(&path, format!("{digest}  {name}\n")).map_err(|e| Error::io(&path, e))?;
    tracing::debug!("wrote checksum {} to {}", digest, path.display());
    Ok(path)
}

/// Chop with the default buffer size and no progress reporting.
pub fn chop(
    source: &Path,
    chunk_size: u64,
    output_dir: Option<&Path>,
    verify: bool,
) -> Result<Vec<PathBuf>> {
    let options = ChopOptions {
        output_dir: output_dir.map(Path::to_path_buf),
        verify,
    };
    Chopper::default().chop(source, chunk_size, &options, &mut NoProgress)
}

#[cfg(test)]
#[path = "chop_tests.rs"]
mod tests;

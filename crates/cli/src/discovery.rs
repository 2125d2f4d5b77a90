// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Part and config file discovery.
//!
//! Parts are found by listing a directory for `<base>.partNNNN` names.
//! The config file is found by walking from the current directory up to
//! the git root looking for chopper.toml.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::error::{Error, Result};
use crate::naming::{file_name_of, parse_part_name, part_name};

/// Find all parts of `base_name` in `directory`, sorted by index.
///
/// Only names matching `<base_name>.partNNNN` exactly are returned. Fails
/// when the directory is missing or contains no parts.
pub fn find_parts(directory: &Path, base_name: &str) -> Result<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(Error::DirectoryNotFound(directory.to_path_buf()));
    }

    let entries = fs::read_dir(directory).map_err(|e| Error::io(directory, e))?;
    let mut parts = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(directory, e))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let is_part = matches!(parse_part_name(name), Some((base, _)) if base == base_name);
        if is_part && entry.path().is_file() {
            parts.push(entry.path());
        }
    }

    if parts.is_empty() {
        return Err(Error::NoParts {
            base: base_name.to_string(),
            dir: directory.to_path_buf(),
        });
    }

    // Zero-padded indices make name order equal to numeric order.
    parts.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    tracing::debug!(
        "found {} parts of {} in {}",
        parts.len(),
        base_name,
        directory.display()
    );
    Ok(parts)
}

/// Check that discovered parts are numbered `1..=n` with no gaps.
///
/// A gap fails with [`Error::PartNotFound`] naming the first missing part.
pub fn check_contiguous(parts: &[PathBuf]) -> Result<()> {
    for (position, part) in parts.iter().enumerate() {
        let name = file_name_of(part)?;
        let Some((base, index)) = parse_part_name(name) else {
            return Err(Error::InvalidArgument(format!(
                "{} is not a part file\n  Part files are named <file>.partNNNN.",
                part.display()
            )));
        };

        let expected = u32::try_from(position + 1).unwrap_or(u32::MAX);
        if index < expected {
            return Err(Error::InvalidArgument(format!(
                "{} has index {index}, part indices start at 1",
                part.display()
            )));
        }
        if index > expected {
            let dir = part.parent().map(Path::to_path_buf).unwrap_or_default();
            return Err(Error::PartNotFound(dir.join(part_name(base, expected))));
        }
    }
    Ok(())
}

/// Turn `join` command inputs into an ordered part list.
///
/// - A single directory requires `base` and is searched with [`find_parts`].
/// - A single part file pulls in all its siblings.
/// - Anything else is used verbatim, in the given order.
///
/// Discovered lists are checked with [`check_contiguous`].
pub fn resolve_parts(inputs: &[PathBuf], base: Option<&str>) -> Result<Vec<PathBuf>> {
    let [single] = inputs else {
        if let Some(base) = base {
            tracing::debug!("ignoring --base {} for an explicit part list", base);
        }
        return Ok(inputs.to_vec());
    };

    if single.is_dir() {
        let base = base.ok_or_else(|| {
            Error::InvalidArgument(format!(
                "--base is required when joining from a directory\n  Example: chopper join {} --base archive.tar.gz",
                single.display()
            ))
        })?;
        let parts = find_parts(single, base)?;
        check_contiguous(&parts)?;
        return Ok(parts);
    }

    let discovered_base = single
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(parse_part_name)
        .map(|(base, _)| base.to_string());

    match discovered_base {
        Some(base) => {
            let dir = single.parent().map(Path::to_path_buf).unwrap_or_default();
            let search_dir = if dir.as_os_str().is_empty() {
                PathBuf::from(".")
            } else {
                dir.clone()
            };
            let parts = find_parts(&search_dir, &base)?;
            // Keep paths relative to what the caller typed.
            let parts: Vec<PathBuf> = parts
                .iter()
                .filter_map(|p| p.file_name().map(|n| dir.join(n)))
                .collect();
            check_contiguous(&parts)?;
            Ok(parts)
        }
        None => Ok(vec![single.clone()]),
    }
}

/// Find chopper.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "CHOPPER_CONFIG")
/// 2. Discovery from current directory up to git root
/// 3. None (use defaults)
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            if path.exists() {
                Ok(Some(path.to_path_buf()))
            } else {
                Err(Error::Config {
                    message: "config file not found\n  Check the -C/--config path or CHOPPER_CONFIG."
                        .to_string(),
                    path: Some(path.to_path_buf()),
                })
            }
        }
        None => Ok(find_config(cwd)),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;

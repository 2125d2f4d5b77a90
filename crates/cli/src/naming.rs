// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Part and sidecar file naming.
//!
//! Parts are named `<base>.partNNNN` with a 1-based, 4-digit zero-padded
//! index. The checksum sidecar is `<base>.sha256`.

use std::ffi::OsStr;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Highest index the 4-digit scheme can represent.
pub const MAX_PARTS: u32 = 9999;

/// Regex for part file names, anchored at both ends.
/// Captures: (base_name, index)
#[allow(clippy::expect_used)]
static PART_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\.part([0-9]{4})$").expect("valid regex"));

/// Name of part `index` of `base_name`.
pub fn part_name(base_name: &str, index: u32) -> String {
    debug_assert!((1..=MAX_PARTS).contains(&index));
    format!("{base_name}.part{index:04}")
}

/// Split a part file name into `(base_name, index)`.
///
/// Returns `None` unless the name ends in `.part` followed by exactly four
/// digits with a non-empty base before it.
pub fn parse_part_name(file_name: &str) -> Option<(&str, u32)> {
    let caps = PART_RE.captures(file_name)?;
    let base = caps.get(1)?.as_str();
    let index = caps.get(2)?.as_str().parse().ok()?;
    Some((base, index))
}

/// Name of the checksum sidecar for `base_name`.
pub fn checksum_name(base_name: &str) -> String {
    format!("{base_name}.sha256")
}

/// UTF-8 file name of `path`, or an argument error naming the path.
pub(crate) fn file_name_of(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| {
            Error::InvalidArgument(format!(
                "{} has no usable file name\n  File names must be valid UTF-8.",
                path.display()
            ))
        })
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;

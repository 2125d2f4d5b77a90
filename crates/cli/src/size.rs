// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable byte sizes.
//!
//! Supports formats (case-insensitive, binary multiples of 1024):
//! - `"512"` or `"512B"` → 512 bytes
//! - `"10K"` / `"10KB"` → 10 KiB
//! - `"1.5M"` → 1.5 MiB, truncated to whole bytes
//! - `"2G"`, `"1T"` → GiB, TiB

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

const KIB: u64 = 1024;

/// Recognized unit suffixes and their multipliers.
const UNITS: &[(&str, u64)] = &[
    ("B", 1),
    ("K", KIB),
    ("KB", KIB),
    ("M", KIB.pow(2)),
    ("MB", KIB.pow(2)),
    ("G", KIB.pow(3)),
    ("GB", KIB.pow(3)),
    ("T", KIB.pow(4)),
    ("TB", KIB.pow(4)),
];

/// Display units above bytes, smallest first.
const DISPLAY_UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// Number followed by optional letters.
/// Captures: (number, unit)
#[allow(clippy::expect_used)]
static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+(?:\.[0-9]+)?)\s*([A-Za-z]*)$").expect("valid regex"));

fn unit_multiplier(unit: &str) -> Option<u64> {
    UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, multiplier)| *multiplier)
}

/// Parse a size string into a byte count.
///
/// Surrounding whitespace is ignored and a missing unit means bytes.
/// Fractional values are floored after multiplying.
pub fn parse_size(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    let invalid = || Error::InvalidFormat {
        input: trimmed.to_string(),
    };

    let caps = SIZE_RE.captures(trimmed).ok_or_else(invalid)?;
    let number = &caps[1];
    let unit = match caps[2].to_ascii_uppercase() {
        u if u.is_empty() => "B".to_string(),
        u => u,
    };
    let multiplier = unit_multiplier(&unit).ok_or(Error::UnknownUnit { unit })?;

    // Integers stay exact; only fractional input goes through f64.
    if let Ok(n) = number.parse::<u64>() {
        return n.checked_mul(multiplier).ok_or_else(invalid);
    }

    let n: f64 = number.parse().map_err(|_| invalid())?;
    let bytes = (n * multiplier as f64).floor();
    if !bytes.is_finite() || bytes >= u64::MAX as f64 {
        return Err(invalid());
    }
    Ok(bytes as u64)
}

/// Format a byte count for human-readable output.
///
/// Plain bytes print without decimals ("512 B"). Larger values are floor
/// divided by 1024 until under 1024, then printed with one decimal
/// ("1.0 KB" for 1536). TB is never divided further.
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        return format!("{bytes} B");
    }

    let mut value = bytes / KIB;
    let mut unit = 0;
    while value >= KIB && unit < DISPLAY_UNITS.len() - 1 {
        value /= KIB;
        unit += 1;
    }
    format!("{:.1} {}", value as f64, DISPLAY_UNITS[unit])
}

#[cfg(test)]
#[path = "size_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Value helpers for config parsing.

use std::path::Path;

use crate::error::{Error, Result};
use crate::size::parse_size;

/// Parse a size given as a string ("100MB") or a plain byte count.
pub(super) fn parse_size_value(value: &toml::Value, key: &str, path: &Path) -> Result<u64> {
    match value {
        toml::Value::String(s) => parse_size(s).map_err(|e| Error::Config {
            message: format!("{key}: {e}"),
            path: Some(path.to_path_buf()),
        }),
        toml::Value::Integer(n) => u64::try_from(*n).map_err(|_| Error::Config {
            message: format!("{key}: size must not be negative, got {n}"),
            path: Some(path.to_path_buf()),
        }),
        _ => Err(Error::Config {
            message: format!("{key}: expected a size such as \"100MB\""),
            path: Some(path.to_path_buf()),
        }),
    }
}

/// Parse a boolean flag.
pub(super) fn parse_bool(value: &toml::Value, key: &str, path: &Path) -> Result<bool> {
    value.as_bool().ok_or_else(|| Error::Config {
        message: format!("{key}: expected true or false"),
        path: Some(path.to_path_buf()),
    })
}

/// Warn about unknown configuration key.
pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "chopper: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

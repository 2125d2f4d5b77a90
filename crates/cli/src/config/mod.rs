// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles chopper.toml parsing with version validation and unknown key warnings.
//!
//! ```toml
//! version = 1
//! buffer_size = "4MB"
//!
//! [chop]
//! size = "100MB"
//! verify = true
//!
//! [join]
//! verify = true
//! ```

mod parse;

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::discovery;
use crate::error::{Error, Result};
use crate::hash::DEFAULT_BUFFER_SIZE;
use parse::{parse_bool, parse_size_value, warn_unknown_key};

/// Config file searched for by discovery.
pub const CONFIG_FILE_NAME: &str = "chopper.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "buffer_size", "chop", "join"];

/// Known `[chop]` keys.
const KNOWN_CHOP_KEYS: &[&str] = &["size", "verify"];

/// Known `[join]` keys.
const KNOWN_JOIN_KEYS: &[&str] = &["verify"];

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    buffer_size: Option<toml::Value>,

    #[serde(default)]
    chop: Option<toml::Value>,

    #[serde(default)]
    join: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Block size for streaming copies and hashing.
    pub buffer_size: usize,

    /// `chopper chop` defaults.
    pub chop: ChopConfig,

    /// `chopper join` defaults.
    pub join: JoinConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            chop: ChopConfig::default(),
            join: JoinConfig::default(),
        }
    }
}

/// Defaults for the chop command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChopConfig {
    /// Chunk size used when `--size` is omitted.
    pub size: Option<u64>,

    /// Write the checksum sidecar (default: true).
    pub verify: bool,
}

impl Default for ChopConfig {
    fn default() -> Self {
        Self {
            size: None,
            verify: true,
        }
    }
}

/// Defaults for the join command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinConfig {
    /// Verify against the sidecar (default: true).
    pub verify: bool,
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self { verify: true }
    }
}

/// Load config with warnings for unknown keys printed to stderr.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (config, unknown_keys) = parse(&content, path)?;
    for key in &unknown_keys {
        warn_unknown_key(path, key);
    }
    Ok(config)
}

/// Resolve and load the config for a command, or defaults when none exists.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    match discovery::resolve_config(explicit, cwd)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            load_with_warnings(&path)
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Parse config content, returning it with the unknown keys it contained.
pub fn parse(content: &str, path: &Path) -> Result<(Config, Vec<String>)> {
    let config_error = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string()))?;

    let version = flexible
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string()))?;
    if version != SUPPORTED_VERSION {
        return Err(config_error(format!(
            "unsupported config version {} (supported: {})\n  Upgrade chopper to use this config.",
            version, SUPPORTED_VERSION
        )));
    }

    let mut unknown_keys: Vec<String> = flexible
        .unknown
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();

    let mut config = Config::default();

    if let Some(value) = &flexible.buffer_size {
        let size = parse_size_value(value, "buffer_size", path)?;
        if size == 0 {
            return Err(config_error("buffer_size must be positive".to_string()));
        }
        config.buffer_size = usize::try_from(size)
            .map_err(|_| config_error(format!("buffer_size {size} is too large")))?;
    }

    match &flexible.chop {
        Some(toml::Value::Table(t)) => {
            if let Some(value) = t.get("size") {
                config.chop.size = Some(parse_size_value(value, "chop.size", path)?);
            }
            if let Some(value) = t.get("verify") {
                config.chop.verify = parse_bool(value, "chop.verify", path)?;
            }
            for key in t.keys() {
                if !KNOWN_CHOP_KEYS.contains(&key.as_str()) {
                    unknown_keys.push(format!("chop.{}", key));
                }
            }
        }
        Some(_) => return Err(config_error("chop must be a table".to_string())),
        None => {}
    }

    match &flexible.join {
        Some(toml::Value::Table(t)) => {
            if let Some(value) = t.get("verify") {
                config.join.verify = parse_bool(value, "join.verify", path)?;
            }
            for key in t.keys() {
                if !KNOWN_JOIN_KEYS.contains(&key.as_str()) {
                    unknown_keys.push(format!("join.{}", key));
                }
            }
        }
        Some(_) => return Err(config_error("join must be a table".to_string())),
        None => {}
    }

    Ok((config, unknown_keys))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

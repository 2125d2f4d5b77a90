// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SHA-256 digests of whole files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Default block size for streaming reads and copies (4 MiB).
pub const DEFAULT_BUFFER_SIZE: usize = 4 * 1024 * 1024;

/// Streams files through a SHA-256 accumulator in fixed-size blocks.
#[derive(Debug, Clone, Copy)]
pub struct Hasher {
    block_size: usize,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE)
    }
}

impl Hasher {
    /// Create a hasher reading `block_size` bytes at a time (minimum 1).
    pub fn new(block_size: usize) -> Self {
        Self {
            block_size: block_size.max(1),
        }
    }

    /// Lowercase hex SHA-256 digest of the file at `path`.
    pub fn digest(&self, path: &Path) -> Result<String> {
        let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
        let mut hasher = Sha256::new();
        let mut buf = vec![0u8; self.block_size];
        loop {
            let n = file.read(&mut buf).map_err(|e| Error::io(path, e))?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }
        Ok(hex::encode(hasher.finalize()))
    }
}

/// Digest a file with the default block size.
pub fn digest_file(path: &Path) -> Result<String> {
    Hasher::default().digest(path)
}

#[cfg(test)]
#[path = "hash_tests.rs"]
mod tests;

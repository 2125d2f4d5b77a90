// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Progress reporting for chop and join.
//!
//! Operations call [`Progress::update`] synchronously after each write with
//! the cumulative byte count and the total. Any `FnMut(u64, u64)` closure is
//! a `Progress`; [`NoProgress`] is the do-nothing default.

use std::io::{IsTerminal, Write};

/// Receives `(bytes_done, total_bytes)` after each write.
pub trait Progress {
    fn update(&mut self, done: u64, total: u64);
}

impl<F: FnMut(u64, u64)> Progress for F {
    fn update(&mut self, done: u64, total: u64) {
        self(done, total)
    }
}

/// Progress sink that ignores every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn update(&mut self, _done: u64, _total: u64) {}
}

/// Single rewritten percentage line on stderr.
///
/// Draws nothing unless stderr is a terminal. Finishes the line with a
/// newline once `done` reaches `total`.
pub struct ProgressLine {
    label: String,
    enabled: bool,
    finished: bool,
}

impl ProgressLine {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: std::io::stderr().is_terminal(),
            finished: false,
        }
    }
}

impl Progress for ProgressLine {
    fn update(&mut self, done: u64, total: u64) {
        if !self.enabled || self.finished {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        // Progress output is best effort; a closed stderr must not abort the copy.
        let _ = write!(stderr, "\r{}: {:.1}%", self.label, percent(done, total));
        if done >= total {
            let _ = writeln!(stderr);
            self.finished = true;
        }
        let _ = stderr.flush();
    }
}

/// Percentage of `total` covered by `done`; 0 when `total` is 0.
pub fn percent(done: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        done as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;

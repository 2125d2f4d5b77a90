// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Split files into numbered parts and join them back with SHA-256
//! verification.

pub mod chop;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod hash;
pub mod join;
pub mod naming;
pub mod progress;
pub mod size;

pub use chop::{ChopOptions, ChopPlan, Chopper, chop};
pub use cli::{ChopArgs, Cli, Command, JoinArgs};
pub use config::Config;
pub use discovery::find_parts;
pub use error::{Error, ExitCode, Result};
pub use hash::{DEFAULT_BUFFER_SIZE, Hasher, digest_file};
pub use join::{JoinOptions, JoinReport, Joiner, Verification, join};
pub use naming::{MAX_PARTS, checksum_name, parse_part_name, part_name};
pub use progress::{NoProgress, Progress, ProgressLine};
pub use size::{format_size, parse_size};

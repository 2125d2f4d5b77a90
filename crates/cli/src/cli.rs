// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

const AFTER_HELP: &str = "\
Examples:
  chopper chop big.iso --size 700MB            Split into 700 MB pieces
  chopper chop big.iso --size 700MB --dry-run  Preview the parts
  chopper join big.iso.part0001                Rejoin from the first part
  chopper join parts/ --base big.iso           Rejoin from a directory

Size units:
  B        bytes
  K / KB   kibibytes (1024 B)
  M / MB   mebibytes (1024 KB)
  G / GB   gibibytes (1024 MB)
  T / TB   tebibytes (1024 GB)

Exit codes:
  0   success
  1   user error (bad arguments, file not found, ...)
  2   integrity error (checksum mismatch)";

/// Split large files into numbered parts and join them back
#[derive(Parser)]
#[command(name = "chopper")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "CHOPPER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Split a file into smaller pieces
    #[command(after_help = "Each piece is written as FILE.partNNNN together with a FILE.sha256 checksum.")]
    Chop(ChopArgs),
    /// Reassemble pieces back into the original file
    #[command(
        after_help = "PART may be a single .partNNNN file (siblings are found automatically),\na directory together with --base, or an explicit list of parts in order."
    )]
    Join(JoinArgs),
}

#[derive(clap::Args)]
pub struct ChopArgs {
    /// File to split
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Maximum size of each piece (e.g. 100MB, 700K, 2G)
    #[arg(short, long, value_name = "SIZE")]
    pub size: Option<String>,

    /// Directory for the pieces (default: same directory as FILE)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip writing the SHA-256 checksum file
    #[arg(long)]
    pub no_verify: bool,

    /// Show what would be done without writing any files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(clap::Args)]
pub struct JoinArgs {
    /// Part files, or a single directory
    #[arg(value_name = "PART", required = true)]
    pub parts: Vec<PathBuf>,

    /// Reassembled output file (default: inferred from the part name)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Original file name to look for when PART is a directory
    #[arg(short, long, value_name = "NAME")]
    pub base: Option<String>,

    /// Skip SHA-256 verification after reassembly
    #[arg(long)]
    pub no_verify: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Join command implementation.

use std::io::Write;

use termcolor::{StandardStream, WriteColor};

use chopper::cli::JoinArgs;
use chopper::color::{resolve_color, scheme};
use chopper::config::Config;
use chopper::discovery::resolve_parts;
use chopper::error::ExitCode;
use chopper::join::{JoinOptions, Joiner, Verification, total_size};
use chopper::progress::{NoProgress, Progress, ProgressLine};
use chopper::size::format_size;

use crate::cmd_chop::write_path;

/// Run the join command.
pub fn run(args: &JoinArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let parts = resolve_parts(&args.parts, args.base.as_deref())?;
    let total = total_size(&parts)?;
    let verify = !args.no_verify && config.join.verify;

    let mut stdout = StandardStream::stdout(resolve_color());

    if !args.quiet {
        let output = match &args.output {
            Some(path) => path.display().to_string(),
            None => "(inferred from part name)".to_string(),
        };
        let rows = [
            ("Parts", parts.len().to_string()),
            ("Total size", format_size(total)),
            ("Output", output),
        ];
        for (label, value) in rows {
            write!(stdout, "  ")?;
            stdout.set_color(&scheme::label())?;
            write!(stdout, "{label:<10}")?;
            stdout.reset()?;
            writeln!(stdout, " : {value}")?;
        }
    }

    let mut progress: Box<dyn Progress> = if args.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressLine::new("Joining"))
    };
    let options = JoinOptions {
        output: args.output.clone(),
        verify,
    };
    let report = Joiner::new(config.buffer_size).join(&parts, &options, progress.as_mut())?;

    if !args.quiet {
        writeln!(stdout)?;
        write!(stdout, "Reassembled file: ")?;
        write_path(&mut stdout, &report.output)?;
        writeln!(stdout, "  ({})", format_size(report.bytes))?;

        match report.verification {
            Verification::Verified => {
                stdout.set_color(&scheme::pass())?;
                writeln!(stdout, "  Integrity check passed (SHA-256)")?;
                stdout.reset()?;
            }
            Verification::NoSidecar => {
                stdout.set_color(&scheme::warn())?;
                writeln!(stdout, "  No checksum file found, integrity not verified")?;
                stdout.reset()?;
            }
            Verification::Skipped => {}
        }
    }

    Ok(ExitCode::Success)
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Chop command implementation.

use std::io::Write;
use std::path::Path;

use termcolor::{StandardStream, WriteColor};

use chopper::chop::{ChopOptions, ChopPlan, Chopper, resolve_output_dir};
use chopper::cli::ChopArgs;
use chopper::color::{resolve_color, scheme};
use chopper::config::Config;
use chopper::error::{Error, ExitCode};
use chopper::naming::{checksum_name, part_name};
use chopper::progress::{NoProgress, Progress, ProgressLine};
use chopper::size::{format_size, parse_size};

/// Run the chop command.
pub fn run(args: &ChopArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let chunk_size = match (&args.size, config.chop.size) {
        (Some(text), _) => parse_size(text)?,
        (None, Some(size)) => size,
        (None, None) => {
            return Err(Error::InvalidArgument(
                "--size is required\n  Pass --size (e.g. --size 100MB) or set chop.size in chopper.toml."
                    .to_string(),
            )
            .into());
        }
    };
    let verify = !args.no_verify && config.chop.verify;

    let chopper = Chopper::new(config.buffer_size);
    let plan = chopper.inspect(&args.file, chunk_size)?;

    let output_dir = resolve_output_dir(&args.file, args.output_dir.as_deref());
    let shown_dir = if output_dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        output_dir.as_path()
    };
    let name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut stdout = StandardStream::stdout(resolve_color());

    if !args.quiet || args.dry_run {
        write_summary(&mut stdout, &args.file, &plan, shown_dir)?;
    }

    if args.dry_run {
        writeln!(stdout)?;
        writeln!(stdout, "Dry-run mode, no files written.")?;
        for index in 1..=plan.part_count {
            write!(stdout, "  Would create: ")?;
            write_path(&mut stdout, &shown_dir.join(part_name(&name, index as u32)))?;
            writeln!(stdout, "  ({})", format_size(plan.part_size(index)))?;
        }
        return Ok(ExitCode::Success);
    }

    let mut progress: Box<dyn Progress> = if args.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressLine::new(format!("Chopping '{name}'")))
    };
    let options = ChopOptions {
        output_dir: args.output_dir.clone(),
        verify,
    };
    let parts = chopper.chop(&args.file, chunk_size, &options, progress.as_mut())?;

    if !args.quiet {
        writeln!(stdout)?;
        writeln!(stdout, "Created {} part(s):", parts.len())?;
        for (index, part) in (1u64..).zip(&parts) {
            write!(stdout, "  ")?;
            write_path(&mut stdout, part)?;
            writeln!(stdout, "  ({})", format_size(plan.part_size(index)))?;
        }
        if verify {
            write!(stdout, "  ")?;
            write_path(&mut stdout, &output_dir.join(checksum_name(&name)))?;
            writeln!(stdout, "  (SHA-256 checksum)")?;
        }
    }

    Ok(ExitCode::Success)
}

fn write_summary(
    stdout: &mut StandardStream,
    source: &Path,
    plan: &ChopPlan,
    output_dir: &Path,
) -> std::io::Result<()> {
    let rows = [
        (
            "Source",
            format!("{}  ({})", source.display(), format_size(plan.total_bytes)),
        ),
        ("Chunk size", format_size(plan.chunk_size)),
        ("Parts", plan.part_count.to_string()),
        ("Output dir", output_dir.display().to_string()),
    ];
    for (label, value) in rows {
        write!(stdout, "  ")?;
        stdout.set_color(&scheme::label())?;
        write!(stdout, "{label:<10}")?;
        stdout.reset()?;
        writeln!(stdout, " : {value}")?;
    }
    Ok(())
}

pub(crate) fn write_path(stdout: &mut StandardStream, path: &Path) -> std::io::Result<()> {
    stdout.set_color(&scheme::path())?;
    write!(stdout, "{}", path.display())?;
    stdout.reset()
}

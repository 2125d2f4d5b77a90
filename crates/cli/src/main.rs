// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Chopper CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use chopper::cli::{Cli, Command};
use chopper::config;
use chopper::error::ExitCode;

mod cmd_chop;
mod cmd_join;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("CHOPPER_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("chopper: {}", e);
            match e.downcast_ref::<chopper::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::Failure,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    // Usage errors exit 1; 2 is reserved for integrity failures.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            e.print()?;
            return Ok(ExitCode::Failure);
        }
        Err(e) => {
            e.print()?;
            return Ok(ExitCode::Success);
        }
    };

    let Some(command) = &cli.command else {
        // Show help for bare invocation
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::Success);
    };

    let cwd = std::env::current_dir()?;
    let config = config::resolve(cli.config.as_deref(), &cwd)?;
    tracing::trace!("resolved config: {:?}", config);

    match command {
        Command::Chop(args) => cmd_chop::run(args, &config),
        Command::Join(args) => cmd_join::run(args, &config),
    }
}

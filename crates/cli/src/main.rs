// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Culprit CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use culprit::cli::{Cli, Command};
use culprit::error::ExitCode;

mod cmd_blame;
mod cmd_report;

fn init_logging() {
    let filter = EnvFilter::try_from_env("CULPRIT_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

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
            eprintln!("culprit: {}", e);
            match e.downcast_ref::<culprit::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Authors(args)) => cmd_blame::authors(&cli, args),
        Some(Command::Blame(args)) => cmd_blame::blame(&cli, args),
        Some(Command::Report(args)) => cmd_report::report(&cli, args),
        Some(Command::Diff(args)) => cmd_report::diff(&cli, args),
        Some(Command::Violations(args)) => cmd_report::violations(&cli, args),
    }
}

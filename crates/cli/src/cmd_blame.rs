// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Attribution commands: authors, blame.

use std::io::Write;

use termcolor::StandardStream;

use culprit::cli::{BlameArgs, Cli, FileArgs, OutputFormat};
use culprit::color::resolve_color;
use culprit::error::ExitCode;
use culprit::output::json::{AuthorsOutput, BlameOutput, JsonFormatter};
use culprit::output::text::TextFormatter;
use culprit::runner::open_target;

/// Run the authors command.
pub fn authors(cli: &Cli, args: &FileArgs) -> anyhow::Result<ExitCode> {
    let mut target = open_target(&args.file, cli.config.as_deref(), cli.severity)?;
    let authors = target.distinct_authors()?;

    match cli.output {
        OutputFormat::Text => {
            let stdout = StandardStream::stdout(resolve_color(cli.color, cli.no_color));
            let mut formatter = TextFormatter::new(stdout.lock(), target.file_path());
            formatter.write_authors(&authors)?;
            formatter.into_inner().flush()?;
        }
        OutputFormat::Json => {
            let output = AuthorsOutput {
                file: target.file_path(),
                authors: &authors,
            };
            JsonFormatter::new(std::io::stdout().lock()).write(&output)?;
        }
    }
    Ok(ExitCode::Success)
}

/// Run the blame command.
pub fn blame(cli: &Cli, args: &BlameArgs) -> anyhow::Result<ExitCode> {
    let mut target = open_target(&args.file, cli.config.as_deref(), cli.severity)?;
    let records = match args.line {
        Some(line) => vec![target.attribution_record(line)?.clone()],
        None => target.attribution_records()?.to_vec(),
    };

    match cli.output {
        OutputFormat::Text => {
            let stdout = StandardStream::stdout(resolve_color(cli.color, cli.no_color));
            let mut formatter = TextFormatter::new(stdout.lock(), target.file_path());
            for record in &records {
                formatter.write_record(record)?;
            }
            formatter.into_inner().flush()?;
        }
        OutputFormat::Json => {
            let output = BlameOutput {
                file: target.file_path(),
                lines: &records,
            };
            JsonFormatter::new(std::io::stdout().lock()).write(&output)?;
        }
    }
    Ok(ExitCode::Success)
}

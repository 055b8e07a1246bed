// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Violation reporting commands: report, diff, violations.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use termcolor::StandardStream;

use culprit::cli::{Cli, DiffArgs, FileArgs, OutputFormat, ReportArgs};
use culprit::color::resolve_color;
use culprit::error::ExitCode;
use culprit::filter::{DiffRange, ReportFilter};
use culprit::output::json::{JsonFormatter, ViolationsOutput};
use culprit::output::text::TextFormatter;
use culprit::runner::open_target;
use culprit::violation::{AttributedViolation, Violation};

/// Run the report command.
pub fn report(cli: &Cli, args: &ReportArgs) -> anyhow::Result<ExitCode> {
    let mut filter = ReportFilter::new(args.author.as_str());
    if let Some(since) = args.since {
        filter = filter.since(since);
    }
    filter.validate()?;

    let mut target = open_target(&args.file, cli.config.as_deref(), cli.severity)?;
    let violations = target.report_violations(&filter)?;
    write_violations(cli, target.file_path(), &violations)
}

/// Run the diff command.
pub fn diff(cli: &Cli, args: &DiffArgs) -> anyhow::Result<ExitCode> {
    let range = DiffRange::new(args.from.as_str(), args.to.as_str());
    range.validate()?;

    let mut target = open_target(&args.file, cli.config.as_deref(), cli.severity)?;
    let violations = target.diff_violations(&range)?;
    write_violations(cli, target.file_path(), &violations)
}

/// Run the violations command.
pub fn violations(cli: &Cli, args: &FileArgs) -> anyhow::Result<ExitCode> {
    let mut target = open_target(&args.file, cli.config.as_deref(), cli.severity)?;
    let attributed = target.attributed_violations()?;
    write_violations(cli, target.file_path(), &attributed)?;
    Ok(ExitCode::Success)
}

/// A violation that knows how to render itself as one text entry.
trait TextEntry: Serialize {
    fn write_text<W: termcolor::WriteColor>(
        &self,
        formatter: &mut TextFormatter<W>,
    ) -> std::io::Result<()>;
}

impl TextEntry for Violation {
    fn write_text<W: termcolor::WriteColor>(
        &self,
        formatter: &mut TextFormatter<W>,
    ) -> std::io::Result<()> {
        formatter.write_violation(self)
    }
}

impl TextEntry for AttributedViolation {
    fn write_text<W: termcolor::WriteColor>(
        &self,
        formatter: &mut TextFormatter<W>,
    ) -> std::io::Result<()> {
        formatter.write_attributed(self)
    }
}

fn write_violations<T: TextEntry>(
    cli: &Cli,
    file: &Path,
    violations: &[T],
) -> anyhow::Result<ExitCode> {
    match cli.output {
        OutputFormat::Text => {
            let stdout = StandardStream::stdout(resolve_color(cli.color, cli.no_color));
            let mut formatter = TextFormatter::new(stdout.lock(), file);
            for v in violations {
                v.write_text(&mut formatter)?;
            }
            formatter.write_summary(violations.len())?;
            formatter.into_inner().flush()?;
        }
        OutputFormat::Json => {
            let stdout = std::io::stdout();
            let mut formatter = JsonFormatter::new(stdout.lock());
            formatter.write(&ViolationsOutput::new(file, violations))?;
        }
    }

    Ok(if violations.is_empty() {
        ExitCode::Success
    } else {
        ExitCode::ViolationsFound
    })
}

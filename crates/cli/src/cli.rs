// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate};
use clap::{Parser, Subcommand};

use crate::severity::Severity;

/// Attribute static-analysis violations to the authors who last touched each line
#[derive(Parser)]
#[command(name = "culprit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "CULPRIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Analyzer threshold: gentle, stern, harsh, cruel, brutal, or 5-1
    #[arg(short, long, global = true, value_parser = parse_severity)]
    pub severity: Option<Severity>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long, global = true)]
    pub color: bool,

    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List distinct authors of a file
    Authors(FileArgs),
    /// Report violations on lines last touched by an author
    Report(ReportArgs),
    /// Report violations on lines changed between two revisions
    Diff(DiffArgs),
    /// List every violation with its attribution
    Violations(FileArgs),
    /// Show per-line attribution
    Blame(BlameArgs),
}

#[derive(clap::Args)]
pub struct FileArgs {
    /// File to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// File to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Author identifier (email) to report on
    #[arg(short, long, value_name = "ID")]
    pub author: String,

    /// Skip lines authored before this time (epoch seconds, YYYY-MM-DD, or RFC 3339)
    #[arg(long, value_name = "WHEN", value_parser = parse_since)]
    pub since: Option<i64>,
}

#[derive(clap::Args)]
pub struct DiffArgs {
    /// File to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Base revision
    #[arg(long, value_name = "REV")]
    pub from: String,

    /// Target revision
    #[arg(long, value_name = "REV")]
    pub to: String,
}

#[derive(clap::Args)]
pub struct BlameArgs {
    /// File to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Show only this line
    #[arg(short, long, value_name = "N")]
    pub line: Option<u32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn parse_severity(s: &str) -> Result<Severity, String> {
    s.parse().map_err(|e: crate::Error| e.to_string())
}

/// Parse a `--since` value into seconds since the Unix epoch.
pub fn parse_since(s: &str) -> Result<i64, String> {
    let s = s.trim();
    if let Ok(seconds) = s.parse::<i64>() {
        return Ok(seconds);
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .ok_or_else(|| format!("invalid date: {s}"));
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.timestamp())
        .map_err(|_| format!("invalid time `{s}` (expected epoch seconds, YYYY-MM-DD, or RFC 3339)"))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

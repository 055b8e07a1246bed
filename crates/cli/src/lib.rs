// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Culprit: attribute static-analysis violations to the authors of each line.
//!
//! An [`AnalysisTarget`] pairs one file with an [`Analyzer`] and a
//! [`LineAttribution`] backend. Critique and blame run together once per
//! epoch; author, time, and diff filters operate on the cached results.

pub mod analyzer;
pub mod attribution;
pub mod cache;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod filter;
pub mod git;
pub mod output;
pub mod runner;
pub mod severity;
pub mod target;
pub mod violation;

pub use analyzer::{Analyzer, PatternAnalyzer, Rule};
pub use attribution::{AttributionRecord, Hunk, LineAttribution};
pub use cache::{AnalysisCache, AnalysisResult, Epoch};
pub use cli::{Cli, Command, OutputFormat};
pub use error::{Error, ExitCode, Result};
pub use filter::{ChangedLines, DiffRange, ReportFilter};
pub use git::GitAttribution;
pub use severity::Severity;
pub use target::{AnalysisTarget, TargetOptions};
pub use violation::{AttributedViolation, Violation};

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static analyzer seam.
//!
//! The correlation engine treats an [`Analyzer`] as a black box: given a
//! file and an optional threshold it returns violations, unordered, each
//! tagged with a line number.

use std::path::Path;

use crate::severity::Severity;
use crate::violation::Violation;

pub mod matcher;
pub mod pattern;

pub use matcher::{LineMatcher, MatcherError};
pub use pattern::{PatternAnalyzer, Rule, RuleError};

/// A line-level static analyzer.
///
/// Object-safe to allow dynamic dispatch via `Box<dyn Analyzer>`.
pub trait Analyzer: Send + Sync {
    /// Short identifier used in error messages (e.g., "pattern").
    fn name(&self) -> &'static str;

    /// Analyze one file.
    ///
    /// `None` means the analyzer's own default policy.
    fn critique(&self, file: &Path, severity: Option<Severity>) -> anyhow::Result<Vec<Violation>>;
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Violation filters.
//!
//! Joins cached violations to attribution records by line number, or
//! narrows them to the lines a commit range touched. Both filters keep the
//! analyzer's output order.

use serde::Deserialize;
use tracing::{debug, trace};

use crate::attribution::Hunk;
use crate::cache::{AnalysisCache, AnalysisResult};
use crate::error::{Error, Result};
use crate::violation::{AttributedViolation, Violation};

/// Author/time filter for [`report_violations`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportFilter {
    /// Author identifier to match exactly.
    pub author: String,
    /// Earliest author time to keep, inclusive (seconds since epoch).
    #[serde(default)]
    pub since: Option<i64>,
}

impl ReportFilter {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            since: None,
        }
    }

    pub fn since(mut self, timestamp: i64) -> Self {
        self.since = Some(timestamp);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.author.trim().is_empty() {
            return Err(Error::Validation("author must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Revision range for [`diff_violations`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiffRange {
    pub from: String,
    pub to: String,
}

impl DiffRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("from", &self.from), ("to", &self.to)] {
            if value.trim().is_empty() {
                return Err(Error::Validation(format!(
                    "{name} revision must not be empty"
                )));
            }
        }
        Ok(())
    }
}

/// Destination line numbers touched by a set of hunks, sorted and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangedLines(Vec<u32>);

impl ChangedLines {
    pub fn from_hunks(hunks: &[Hunk]) -> Self {
        let mut lines: Vec<u32> = hunks.iter().flat_map(|h| h.lines.iter().copied()).collect();
        lines.sort_unstable();
        lines.dedup();
        Self(lines)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, line: u32) -> bool {
        self.0.binary_search(&line).is_ok()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Violations on a changed line, in input order.
    pub fn retain<'a>(&self, violations: impl IntoIterator<Item = &'a Violation>) -> Vec<Violation> {
        violations
            .into_iter()
            .filter(|v| self.contains(v.line))
            .cloned()
            .collect()
    }
}

/// Violations on lines last touched by `filter.author`, optionally no
/// earlier than `filter.since`.
pub fn report_violations(cache: &mut AnalysisCache, filter: &ReportFilter) -> Result<Vec<Violation>> {
    filter.validate()?;
    let result = cache.ensure_analyzed()?;

    let mut kept = Vec::new();
    for violation in result.violations().iter() {
        let record = result.record(violation.line)?;
        if record.author != filter.author {
            continue;
        }
        if let Some(since) = filter.since
            && record.authored_at < since
        {
            continue;
        }
        kept.push(violation.clone());
    }

    debug!(author = %filter.author, kept = kept.len(), "author filter");
    Ok(kept)
}

/// Violations on destination lines changed between two revisions.
///
/// An empty change set returns before any analysis runs.
pub fn diff_violations(cache: &mut AnalysisCache, range: &DiffRange) -> Result<Vec<Violation>> {
    range.validate()?;
    let changed = cache.changed_lines(&range.from, &range.to)?;
    if changed.is_empty() {
        debug!(from = %range.from, to = %range.to, "no changed lines");
        return Ok(Vec::new());
    }

    trace!(lines = ?changed.as_slice(), "changed lines");

    let result = cache.ensure_analyzed()?;
    let kept = changed.retain(result.violations().iter());
    debug!(changed = changed.len(), kept = kept.len(), "diff filter");
    Ok(kept)
}

/// Every violation joined to its attribution record, in input order.
pub fn attributed_violations(cache: &mut AnalysisCache) -> Result<Vec<AttributedViolation>> {
    let result: &AnalysisResult = cache.ensure_analyzed()?;
    result
        .violations()
        .iter()
        .map(|v| Ok(AttributedViolation::new(v.clone(), result.record(v.line)?)))
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

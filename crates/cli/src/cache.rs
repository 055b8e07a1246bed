// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-target analysis cache.
//!
//! Runs the analyzer and the attribution backend at most once per epoch
//! and hands out the stored results behind `Arc`, so repeated reads within
//! an epoch return the same allocation.
//!
//! ```text
//!   Unanalyzed ──ensure_analyzed──▶ Analyzed ──invalidate──▶ Invalidated
//!                                      ▲                         │
//!                                      └─────ensure_analyzed─────┘
//! ```
//!
//! A failed analysis leaves the epoch untouched; the next access retries
//! both collaborators from scratch.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::analyzer::Analyzer;
use crate::attribution::{AttributionRecord, LineAttribution};
use crate::error::{Error, Result};
use crate::filter::ChangedLines;
use crate::severity::Severity;
use crate::violation::Violation;

/// Results of one completed analysis epoch.
#[derive(Debug)]
pub struct AnalysisResult {
    root: PathBuf,
    attribution: Arc<[AttributionRecord]>,
    violations: Arc<[Violation]>,
    authors: Option<Arc<BTreeSet<String>>>,
}

impl AnalysisResult {
    pub fn new(
        root: PathBuf,
        attribution: Vec<AttributionRecord>,
        violations: Vec<Violation>,
    ) -> Self {
        Self {
            root,
            attribution: attribution.into(),
            violations: violations.into(),
            authors: None,
        }
    }

    /// Repository root the epoch was analyzed against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn attribution(&self) -> &Arc<[AttributionRecord]> {
        &self.attribution
    }

    pub fn violations(&self) -> &Arc<[Violation]> {
        &self.violations
    }

    /// Record for a 1-based line number.
    pub fn record(&self, line: u32) -> Result<&AttributionRecord> {
        let out_of_range = || Error::OutOfRange {
            line,
            count: self.attribution.len(),
        };
        let index = usize::try_from(line)
            .ok()
            .and_then(|l| l.checked_sub(1))
            .ok_or_else(out_of_range)?;
        self.attribution.get(index).ok_or_else(out_of_range)
    }

    /// Distinct author identifiers, computed on first request.
    pub fn authors(&mut self) -> Arc<BTreeSet<String>> {
        let attribution = &self.attribution;
        Arc::clone(self.authors.get_or_insert_with(|| {
            Arc::new(attribution.iter().map(|r| r.author.clone()).collect())
        }))
    }
}

/// Analysis state of a target.
#[derive(Debug)]
pub enum Epoch {
    /// Nothing computed yet.
    Unanalyzed,
    /// Results available for the current epoch.
    Analyzed(AnalysisResult),
    /// Previous results discarded; next access re-analyzes.
    Invalidated,
}

impl Epoch {
    pub fn is_analyzed(&self) -> bool {
        matches!(self, Epoch::Analyzed(_))
    }
}

/// Lazy, memoized analysis of a single file.
pub struct AnalysisCache {
    file: PathBuf,
    severity: Option<Severity>,
    analyzer: Box<dyn Analyzer>,
    attribution: Box<dyn LineAttribution>,
    epoch: Epoch,
}

impl AnalysisCache {
    pub fn new(
        file: PathBuf,
        severity: Option<Severity>,
        analyzer: Box<dyn Analyzer>,
        attribution: Box<dyn LineAttribution>,
    ) -> Self {
        Self {
            file,
            severity,
            analyzer,
            attribution,
            epoch: Epoch::Unanalyzed,
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    pub fn epoch(&self) -> &Epoch {
        &self.epoch
    }

    /// Run both collaborators unless this epoch already has results.
    pub fn ensure_analyzed(&mut self) -> Result<&mut AnalysisResult> {
        if !self.epoch.is_analyzed() {
            let result = self.analyze()?;
            self.epoch = Epoch::Analyzed(result);
        }
        match &mut self.epoch {
            Epoch::Analyzed(result) => Ok(result),
            Epoch::Unanalyzed | Epoch::Invalidated => {
                Err(Error::Internal("analysis epoch not committed".to_string()))
            }
        }
    }

    fn analyze(&self) -> Result<AnalysisResult> {
        debug!(file = %self.file.display(), "analyzing");
        let root = self.repository_root()?;

        let file = self.file.as_path();
        let severity = self.severity;
        let analyzer = self.analyzer.as_ref();
        let attribution = self.attribution.as_ref();
        let (records, violations) = rayon::join(
            || attribution.blame(&root, file),
            || analyzer.critique(file, severity),
        );
        let records = records.map_err(|e| Error::collaborator(attribution.name(), e))?;
        let violations = violations.map_err(|e| Error::collaborator(analyzer.name(), e))?;

        debug!(
            lines = records.len(),
            uncommitted = records.iter().filter(|r| r.is_uncommitted()).count(),
            violations = violations.len(),
            "analysis epoch complete"
        );
        Ok(AnalysisResult::new(root, records, violations))
    }

    fn repository_root(&self) -> Result<PathBuf> {
        self.attribution
            .repository_root(&self.file)
            .map_err(|e| Error::collaborator(self.attribution.name(), e))
    }

    /// Discard results; the next access starts a new epoch.
    pub fn invalidate(&mut self) {
        if self.epoch.is_analyzed() {
            debug!(file = %self.file.display(), "invalidating analysis");
        }
        self.epoch = Epoch::Invalidated;
    }

    pub fn attribution_records(&mut self) -> Result<Arc<[AttributionRecord]>> {
        Ok(Arc::clone(self.ensure_analyzed()?.attribution()))
    }

    pub fn violations(&mut self) -> Result<Arc<[Violation]>> {
        Ok(Arc::clone(self.ensure_analyzed()?.violations()))
    }

    pub fn attribution_record(&mut self, line: u32) -> Result<&AttributionRecord> {
        let result: &AnalysisResult = self.ensure_analyzed()?;
        result.record(line)
    }

    pub fn distinct_authors(&mut self) -> Result<Arc<BTreeSet<String>>> {
        Ok(self.ensure_analyzed()?.authors())
    }

    /// Destination lines changed between two revisions; does not start an epoch.
    pub fn changed_lines(&self, from: &str, to: &str) -> Result<ChangedLines> {
        let root = match &self.epoch {
            Epoch::Analyzed(result) => result.root().to_path_buf(),
            Epoch::Unanalyzed | Epoch::Invalidated => self.repository_root()?,
        };
        let hunks = self
            .attribution
            .diff(&root, &self.file, from, to)
            .map_err(|e| Error::collaborator(self.attribution.name(), e))?;
        Ok(ChangedLines::from_hunks(&hunks))
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;

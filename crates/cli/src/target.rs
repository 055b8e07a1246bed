// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Analysis target: the public surface for one file.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::analyzer::Analyzer;
use crate::attribution::{AttributionRecord, LineAttribution};
use crate::cache::{AnalysisCache, Epoch};
use crate::error::{Error, Result};
use crate::filter::{self, DiffRange, ReportFilter};
use crate::severity::Severity;
use crate::violation::{AttributedViolation, Violation};

/// Construction options for [`AnalysisTarget`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetOptions {
    /// Analyzer threshold; `None` uses the analyzer's default policy.
    #[serde(default)]
    pub severity: Option<Severity>,
}

impl TargetOptions {
    pub fn with_severity(severity: Severity) -> Self {
        Self {
            severity: Some(severity),
        }
    }

    /// Parse a severity given by name or number.
    pub fn with_severity_str(severity: &str) -> Result<Self> {
        Ok(Self::with_severity(severity.parse()?))
    }
}

/// A single file bound to an analyzer and an attribution backend.
pub struct AnalysisTarget {
    cache: AnalysisCache,
}

impl AnalysisTarget {
    /// Bind to an existing file.
    ///
    /// Fails with a validation error if the file does not exist. The path is
    /// canonicalized so the repository root derives from its real location.
    pub fn new(
        file: impl AsRef<Path>,
        options: TargetOptions,
        analyzer: Box<dyn Analyzer>,
        attribution: Box<dyn LineAttribution>,
    ) -> Result<Self> {
        let file = file.as_ref();
        if !file.is_file() {
            return Err(Error::FileNotFound {
                path: file.to_path_buf(),
            });
        }
        let file = file.canonicalize().map_err(|source| Error::Io {
            path: file.to_path_buf(),
            source,
        })?;
        Ok(Self {
            cache: AnalysisCache::new(file, options.severity, analyzer, attribution),
        })
    }

    pub fn file_path(&self) -> &Path {
        self.cache.file()
    }

    pub fn severity(&self) -> Option<Severity> {
        self.cache.severity()
    }

    pub fn epoch(&self) -> &Epoch {
        self.cache.epoch()
    }

    /// Distinct authors across every line of the file.
    pub fn distinct_authors(&mut self) -> Result<Arc<BTreeSet<String>>> {
        self.cache.distinct_authors()
    }

    pub fn report_violations(&mut self, filter: &ReportFilter) -> Result<Vec<Violation>> {
        filter::report_violations(&mut self.cache, filter)
    }

    pub fn diff_violations(&mut self, range: &DiffRange) -> Result<Vec<Violation>> {
        filter::diff_violations(&mut self.cache, range)
    }

    pub fn attributed_violations(&mut self) -> Result<Vec<AttributedViolation>> {
        filter::attributed_violations(&mut self.cache)
    }

    /// Discard cached results so the next access re-analyzes.
    pub fn force_reanalyzing(&mut self) {
        self.cache.invalidate();
    }

    pub fn violations(&mut self) -> Result<Arc<[Violation]>> {
        self.cache.violations()
    }

    pub fn attribution_records(&mut self) -> Result<Arc<[AttributionRecord]>> {
        self.cache.attribution_records()
    }

    /// Record for a 1-based line number.
    pub fn attribution_record(&mut self, line: u32) -> Result<&AttributionRecord> {
        self.cache.attribution_record(line)
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;

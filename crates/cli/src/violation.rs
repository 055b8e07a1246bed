// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Analyzer findings.

use serde::Serialize;

use crate::attribution::AttributionRecord;
use crate::severity::Severity;

/// A single finding tied to one line of the analyzed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// 1-based line number.
    pub line: u32,

    /// 1-based column of the offending text.
    pub column: u32,

    pub severity: Severity,

    /// Name of the rule that produced the finding.
    pub policy: String,

    /// Human-readable description.
    pub description: String,

    /// The offending source line.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
}

impl Violation {
    /// Create a violation at a line (column 1, no source text).
    pub fn new(
        line: u32,
        severity: Severity,
        policy: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            line,
            column: 1,
            severity,
            policy: policy.into(),
            description: description.into(),
            source: String::new(),
        }
    }

    /// Add column context.
    pub fn at_column(mut self, column: u32) -> Self {
        self.column = column;
        self
    }

    /// Add the offending source line.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

/// A violation joined to the record of the author who last touched its line.
#[derive(Debug, Clone, Serialize)]
pub struct AttributedViolation {
    #[serde(flatten)]
    pub violation: Violation,
    pub author: String,
    pub authored_at: i64,
    pub commit: String,
}

impl AttributedViolation {
    pub fn new(violation: Violation, record: &AttributionRecord) -> Self {
        Self {
            violation,
            author: record.author.clone(),
            authored_at: record.authored_at,
            commit: record.commit.clone(),
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line attribution seam.
//!
//! A [`LineAttribution`] backend answers two questions about one file:
//! who last touched each line (blame), and which destination-side lines
//! changed between two revisions (diff). The repository root is always
//! passed in explicitly, resolved from the file's own location.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Author used for lines that exist on disk but are not committed.
pub const NOT_COMMITTED_AUTHOR: &str = "not.committed.yet";

/// Who last modified one line, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributionRecord {
    /// 1-based line number.
    pub line_number: u32,
    /// Author identifier (email).
    pub author: String,
    /// Author time, seconds since the Unix epoch.
    pub authored_at: i64,
    /// Commit id (all zeros when not committed).
    pub commit: String,
}

impl AttributionRecord {
    pub fn new(
        line_number: u32,
        author: impl Into<String>,
        authored_at: i64,
        commit: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            author: author.into(),
            authored_at,
            commit: commit.into(),
        }
    }

    /// Whether this line has never been committed.
    pub fn is_uncommitted(&self) -> bool {
        self.commit.bytes().all(|b| b == b'0')
    }
}

/// One diff hunk, seen from the destination revision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hunk {
    /// First destination line covered by the hunk.
    pub new_start: u32,
    /// Number of destination lines covered by the hunk.
    pub new_count: u32,
    /// Destination line numbers added or rewritten by the hunk.
    pub lines: Vec<u32>,
}

/// Blame and diff provider for a single file.
///
/// Object-safe to allow dynamic dispatch via `Box<dyn LineAttribution>`.
pub trait LineAttribution: Send + Sync {
    /// Short identifier used in error messages (e.g., "git").
    fn name(&self) -> &'static str;

    /// Resolve the repository root from the file's own location.
    fn repository_root(&self, file: &Path) -> anyhow::Result<PathBuf>;

    /// One record per line of the file's on-disk content, in line order.
    fn blame(&self, root: &Path, file: &Path) -> anyhow::Result<Vec<AttributionRecord>>;

    /// Hunks touching the file between two revisions; empty when identical.
    fn diff(&self, root: &Path, file: &Path, from: &str, to: &str) -> anyhow::Result<Vec<Hunk>>;
}

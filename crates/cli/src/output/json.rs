// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::attribution::AttributionRecord;

/// Violations (plain or attributed) for one file.
#[derive(Debug, Serialize)]
pub struct ViolationsOutput<'a, T: Serialize> {
    pub file: &'a Path,
    pub timestamp: String,
    pub count: usize,
    pub violations: &'a [T],
}

impl<'a, T: Serialize> ViolationsOutput<'a, T> {
    pub fn new(file: &'a Path, violations: &'a [T]) -> Self {
        Self {
            file,
            timestamp: Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            count: violations.len(),
            violations,
        }
    }
}

/// Distinct authors for one file.
#[derive(Debug, Serialize)]
pub struct AuthorsOutput<'a> {
    pub file: &'a Path,
    pub authors: &'a BTreeSet<String>,
}

/// Attribution records for one file.
#[derive(Debug, Serialize)]
pub struct BlameOutput<'a> {
    pub file: &'a Path,
    pub lines: &'a [AttributionRecord],
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write one JSON document followed by a newline.
    pub fn write<T: Serialize>(&mut self, output: &T) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, output)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

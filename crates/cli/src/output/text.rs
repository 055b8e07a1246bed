// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! <file>:<line>:<column>: <policy> [<severity>] <description>
//!     <author> <date> <commit>
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use termcolor::WriteColor;

use super::{format_date, short_commit};
use crate::attribution::AttributionRecord;
use crate::color::scheme;
use crate::violation::{AttributedViolation, Violation};

/// Text output formatter with color support.
pub struct TextFormatter<W> {
    out: W,
    file: String,
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, file: &Path) -> Self {
        Self {
            out,
            file: file.display().to_string(),
        }
    }

    pub fn write_violation(&mut self, v: &Violation) -> std::io::Result<()> {
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", self.file)?;
        self.out.reset()?;
        write!(self.out, ":")?;
        self.out.set_color(&scheme::line_number())?;
        write!(self.out, "{}:{}", v.line, v.column)?;
        self.out.reset()?;
        write!(self.out, ": ")?;
        self.out.set_color(&scheme::policy())?;
        write!(self.out, "{}", v.policy)?;
        self.out.reset()?;
        writeln!(self.out, " [{}] {}", v.severity, v.description)
    }

    pub fn write_attributed(&mut self, a: &AttributedViolation) -> std::io::Result<()> {
        self.write_violation(&a.violation)?;
        write!(self.out, "    ")?;
        self.out.set_color(&scheme::author())?;
        write!(self.out, "{}", a.author)?;
        self.out.reset()?;
        writeln!(
            self.out,
            " {} {}",
            format_date(a.authored_at),
            short_commit(&a.commit)
        )
    }

    pub fn write_authors(&mut self, authors: &BTreeSet<String>) -> std::io::Result<()> {
        for author in authors {
            writeln!(self.out, "{}", author)?;
        }
        Ok(())
    }

    pub fn write_record(&mut self, r: &AttributionRecord) -> std::io::Result<()> {
        self.out.set_color(&scheme::line_number())?;
        write!(self.out, "{:>5}", r.line_number)?;
        self.out.reset()?;
        write!(self.out, " {} ", short_commit(&r.commit))?;
        self.out.set_color(&scheme::author())?;
        write!(self.out, "{}", r.author)?;
        self.out.reset()?;
        writeln!(self.out, " {}", format_date(r.authored_at))
    }

    /// Write the summary line.
    pub fn write_summary(&mut self, count: usize) -> std::io::Result<()> {
        writeln!(
            self.out,
            "{} violation{}",
            count,
            if count == 1 { "" } else { "s" }
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Severity levels shared by analyzer thresholds and violations.
//!
//! Five levels, numbered 5 (most severe) down to 1. As a threshold the
//! names read from most lenient to least lenient:
//!
//! | level | name     | admits violations of severity |
//! |-------|----------|-------------------------------|
//! | 5     | `gentle` | 5                             |
//! | 4     | `stern`  | 4..=5                         |
//! | 3     | `harsh`  | 3..=5                         |
//! | 2     | `cruel`  | 2..=5                         |
//! | 1     | `brutal` | 1..=5                         |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "SeverityRepr", into = "u8")]
#[repr(u8)]
pub enum Severity {
    Brutal = 1,
    Cruel = 2,
    Harsh = 3,
    Stern = 4,
    Gentle = 5,
}

/// Accepted on-disk spellings: a name or a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeverityRepr {
    Level(i64),
    Name(String),
}

impl Severity {
    /// All levels, most lenient threshold first.
    pub const ALL: [Severity; 5] = [
        Severity::Gentle,
        Severity::Stern,
        Severity::Harsh,
        Severity::Cruel,
        Severity::Brutal,
    ];

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Gentle => "gentle",
            Severity::Stern => "stern",
            Severity::Harsh => "harsh",
            Severity::Cruel => "cruel",
            Severity::Brutal => "brutal",
        }
    }

    pub fn from_level(level: i64) -> Option<Self> {
        match level {
            1 => Some(Severity::Brutal),
            2 => Some(Severity::Cruel),
            3 => Some(Severity::Harsh),
            4 => Some(Severity::Stern),
            5 => Some(Severity::Gentle),
            _ => None,
        }
    }

    /// Whether a violation of `severity` is reported under this threshold.
    pub fn admits(self, severity: Severity) -> bool {
        severity.level() >= self.level()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(level) = trimmed.parse::<i64>() {
            return Severity::from_level(level).ok_or_else(|| invalid(trimmed));
        }
        Severity::ALL
            .into_iter()
            .find(|sev| sev.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| invalid(trimmed))
    }
}

fn invalid(value: &str) -> Error {
    Error::Validation(format!(
        "invalid severity `{}` (expected 1-5 or one of: gentle, stern, harsh, cruel, brutal)",
        value
    ))
}

impl TryFrom<SeverityRepr> for Severity {
    type Error = Error;

    fn try_from(repr: SeverityRepr) -> Result<Self, Self::Error> {
        match repr {
            SeverityRepr::Level(level) => {
                Severity::from_level(level).ok_or_else(|| invalid(&level.to_string()))
            }
            SeverityRepr::Name(name) => name.parse(),
        }
    }
}

impl From<Severity> for u8 {
    fn from(sev: Severity) -> Self {
        sev.level()
    }
}

#[cfg(test)]
#[path = "severity_tests.rs"]
mod tests;

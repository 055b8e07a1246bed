// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-line rule matchers.
//!
//! A rule pattern compiles to the cheapest matcher that can express it:
//! - Plain literal: memchr::memmem
//! - Alternation of literals: aho-corasick
//! - Anything else: regex crate

use aho_corasick::AhoCorasick;
use memchr::memmem::Finder;
use regex::Regex;

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

/// A compiled rule pattern.
pub enum LineMatcher {
    Literal(Finder<'static>),
    Alternation(AhoCorasick),
    Regex(Regex),
}

impl LineMatcher {
    pub fn compile(pattern: &str) -> Result<Self, MatcherError> {
        if pattern.is_empty() {
            return Err(MatcherError::InvalidPattern("empty pattern".to_string()));
        }
        if is_literal(pattern) {
            return Ok(LineMatcher::Literal(Finder::new(pattern).into_owned()));
        }
        let alternatives: Vec<&str> = pattern.split('|').collect();
        if alternatives.len() > 1 && alternatives.iter().all(|a| !a.is_empty() && is_literal(a)) {
            let automaton = AhoCorasick::new(&alternatives)
                .map_err(|e| MatcherError::InvalidPattern(e.to_string()))?;
            return Ok(LineMatcher::Alternation(automaton));
        }
        Ok(LineMatcher::Regex(Regex::new(pattern)?))
    }

    /// Byte offset of the first match within `line`.
    pub fn find(&self, line: &str) -> Option<usize> {
        match self {
            LineMatcher::Literal(finder) => finder.find(line.as_bytes()),
            LineMatcher::Alternation(automaton) => automaton.find(line).map(|m| m.start()),
            LineMatcher::Regex(regex) => regex.find(line).map(|m| m.start()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LineMatcher::Literal(_) => "literal",
            LineMatcher::Alternation(_) => "alternation",
            LineMatcher::Regex(_) => "regex",
        }
    }
}

fn is_literal(pattern: &str) -> bool {
    !pattern.chars().any(|c| {
        matches!(
            c,
            '\\' | '.' | '*' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|'
        )
    })
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;

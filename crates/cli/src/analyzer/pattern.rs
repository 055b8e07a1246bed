// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern analyzer.
//!
//! Flags every line matching a configured rule. Rules carry a severity;
//! the threshold decides which rules run at all.

use std::path::Path;

use anyhow::{Context, anyhow};
use tracing::debug;

use super::Analyzer;
use super::matcher::{LineMatcher, MatcherError};
use crate::severity::Severity;
use crate::violation::Violation;

/// A rule definition, as written in `culprit.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: String,
    pub pattern: String,
    pub severity: Severity,
    pub description: String,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        severity: Severity,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            severity,
            description: description.into(),
        }
    }

    /// Rules used when the config defines none.
    pub fn defaults() -> Vec<Rule> {
        vec![
            Rule::new(
                "conflict-marker",
                r"^(<<<<<<<|=======|>>>>>>>)( |$)",
                Severity::Gentle,
                "Unresolved merge conflict marker",
            ),
            Rule::new(
                "debug-macro",
                r"\bdbg!\(",
                Severity::Stern,
                "Debug macro left in source",
            ),
            Rule::new(
                "todo-comment",
                r"\b(TODO|FIXME|XXX)\b",
                Severity::Cruel,
                "Unresolved marker comment",
            ),
            Rule::new(
                "trailing-whitespace",
                r"[ \t]+$",
                Severity::Brutal,
                "Trailing whitespace",
            ),
        ]
    }
}

/// A rule whose pattern failed to compile.
#[derive(Debug, thiserror::Error)]
#[error("rule `{rule}`: {source}")]
pub struct RuleError {
    pub rule: String,
    #[source]
    pub source: MatcherError,
}

struct CompiledRule {
    rule: Rule,
    matcher: LineMatcher,
}

/// Line-pattern analyzer.
pub struct PatternAnalyzer {
    rules: Vec<CompiledRule>,
    default_threshold: Severity,
}

impl PatternAnalyzer {
    /// Compile rules; the first invalid pattern aborts with its rule name.
    pub fn new(rules: Vec<Rule>, default_threshold: Severity) -> Result<Self, RuleError> {
        let rules = rules
            .into_iter()
            .map(|rule| match LineMatcher::compile(&rule.pattern) {
                Ok(matcher) => {
                    debug!(rule = %rule.name, kind = matcher.kind(), "compiled rule");
                    Ok(CompiledRule { rule, matcher })
                }
                Err(source) => Err(RuleError {
                    rule: rule.name,
                    source,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            rules,
            default_threshold,
        })
    }

    /// Built-in rules with the `gentle` default threshold.
    pub fn with_defaults() -> Result<Self, RuleError> {
        Self::new(Rule::defaults(), Severity::Gentle)
    }

    pub fn default_threshold(&self) -> Severity {
        self.default_threshold
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.rule.name.as_str())
    }

    /// Analyze in-memory content.
    ///
    /// Fails if a line or column number does not fit in `u32`.
    pub fn critique_content(
        &self,
        content: &str,
        severity: Option<Severity>,
    ) -> anyhow::Result<Vec<Violation>> {
        let threshold = severity.unwrap_or(self.default_threshold);
        let mut violations = Vec::new();

        for compiled in self
            .rules
            .iter()
            .filter(|r| threshold.admits(r.rule.severity))
        {
            for (idx, line) in content.lines().enumerate() {
                if let Some(offset) = compiled.matcher.find(line) {
                    violations.push(
                        Violation::new(
                            one_based(idx, "line")?,
                            compiled.rule.severity,
                            compiled.rule.name.clone(),
                            compiled.rule.description.clone(),
                        )
                        .at_column(one_based(offset, "column")?)
                        .with_source(line),
                    );
                }
            }
        }

        Ok(violations)
    }
}

/// Convert a zero-based index into a one-based `u32` position.
fn one_based(index: usize, what: &str) -> anyhow::Result<u32> {
    u32::try_from(index)
        .ok()
        .and_then(|i| i.checked_add(1))
        .ok_or_else(|| anyhow!("{what} {index} exceeds the supported range"))
}

impl Analyzer for PatternAnalyzer {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn critique(&self, file: &Path, severity: Option<Severity>) -> anyhow::Result<Vec<Violation>> {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        self.critique_content(&content, severity)
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;

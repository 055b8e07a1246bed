// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles culprit.toml parsing. Unknown keys are rejected, and every
//! offending key is named in the error.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use crate::analyzer::{PatternAnalyzer, Rule};
use crate::error::{Error, Result};
use crate::severity::Severity;

/// Config file name looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "culprit.toml";

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "severity", "rule"];

/// Known keys of a `[[rule]]` table.
const KNOWN_RULE_KEYS: &[&str] = &["name", "pattern", "severity", "description"];

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    severity: Option<toml::Value>,

    #[serde(default)]
    rule: Vec<FlexibleRule>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

#[derive(Deserialize)]
struct FlexibleRule {
    name: Option<String>,
    pattern: Option<String>,
    severity: Option<toml::Value>,
    description: Option<String>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Default analyzer threshold (overridden by `--severity`).
    pub severity: Option<Severity>,

    /// Analyzer rules; empty means the built-in rule set.
    pub rules: Vec<Rule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            severity: None,
            rules: Vec::new(),
        }
    }
}

impl Config {
    /// Build the pattern analyzer described by this config.
    pub fn analyzer(&self) -> Result<PatternAnalyzer> {
        let rules = if self.rules.is_empty() {
            Rule::defaults()
        } else {
            self.rules.clone()
        };
        PatternAnalyzer::new(rules, Severity::Gentle).map_err(|e| Error::Validation(e.to_string()))
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = flexible.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    // Collect unknown keys across the whole file before failing
    let mut unknown_keys: BTreeSet<String> = flexible
        .unknown
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();
    for (idx, rule) in flexible.rule.iter().enumerate() {
        for key in rule.unknown.keys() {
            if !KNOWN_RULE_KEYS.contains(&key.as_str()) {
                unknown_keys.insert(format!("rule[{}].{}", idx, key));
            }
        }
    }
    if !unknown_keys.is_empty() {
        return Err(Error::UnknownKeys {
            context: format!("config ({})", path.display()),
            keys: unknown_keys.into_iter().collect(),
        });
    }

    let severity = flexible
        .severity
        .as_ref()
        .map(|v| severity_from_value(v, "severity"))
        .transpose()?;

    let mut names = BTreeSet::new();
    let mut rules = Vec::with_capacity(flexible.rule.len());
    for (idx, rule) in flexible.rule.into_iter().enumerate() {
        let field = |name: &str| format!("rule[{}].{}", idx, name);
        let name = rule
            .name
            .filter(|n| !n.trim().is_empty())
            .ok_or_else(|| Error::Validation(format!("missing required field: {}", field("name"))))?;
        let pattern = rule.pattern.ok_or_else(|| {
            Error::Validation(format!("missing required field: {}", field("pattern")))
        })?;
        let severity = match &rule.severity {
            Some(value) => severity_from_value(value, &field("severity"))?,
            None => {
                return Err(Error::Validation(format!(
                    "missing required field: {}",
                    field("severity")
                )));
            }
        };
        if !names.insert(name.clone()) {
            return Err(Error::Validation(format!("duplicate rule name: {}", name)));
        }
        let description = rule.description.unwrap_or_else(|| name.clone());
        rules.push(Rule::new(name, pattern, severity, description));
    }

    Ok(Config {
        version,
        severity,
        rules,
    })
}

fn severity_from_value(value: &toml::Value, field: &str) -> Result<Severity> {
    let severity = match value {
        toml::Value::Integer(level) => Severity::from_level(*level),
        toml::Value::String(name) => name.parse().ok(),
        _ => None,
    };
    severity.ok_or_else(|| {
        Error::Validation(format!(
            "{}: invalid severity {} (expected 1-5 or one of: gentle, stern, harsh, cruel, brutal)",
            field, value
        ))
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

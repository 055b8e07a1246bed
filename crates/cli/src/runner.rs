// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Wires config, the pattern analyzer, and the git backend into a target.

use std::path::Path;

use tracing::debug;

use crate::config::{self, Config};
use crate::discovery::resolve_config;
use crate::error::Result;
use crate::git::GitAttribution;
use crate::severity::Severity;
use crate::target::{AnalysisTarget, TargetOptions};

/// Open `file` for analysis.
///
/// `severity` overrides the config's threshold.
pub fn open_target(
    file: &Path,
    config_path: Option<&Path>,
    severity: Option<Severity>,
) -> Result<AnalysisTarget> {
    let start_dir = file
        .canonicalize()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| Path::new(".").to_path_buf());

    let config = match resolve_config(config_path, &start_dir)? {
        Some(path) => {
            debug!(config = %path.display(), "loading config");
            config::load(&path)?
        }
        None => Config::default(),
    };

    let options = TargetOptions {
        severity: severity.or(config.severity),
    };
    let analyzer = config.analyzer()?;
    debug!(
        rules = %analyzer.rule_names().collect::<Vec<_>>().join(", "),
        threshold = %options.severity.unwrap_or(analyzer.default_threshold()),
        "analyzer ready"
    );
    AnalysisTarget::new(file, options, Box::new(analyzer), Box::new(GitAttribution))
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--no-color` flag or `NO_COLOR` env var → no color
//! 2. `--color` flag or `COLOR` env var → color
//! 3. default: color only when stdout is a TTY and `CI` is unset

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Resolve the color choice from explicit flags and the environment.
pub fn resolve_color(force: bool, disable: bool) -> ColorChoice {
    let env_set = |name: &str| std::env::var_os(name).is_some_and(|v| !v.is_empty());
    decide(
        force || env_set("COLOR"),
        disable || env_set("NO_COLOR"),
        std::io::stdout().is_terminal() && !env_set("CI"),
    )
}

fn decide(force: bool, disable: bool, interactive: bool) -> ColorChoice {
    if disable {
        ColorChoice::Never
    } else if force || interactive {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    }
}

/// Color specs for violation output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// File path: cyan.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Line and column numbers: yellow.
    pub fn line_number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Policy name: bold.
    pub fn policy() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Author identifier: green.
    pub fn author() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;

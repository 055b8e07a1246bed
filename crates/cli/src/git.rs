// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git line attribution backed by git2 (libgit2).
//!
//! ## Repository Root
//!
//! The root is discovered from the file's parent directory with
//! `Repository::discover`, which walks up from that directory and does not
//! consult `GIT_DIR` or `GIT_WORK_TREE`. Every later call opens the root it
//! is handed, so the caller's environment never redirects a lookup.
//!
//! ## Blame
//!
//! Committed history is blamed first, then re-blamed against the on-disk
//! buffer so lines edited since the last commit are covered too. Those
//! lines carry a zero commit id.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use git2::{DiffOptions, Oid, Patch, Repository};
use tracing::{debug, trace};

use crate::attribution::{AttributionRecord, Hunk, LineAttribution, NOT_COMMITTED_AUTHOR};

/// Attribution provider backed by the git repository containing the file.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitAttribution;

impl GitAttribution {
    pub fn new() -> Self {
        Self
    }
}

impl LineAttribution for GitAttribution {
    fn name(&self) -> &'static str {
        "git"
    }

    fn repository_root(&self, file: &Path) -> anyhow::Result<PathBuf> {
        let dir = file
            .parent()
            .ok_or_else(|| anyhow!("{} has no parent directory", file.display()))?;
        let repo = Repository::discover(dir)
            .with_context(|| format!("{} is not inside a git repository", dir.display()))?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| anyhow!("repository at {} is bare", repo.path().display()))?;
        let root = workdir
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", workdir.display()))?;
        debug!(root = %root.display(), "resolved repository root");
        Ok(root)
    }

    fn blame(&self, root: &Path, file: &Path) -> anyhow::Result<Vec<AttributionRecord>> {
        let repo = Repository::open(root).context("Failed to open repository")?;
        let relative = relative_path(root, file)?;
        let content =
            std::fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;

        let committed = repo
            .blame_file(&relative, None)
            .with_context(|| format!("Failed to blame {}", relative.display()))?;
        let blame = committed
            .blame_buffer(&content)
            .context("Failed to blame working copy")?;

        let now = chrono::Utc::now().timestamp();
        let mut authors: HashMap<Oid, (String, i64)> = HashMap::new();
        let total = count_lines(&content);
        let mut records = Vec::with_capacity(total);

        for line in 1..=total {
            let hunk = blame
                .get_line(line)
                .ok_or_else(|| anyhow!("no blame information for line {}", line))?;
            let oid = hunk.final_commit_id();
            let (author, authored_at) = if oid.is_zero() {
                (NOT_COMMITTED_AUTHOR.to_string(), now)
            } else if let Some(known) = authors.get(&oid) {
                known.clone()
            } else {
                let commit = repo
                    .find_commit(oid)
                    .with_context(|| format!("Failed to find commit {}", oid))?;
                let signature = commit.author();
                let entry = (
                    signature.email().unwrap_or("").to_string(),
                    signature.when().seconds(),
                );
                authors.insert(oid, entry.clone());
                entry
            };
            records.push(AttributionRecord::new(
                line as u32,
                author,
                authored_at,
                oid.to_string(),
            ));
        }

        trace!(lines = records.len(), commits = authors.len(), "blame complete");
        Ok(records)
    }

    fn diff(&self, root: &Path, file: &Path, from: &str, to: &str) -> anyhow::Result<Vec<Hunk>> {
        let repo = Repository::open(root).context("Failed to open repository")?;
        let relative = relative_path(root, file)?;

        let from_tree = repo
            .revparse_single(from)
            .with_context(|| format!("Failed to resolve revision: {}", from))?
            .peel_to_tree()
            .with_context(|| format!("Failed to get tree for revision: {}", from))?;
        let to_tree = repo
            .revparse_single(to)
            .with_context(|| format!("Failed to resolve revision: {}", to))?
            .peel_to_tree()
            .with_context(|| format!("Failed to get tree for revision: {}", to))?;

        let mut opts = DiffOptions::new();
        opts.pathspec(pathspec(&relative))
            .disable_pathspec_match(true)
            .context_lines(0);

        let diff = repo
            .diff_tree_to_tree(Some(&from_tree), Some(&to_tree), Some(&mut opts))
            .context("Failed to compute diff")?;

        let mut hunks = Vec::new();
        for idx in 0..diff.deltas().count() {
            let Some(patch) = Patch::from_diff(&diff, idx)? else {
                continue;
            };
            for hunk_idx in 0..patch.num_hunks() {
                let (header, line_count) = patch.hunk(hunk_idx)?;
                let mut lines = Vec::new();
                for line_idx in 0..line_count {
                    let line = patch.line_in_hunk(hunk_idx, line_idx)?;
                    if line.origin() == '+'
                        && let Some(new_lineno) = line.new_lineno()
                    {
                        lines.push(new_lineno);
                    }
                }
                hunks.push(Hunk {
                    new_start: header.new_start(),
                    new_count: header.new_lines(),
                    lines,
                });
            }
        }

        debug!(from, to, hunks = hunks.len(), "diff complete");
        Ok(hunks)
    }
}

/// Path of `file` relative to the repository root.
fn relative_path(root: &Path, file: &Path) -> anyhow::Result<PathBuf> {
    file.strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| {
            anyhow!(
                "{} is outside repository {}",
                file.display(),
                root.display()
            )
        })
}

/// Git pathspecs always use forward slashes.
fn pathspec(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Count lines the way git does: a trailing newline does not open a new line.
fn count_lines(content: &[u8]) -> usize {
    let newlines = memchr::memchr_iter(b'\n', content).count();
    match content.last() {
        None => 0,
        Some(b'\n') => newlines,
        Some(_) => newlines + 1,
    }
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;

// src/watch/patterns.rs

use std::fmt;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compiled watch/exclude glob patterns for the source set.
///
/// The patterns are matched against paths relative to the source directory.
/// Since the source layout is a single flat directory, that is normally just
/// the file name (e.g. `"main.scss"`).
#[derive(Clone)]
pub struct SourceWatchProfile {
    patterns: GlobSet,
    exclude: Option<GlobSet>,
}

impl fmt::Debug for SourceWatchProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceWatchProfile").finish_non_exhaustive()
    }
}

impl SourceWatchProfile {
    /// Compile a profile from the configured pattern lists.
    pub fn from_lists(patterns: &[String], exclude: &[String]) -> Result<Self> {
        let patterns =
            build_globset(patterns).context("building source globset")?;

        let exclude = if exclude.is_empty() {
            None
        } else {
            Some(build_globset(exclude).context("building exclude globset")?)
        };

        Ok(Self { patterns, exclude })
    }

    /// Returns true if the build should care about the given path (relative
    /// to the source directory), e.g. `"main.scss"`.
    pub fn matches(&self, rel_path: &str) -> bool {
        if !self.patterns.is_match(rel_path) {
            return false;
        }
        if let Some(exclude) = &self.exclude {
            if exclude.is_match(rel_path) {
                return false;
            }
        }
        true
    }
}

/// Build a GlobSet from simple string patterns.
fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = Glob::new(pat)
            .with_context(|| format!("invalid glob pattern: {pat}"))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

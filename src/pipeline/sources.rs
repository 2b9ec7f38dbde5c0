// src/pipeline/sources.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::watch::patterns::SourceWatchProfile;

/// The source side of the pipeline: a single flat directory plus the compiled
/// glob profile that selects files inside it.
///
/// The set of matching files is re-enumerated on every build; nothing is
/// cached between runs.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    dir: PathBuf,
    profile: SourceWatchProfile,
}

impl SourceSpec {
    pub fn new(dir: impl Into<PathBuf>, profile: SourceWatchProfile) -> Self {
        Self {
            dir: dir.into(),
            profile,
        }
    }

    /// The source directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Enumerate the current source set: regular files directly inside the
    /// source directory whose names match the profile, minus partials.
    ///
    /// Returned sorted by name so output ordering (and logs) are stable. A
    /// missing source directory yields an empty set, like a glob with no
    /// matches; any other directory read error is propagated.
    pub fn enumerate(&self) -> Result<Vec<PathBuf>> {
        if !self.dir.exists() {
            warn!(dir = ?self.dir, "source directory does not exist; nothing to build");
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&self.dir)
            .with_context(|| format!("reading source directory {:?}", self.dir))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("reading entry in {:?}", self.dir))?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let name = match path.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => continue,
            };

            if !self.profile.matches(&name) {
                continue;
            }

            if is_partial(&path) {
                debug!(file = %name, "skipping partial");
                continue;
            }

            files.push(path);
        }

        files.sort();
        debug!(count = files.len(), dir = ?self.dir, "enumerated source set");
        Ok(files)
    }
}

/// SCSS convention: files whose name starts with `_` are partials, meant to
/// be imported by other stylesheets and never compiled on their own.
pub fn is_partial(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('_'))
}

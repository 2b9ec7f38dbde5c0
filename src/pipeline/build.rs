// src/pipeline/build.rs

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use tracing::{debug, error, info};

use crate::config::model::ConfigFile;
use crate::errors::StyleError;
use crate::pipeline::compile::{self, CompileSettings, OutputMode};
use crate::pipeline::prefix::{self, parse_browsers, PrefixSettings};
use crate::pipeline::sources::SourceSpec;
use crate::watch::patterns::SourceWatchProfile;

/// Outcome of one build run.
///
/// `written` and `failed` partition the enumerated source set; a file lands
/// in `failed` when any per-file stage (compile, transform, write) errored.
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    /// Output paths written, in source order.
    pub written: Vec<PathBuf>,
    /// Source paths that were skipped after a logged per-file error.
    pub failed: Vec<PathBuf>,
}

impl BuildSummary {
    /// True when every enumerated source produced output.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// The whole pipeline, resolved from config: source set in, compiled +
/// prefixed CSS files out.
///
/// Stateless across runs; cheap to clone so per-file workers can share it.
#[derive(Debug, Clone)]
pub struct StylePipeline {
    source: SourceSpec,
    out_dir: PathBuf,
    compile: CompileSettings,
    prefix: PrefixSettings,
}

impl StylePipeline {
    /// Resolve a pipeline from a validated [`ConfigFile`]. Relative paths are
    /// resolved against `root` (the config file's directory).
    pub fn from_config(cfg: &ConfigFile, root: &Path) -> Result<Self> {
        let profile =
            SourceWatchProfile::from_lists(&cfg.source.patterns, &cfg.source.exclude)?;
        let source = SourceSpec::new(root.join(&cfg.source.dir), profile);

        let mode = OutputMode::from_str(&cfg.compile.style).map_err(|e| anyhow!(e))?;
        let compile = CompileSettings {
            mode,
            include_paths: cfg
                .compile
                .include_paths
                .iter()
                .map(|p| root.join(p))
                .collect(),
            normalize: cfg.compile.normalize,
        };

        let prefix = PrefixSettings {
            browsers: parse_browsers(&cfg.prefix.browsers)?,
        };

        Ok(Self {
            source,
            out_dir: root.join(&cfg.output.dir),
            compile,
            prefix,
        })
    }

    /// The source side of this pipeline.
    pub fn source(&self) -> &SourceSpec {
        &self.source
    }

    /// The directory outputs are written into.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Run one build over the current source set.
    ///
    /// Files are built concurrently on blocking worker threads; each file's
    /// success or failure is independent. Per-file errors are logged and the
    /// file is skipped. Environment errors (unreadable source directory,
    /// uncreatable output directory) abort the run.
    pub async fn build(&self) -> Result<BuildSummary> {
        let files = self.source.enumerate()?;

        let mut summary = BuildSummary::default();
        if files.is_empty() {
            info!("no stylesheet sources matched; nothing to build");
            return Ok(summary);
        }

        std::fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("creating output directory {:?}", self.out_dir))?;

        let mut handles = Vec::with_capacity(files.len());
        for path in files {
            let pipeline = self.clone();
            let worker_path = path.clone();
            handles.push((
                path,
                tokio::task::spawn_blocking(move || pipeline.build_file(&worker_path)),
            ));
        }

        for (path, handle) in handles {
            match handle.await.context("stylesheet worker panicked")? {
                Ok(out_path) => {
                    debug!(file = %path.display(), out = %out_path.display(), "stylesheet written");
                    summary.written.push(out_path);
                }
                Err(err) => {
                    error!(error = %err, "stylesheet build failed; skipping file");
                    summary.failed.push(path);
                }
            }
        }

        info!(
            written = summary.written.len(),
            failed = summary.failed.len(),
            "style build finished"
        );
        Ok(summary)
    }

    /// Build a single source file: compile, prefix, write.
    fn build_file(&self, path: &Path) -> Result<PathBuf, StyleError> {
        let compiled = compile::compile_file(path, &self.compile)?;

        let minify = self.compile.mode == OutputMode::Compressed;
        let css = prefix::prefix_css(path, &compiled, &self.prefix, minify)?;

        let out_path = self.out_dir.join(output_name(path));
        std::fs::write(&out_path, css).map_err(|source| StyleError::Write {
            file: out_path.clone(),
            source,
        })?;

        Ok(out_path)
    }
}

/// Output file name for a source: same stem, `.css` extension.
fn output_name(path: &Path) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default();
    PathBuf::from(stem).with_extension("css")
}

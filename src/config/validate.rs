// src/config/validate.rs

use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::config::model::ConfigFile;
use crate::pipeline::compile::OutputMode;
use crate::pipeline::prefix::parse_browsers;
use crate::watch::patterns::SourceWatchProfile;

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `source.patterns` is non-empty and every glob (including excludes) compiles
/// - `output.dir` is non-empty
/// - `compile.style` is a recognized output style
/// - `prefix.browsers` parses as a browserslist query set
///
/// It does **not** check that the source directory exists: an empty match is
/// a valid (if unproductive) build, and in watch mode the watcher reports
/// a missing directory itself.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_source(cfg)?;
    validate_output(cfg)?;
    validate_compile(cfg)?;
    validate_prefix(cfg)?;
    Ok(())
}

fn validate_source(cfg: &ConfigFile) -> Result<()> {
    if cfg.source.patterns.is_empty() {
        return Err(anyhow!(
            "[source].patterns must contain at least one glob pattern"
        ));
    }

    SourceWatchProfile::from_lists(&cfg.source.patterns, &cfg.source.exclude)
        .context("invalid [source] glob patterns")?;

    Ok(())
}

fn validate_output(cfg: &ConfigFile) -> Result<()> {
    if cfg.output.dir.trim().is_empty() {
        return Err(anyhow!("[output].dir must not be empty"));
    }
    Ok(())
}

fn validate_compile(cfg: &ConfigFile) -> Result<()> {
    OutputMode::from_str(&cfg.compile.style)
        .map_err(|e| anyhow!(e))
        .context("invalid [compile].style")?;
    Ok(())
}

fn validate_prefix(cfg: &ConfigFile) -> Result<()> {
    parse_browsers(&cfg.prefix.browsers).context("invalid [prefix].browsers")?;
    Ok(())
}

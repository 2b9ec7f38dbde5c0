// src/config/loader.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;

/// Load a configuration file from a given path and return the raw `ConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (glob syntax, browser queries, etc.). Use [`load_and_validate`]
/// for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file at {:?}", path))?;

    let config: ConfigFile = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML config from {:?}", path))?;

    Ok(config)
}

/// Load a configuration file from path and run basic validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolve configuration for a CLI invocation.
///
/// - An explicitly given `--config PATH` must exist; a read or parse failure
///   is an error.
/// - With no flag, `Stylepipe.toml` in the current working directory is used
///   if present; otherwise the built-in defaults apply, matching the classic
///   zero-config layout.
///
/// Returns the config together with the project root directory that all
/// relative paths in it are resolved against: the directory containing the
/// config file, or `.` when running on defaults.
pub fn load_for_cli(cli_config: Option<&str>) -> Result<(ConfigFile, PathBuf)> {
    let path = match cli_config {
        Some(p) => PathBuf::from(p),
        None => {
            let default = default_config_path();
            if !default.exists() {
                debug!("no {:?} found; using built-in defaults", default);
                let cfg = ConfigFile::default();
                validate_config(&cfg)?;
                return Ok((cfg, PathBuf::from(".")));
            }
            default
        }
    };

    let cfg = load_and_validate(&path)?;
    Ok((cfg, config_root_dir(&path)))
}

/// Helper to resolve the default config path.
///
/// Currently this just returns `Stylepipe.toml` in the current working
/// directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Stylepipe.toml")
}

/// Figure out a sensible project root for resolving relative paths.
/// Currently: directory containing the config file, or `.`.
fn config_root_dir(config_path: &Path) -> PathBuf {
    let parent = config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_default();
    if parent.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        parent
    }
}

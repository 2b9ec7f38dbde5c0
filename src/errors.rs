// src/errors.rs

//! Crate-wide error types.
//!
//! Per-file pipeline failures get a structured enum so callers can log and
//! skip the file without aborting the run. Everything else (config parsing,
//! environment problems) flows through `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

/// A failure while building a single stylesheet.
///
/// These are caught at the per-file level, logged, and suppressed: the rest
/// of the source set still builds, and the watch loop keeps running.
#[derive(Error, Debug)]
pub enum StyleError {
    /// Invalid SCSS syntax or an unresolvable import.
    #[error("compiling {}: {message}", .file.display())]
    Compile { file: PathBuf, message: String },

    /// The compiled CSS could not be parsed or transformed by the prefixer.
    #[error("transforming {}: {message}", .file.display())]
    Transform { file: PathBuf, message: String },

    /// Writing the output file failed.
    #[error("writing {}: {source}", .file.display())]
    Write {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub use anyhow::{Error, Result};

// src/config/mod.rs

//! Configuration loading and validation for stylepipe.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk, falling back to built-in defaults that
//!   reproduce the classic zero-config layout (`loader.rs`).
//! - Validate globs, the output style, and the browser matrix (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_for_cli, load_from_path};
pub use model::{CompileSection, ConfigFile, OutputSection, PrefixSection, SourceSection};
pub use validate::validate_config;

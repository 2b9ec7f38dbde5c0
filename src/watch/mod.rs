// src/watch/mod.rs

//! File watching and change detection.
//!
//! This module is responsible for:
//! - Compiling the source `patterns` / `exclude` globs into a match profile.
//! - Wiring up a cross-platform filesystem watcher (`notify`).
//!
//! It does **not** know about the pipeline; it only turns filesystem changes
//! into rebuild triggers.

pub mod patterns;
pub mod watcher;

pub use patterns::SourceWatchProfile;
pub use watcher::{spawn_watcher, WatcherHandle};

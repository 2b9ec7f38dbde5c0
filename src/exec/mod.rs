// src/exec/mod.rs

//! Build execution layer.
//!
//! This module owns the builder loop: it consumes [`BuildRequest`]s from the
//! runtime, runs the pipeline, and reports back via `RuntimeEvent`s.
//!
//! [`BuildRequest`]: crate::engine::BuildRequest

pub mod builder;

pub use builder::spawn_builder;

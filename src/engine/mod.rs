// src/engine/mod.rs

//! Orchestration engine for stylepipe.
//!
//! This module ties together:
//! - the rebuild queue (what happens when triggers arrive while a build is
//!   already running)
//! - the main runtime event loop that reacts to:
//!   - file-watch triggers
//!   - build completion events
//!   - shutdown signals

pub mod queue;
pub mod runtime;

pub use queue::RebuildQueue;
pub use runtime::{
    BuildOutcome, BuildRequest, Runtime, RuntimeEvent, RuntimeOptions, TriggerReason,
};

// src/engine/queue.rs

use tracing::debug;

use super::runtime::TriggerReason;

/// Pending-rebuild state for triggers that arrive while a build is already
/// executing.
///
/// There is a single pipeline, so queueing collapses to coalescing: any
/// number of triggers recorded mid-build become exactly one follow-up
/// rebuild, started when the current build completes. The build always
/// re-reads the whole source set, so nothing is lost by merging triggers;
/// only the most recent reason is kept, for logging.
#[derive(Debug, Default)]
pub struct RebuildQueue {
    pending: Option<TriggerReason>,
}

impl RebuildQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no rebuild is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }

    /// Record that a rebuild was requested while a build is in progress.
    ///
    /// Coalesces with any already-pending rebuild.
    pub fn record_trigger(&mut self, reason: TriggerReason) {
        let coalesced = self.pending.is_some();
        self.pending = Some(reason);
        debug!(?reason, coalesced, "rebuild trigger recorded while building");
    }

    /// Take the pending rebuild, if any, leaving the queue empty.
    ///
    /// Called by the runtime when a build completes and it wants to know
    /// whether to immediately start another.
    pub fn take_pending(&mut self) -> Option<TriggerReason> {
        self.pending.take()
    }
}

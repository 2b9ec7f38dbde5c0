// src/engine/runtime.rs

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::engine::queue::RebuildQueue;
use crate::pipeline::BuildSummary;

/// Reason why a build was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerReason {
    /// The initial build when the process starts.
    Startup,
    /// A watched source file changed.
    FileWatch,
}

/// Result of a build run, as reported by the builder.
#[derive(Debug, Clone)]
pub enum BuildOutcome {
    /// The run completed; per-file failures (if any) are in the summary.
    Finished(BuildSummary),
    /// The run hit an environment error (already logged) and produced no
    /// summary.
    Aborted,
}

/// A request for the builder to run the pipeline once.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub reason: TriggerReason,
}

/// Events sent into the runtime from watchers, the builder, or external
/// signals.
///
/// The idea is that:
/// - the watcher (and startup seeding) sends `BuildTriggered`
/// - the builder sends `BuildCompleted`
/// - Ctrl-C handling sends `ShutdownRequested`
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    BuildTriggered { reason: TriggerReason },
    BuildCompleted { outcome: BuildOutcome },
    ShutdownRequested,
}

/// Options that influence how the runtime behaves.
#[derive(Debug, Clone, Default)]
pub struct RuntimeOptions {
    /// If true, exit as soon as a build completes with nothing pending.
    /// In watch mode this should be `false`.
    pub exit_when_idle: bool,
}

/// The main orchestration runtime.
///
/// Responsibilities:
/// - Consume `RuntimeEvent`s from the watcher/builder/ctrl-c.
/// - Dispatch at most one build at a time to the builder.
/// - Coalesce triggers that arrive mid-build into a single follow-up run.
pub struct Runtime {
    queue: RebuildQueue,
    options: RuntimeOptions,

    /// Whether a build is currently in flight at the builder.
    building: bool,

    /// Unified event stream from all producers (watcher, builder, signal handler).
    events_rx: mpsc::Receiver<RuntimeEvent>,

    /// Channel to the builder: one message per requested build run.
    build_tx: mpsc::Sender<BuildRequest>,
}

impl Runtime {
    pub fn new(
        queue: RebuildQueue,
        options: RuntimeOptions,
        events_rx: mpsc::Receiver<RuntimeEvent>,
        build_tx: mpsc::Sender<BuildRequest>,
    ) -> Self {
        Self {
            queue,
            options,
            building: false,
            events_rx,
            build_tx,
        }
    }

    /// Main event loop.
    ///
    /// This should be called from `lib.rs` after:
    /// - config is loaded & validated and the pipeline is resolved
    /// - the builder has been spawned with a clone of the
    ///   `mpsc::Sender<RuntimeEvent>`
    /// - the watcher (in watch mode) has been spawned likewise
    pub async fn run(mut self) -> Result<()> {
        info!("stylepipe runtime started");

        while let Some(event) = self.events_rx.recv().await {
            debug!(?event, "runtime received event");

            let keep_running = match event {
                RuntimeEvent::BuildTriggered { reason } => {
                    self.handle_trigger(reason).await?
                }
                RuntimeEvent::BuildCompleted { outcome } => {
                    self.handle_completion(outcome).await?
                }
                RuntimeEvent::ShutdownRequested => {
                    info!("shutdown requested, stopping runtime");
                    false
                }
            };

            if !keep_running {
                break;
            }
        }

        info!("stylepipe runtime exiting");
        Ok(())
    }

    /// Handle a build trigger (from the watcher or startup seeding).
    async fn handle_trigger(&mut self, reason: TriggerReason) -> Result<bool> {
        info!(?reason, "build triggered");

        if self.building {
            // A build is in flight; remember that another one is wanted.
            self.queue.record_trigger(reason);
        } else {
            self.dispatch(reason).await?;
        }

        Ok(true)
    }

    /// Handle completion of a build run.
    async fn handle_completion(&mut self, outcome: BuildOutcome) -> Result<bool> {
        self.building = false;

        match outcome {
            BuildOutcome::Finished(summary) if summary.is_clean() => {
                info!(written = summary.written.len(), "build completed");
            }
            BuildOutcome::Finished(summary) => {
                warn!(
                    written = summary.written.len(),
                    failed = summary.failed.len(),
                    "build completed with failures"
                );
            }
            BuildOutcome::Aborted => {
                warn!("build run aborted");
            }
        }

        if let Some(reason) = self.queue.take_pending() {
            debug!(?reason, "starting queued rebuild");
            self.dispatch(reason).await?;
            return Ok(true);
        }

        if self.options.exit_when_idle {
            info!("runtime idle and exit_when_idle=true, stopping");
            return Ok(false);
        }

        Ok(true)
    }

    /// Send a build request to the builder and mark a build as in flight.
    async fn dispatch(&mut self, reason: TriggerReason) -> Result<()> {
        self.building = true;
        if let Err(err) = self.build_tx.send(BuildRequest { reason }).await {
            error!(error = %err, "failed to send build request to builder");
            // If the builder channel is closed, there's not much we can do.
            // Bubble up the error so higher layers can decide what to do.
            return Err(err.into());
        }
        Ok(())
    }
}

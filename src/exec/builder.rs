// src/exec/builder.rs

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::engine::{BuildOutcome, BuildRequest, RuntimeEvent};
use crate::pipeline::StylePipeline;

/// Spawn the background builder loop.
///
/// The returned `mpsc::Sender<BuildRequest>` is what the runtime uses as
/// `build_tx` in `engine::Runtime`. Requests are processed strictly one at a
/// time: a triggered build runs to completion before the next request is
/// picked up, so runs never overlap.
///
/// Environment errors from a run are logged here and reported as an aborted
/// outcome; per-file errors are already handled (logged and skipped) inside
/// the pipeline.
pub fn spawn_builder(
    pipeline: StylePipeline,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> mpsc::Sender<BuildRequest> {
    let (tx, mut rx) = mpsc::channel::<BuildRequest>(16);

    tokio::spawn(async move {
        info!("builder loop started");
        while let Some(request) = rx.recv().await {
            info!(reason = ?request.reason, "starting style build");

            let outcome = match pipeline.build().await {
                Ok(summary) => BuildOutcome::Finished(summary),
                Err(err) => {
                    error!(error = %format!("{err:#}"), "build run aborted");
                    BuildOutcome::Aborted
                }
            };

            if runtime_tx
                .send(RuntimeEvent::BuildCompleted { outcome })
                .await
                .is_err()
            {
                // Runtime is gone; stop looping.
                break;
            }
        }
        info!("builder loop finished (channel closed)");
    });

    tx
}

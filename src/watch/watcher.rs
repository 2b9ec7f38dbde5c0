// src/watch/watcher.rs

use std::path::{Path, PathBuf};

use anyhow::Result;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::{RuntimeEvent, TriggerReason};
use crate::watch::patterns::SourceWatchProfile;

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive for
/// as long as needed. Dropping this handle will stop file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Spawn a filesystem watcher that observes the source directory
/// (non-recursively, matching the flat source layout) and sends
/// `RuntimeEvent::BuildTriggered` whenever an event touches a path matching
/// the source profile.
///
/// - `source_dir` is the directory holding the SCSS sources.
/// - `profile` is the compiled source pattern set.
/// - `runtime_tx` is the channel into the main runtime.
pub fn spawn_watcher(
    source_dir: impl Into<PathBuf>,
    profile: SourceWatchProfile,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    let source_dir = source_dir.into();
    let source_dir = source_dir
        .canonicalize()
        .unwrap_or_else(|_| source_dir.clone()); // best-effort

    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel::<Event>();

    // Closure called synchronously by notify whenever an event arrives.
    let mut watcher = RecommendedWatcher::new(
        {
            let event_tx = event_tx.clone();
            move |res: notify::Result<Event>| {
                match res {
                    Ok(event) => {
                        if let Err(err) = event_tx.send(event) {
                            // We can't log via tracing here easily, so fallback to stderr.
                            eprintln!("stylepipe: failed to forward notify event: {err}");
                        }
                    }
                    Err(err) => {
                        eprintln!("stylepipe: file watch error: {err}");
                    }
                }
            }
        },
        Config::default(),
    )?;

    watcher.watch(&source_dir, RecursiveMode::NonRecursive)?;

    info!("file watcher started on {:?}", source_dir);

    // Async task that consumes notify events and forwards rebuild triggers to
    // the runtime. Creates, modifications and deletions all count; the build
    // re-enumerates the source set from scratch anyway.
    let async_root = source_dir.clone();
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            debug!("received notify event: {:?}", event);

            let touched = event.paths.iter().any(|path| {
                match relative_str(&async_root, path) {
                    Some(rel) => profile.matches(&rel),
                    None => {
                        warn!(
                            "could not relativize path {:?} against source dir {:?}",
                            path, async_root
                        );
                        false
                    }
                }
            });

            if !touched {
                continue;
            }

            debug!(paths = ?event.paths, "watch match -> triggering rebuild");
            if let Err(err) = runtime_tx
                .send(RuntimeEvent::BuildTriggered {
                    reason: TriggerReason::FileWatch,
                })
                .await
            {
                warn!("failed to send RuntimeEvent::BuildTriggered: {err}");
                // If the runtime channel is closed, there's no point
                // keeping the watcher loop alive.
                return;
            }
        }

        debug!("file watcher loop ended");
    });

    Ok(WatcherHandle { _inner: watcher })
}

/// Convert a path into a string relative to `root`, with forward slashes.
///
/// Returns `None` if the path is not under `root` and cannot be relativized.
fn relative_str(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let s = rel.to_string_lossy().replace('\\', "/");
    Some(s)
}

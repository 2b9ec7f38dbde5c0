// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod pipeline;
pub mod watch;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::loader::load_for_cli;
use crate::config::model::ConfigFile;
use crate::engine::{RebuildQueue, Runtime, RuntimeEvent, RuntimeOptions, TriggerReason};
use crate::pipeline::StylePipeline;
use crate::watch::SourceWatchProfile;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the build pipeline
/// - the builder loop
/// - (optional) file watcher
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let (cfg, root) = load_for_cli(args.config.as_deref())?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let pipeline = StylePipeline::from_config(&cfg, &root)?;

    // Runtime event channel.
    let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

    // Builder loop.
    let build_tx = exec::spawn_builder(pipeline, rt_tx.clone());

    // Optional file watcher (disabled in --once mode).
    let _watcher_handle = if !args.once {
        let profile =
            SourceWatchProfile::from_lists(&cfg.source.patterns, &cfg.source.exclude)?;
        let source_dir = root.join(&cfg.source.dir);
        Some(watch::spawn_watcher(source_dir, profile, rt_tx.clone())?)
    } else {
        None
    };

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    // Seed the initial build at startup; watch mode keeps going from there.
    info!("initial build triggered at startup");
    rt_tx
        .send(RuntimeEvent::BuildTriggered {
            reason: TriggerReason::Startup,
        })
        .await?;

    let options = RuntimeOptions {
        exit_when_idle: args.once,
    };

    let runtime = Runtime::new(RebuildQueue::new(), options, rt_rx, build_tx);
    runtime.run().await
}

/// Simple dry-run output: print the resolved pipeline configuration.
fn print_dry_run(cfg: &ConfigFile) {
    println!("stylepipe dry-run");
    println!("  source.dir = {}", cfg.source.dir);
    println!("  source.patterns = {:?}", cfg.source.patterns);
    if !cfg.source.exclude.is_empty() {
        println!("  source.exclude = {:?}", cfg.source.exclude);
    }
    println!("  output.dir = {}", cfg.output.dir);
    println!("  compile.style = {}", cfg.compile.style);
    if !cfg.compile.include_paths.is_empty() {
        println!("  compile.include_paths = {:?}", cfg.compile.include_paths);
    }
    println!("  compile.normalize = {}", cfg.compile.normalize);
    println!("  prefix.browsers = {:?}", cfg.prefix.browsers);
}

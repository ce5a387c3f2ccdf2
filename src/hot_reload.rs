//! # Hot Reload Module
//!
//! Watch mode: regenerate every model whenever the schema file changes.
//!
//! ## Reload Process
//!
//! 1. **Detection** - a notify watcher on the schema's directory forwards
//!    events for the schema file into a channel
//! 2. **Settle** - [`ChangeQueue`] waits out the debounce window and folds any
//!    further events into the same trigger
//! 3. **Scan** - the schema is re-read and [`crate::schema::scan_models`] lists
//!    every model in source order
//! 4. **Generate** - [`run_batch`] regenerates each model sequentially
//!
//! ## Coalescing
//!
//! Generation is single-threaded. Events that arrive while a batch is running
//! are not interleaved with it: they set a re-scan flag that is consumed once
//! the batch completes, so any number of mid-batch saves costs exactly one
//! extra batch.
//!
//! ```text
//! Idle ─change─▶ Scanning ─▶ Generating(m1) ─▶ … ─▶ Generating(mN) ─▶ Idle
//!                   ▲                                                  │
//!                   └──────────── re-scan requested ───────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! A failure for one model is logged and recorded in the [`BatchReport`];
//! the remaining models in the batch still run and the loop keeps watching.

use notify::{Config, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, warn};

use crate::error::GenerateError;
use crate::generator::Generator;
use crate::schema::model_names;

/// Where the watch loop is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchState {
    Idle,
    Scanning,
    Generating(String),
}

impl fmt::Display for WatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WatchState::Idle => write!(f, "idle"),
            WatchState::Scanning => write!(f, "scanning"),
            WatchState::Generating(model) => write!(f, "generating({model})"),
        }
    }
}

/// Result for one model in a batch.
#[derive(Debug)]
pub struct ModelOutcome {
    pub model: String,
    pub result: Result<Vec<PathBuf>, GenerateError>,
}

/// Outcomes of one batch in source order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ModelOutcome>,
}

impl BatchReport {
    /// Models attempted, in order.
    pub fn models(&self) -> Vec<&str> {
        self.outcomes.iter().map(|o| o.model.as_str()).collect()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Regenerate every model found in `source`, in source order.
///
/// A failing model is logged and recorded; it never stops the batch.
pub async fn run_batch(generator: &Generator, source: &str, output_dir: &Path) -> BatchReport {
    info!(state = %WatchState::Scanning, "scanning schema for models");
    let models = model_names(source);
    if models.is_empty() {
        warn!("no model blocks found in schema");
    }

    let mut report = BatchReport::default();
    for model in models {
        info!(state = %WatchState::Generating(model.clone()), "generating {model}");
        let result = generator
            .generate_from_source(source, &model, output_dir)
            .await;
        if let Err(e) = &result {
            error!(model = %model, error = %e, "❌ generation failed");
        }
        report.outcomes.push(ModelOutcome { model, result });
    }
    report
}

/// Single-slot queue of schema change notifications.
///
/// Any burst of events collapses into one trigger; events seen during a
/// batch collapse into one pending re-scan.
pub struct ChangeQueue {
    rx: UnboundedReceiver<()>,
    debounce: Duration,
    rescan_requested: bool,
}

impl ChangeQueue {
    pub fn new(rx: UnboundedReceiver<()>, debounce: Duration) -> Self {
        Self {
            rx,
            debounce,
            rescan_requested: false,
        }
    }

    /// Wait until a batch should start.
    ///
    /// Returns immediately when a re-scan is pending. Returns `false` once
    /// every sender is gone and nothing is pending.
    pub async fn next_trigger(&mut self) -> bool {
        if !self.rescan_requested && self.rx.recv().await.is_none() {
            return false;
        }
        self.rescan_requested = false;
        if !self.debounce.is_zero() {
            tokio::time::sleep(self.debounce).await;
        }
        self.drain();
        true
    }

    /// Mark the running batch finished. Returns whether events arrived
    /// meanwhile, in which case the next trigger fires without waiting.
    pub fn finish_batch(&mut self) -> bool {
        self.rescan_requested = self.drain();
        self.rescan_requested
    }

    pub fn rescan_requested(&self) -> bool {
        self.rescan_requested
    }

    fn drain(&mut self) -> bool {
        let mut any = false;
        while self.rx.try_recv().is_ok() {
            any = true;
        }
        any
    }
}

/// Watch `schema_path` and send `()` on every modification or re-creation.
///
/// The parent directory is watched so editors that save by rename are still
/// seen; events for other files are ignored.
pub fn watch_schema(
    schema_path: &Path,
    tx: UnboundedSender<()>,
) -> notify::Result<RecommendedWatcher> {
    let file_name: Option<OsString> = schema_path.file_name().map(OsString::from);
    let dir = match schema_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if !matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_)) {
                    return;
                }
                let relevant = event
                    .paths
                    .iter()
                    .any(|p| p.file_name().map(OsString::from) == file_name);
                if relevant && tx.send(()).is_err() {
                    debug!("watch loop stopped; dropping change event");
                }
            }
            Err(e) => error!("watch error: {e:?}"),
        },
        Config::default(),
    )?;

    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}

/// Drive batches from `queue` until it closes. Returns the number of batches run.
pub async fn run_watch_loop(
    generator: &Generator,
    schema_path: &Path,
    output_dir: &Path,
    mut queue: ChangeQueue,
) -> usize {
    let mut batches = 0;
    while queue.next_trigger().await {
        info!("📄 Detected change in {}", schema_path.display());
        match generator.read_schema(schema_path).await {
            Ok(source) => {
                let report = run_batch(generator, &source, output_dir).await;
                info!(
                    succeeded = report.succeeded(),
                    failed = report.failed(),
                    "batch complete"
                );
            }
            Err(e) => error!(error = %e, "❌ could not read schema"),
        }
        batches += 1;
        if queue.finish_batch() {
            info!("schema changed during generation; re-scanning");
        } else {
            info!(state = %WatchState::Idle, "waiting for changes");
        }
    }
    batches
}

/// Continuous mode: regenerate all models on every schema change.
///
/// Runs until the process is terminated.
///
/// # Errors
///
/// Returns an error only if the filesystem watcher cannot be started.
pub async fn watch(
    generator: &Generator,
    schema_path: &Path,
    output_dir: &Path,
) -> anyhow::Result<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    let _watcher = watch_schema(schema_path, tx)?;
    info!(
        "👀 Watching for changes in {} (output to \"{}\")...",
        schema_path.display(),
        output_dir.display()
    );
    let queue = ChangeQueue::new(rx, generator.config().debounce);
    run_watch_loop(generator, schema_path, output_dir, queue).await;
    Ok(())
}

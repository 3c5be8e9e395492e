//! Batch download orchestration
//!
//! Drives the per-item download loop: resolve a collision-free path, hand
//! the item to the transcoder, record the outcome, move on. One failing
//! item never aborts the batch; cancellation is cooperative and only takes
//! effect between items.

use crate::batch::events::BatchEvent;
use crate::batch::naming;
use crate::batch::progress::{BatchProgress, ProgressSnapshot};
use crate::batch::request::{AudioFormat, AudioQuality, DownloadRequest};
use crate::batch::summary::DownloadOutcome;
use crate::extractor::Item;
use crate::transcoder::Transcoder;
use crate::utils::error::TunegrabError;
use crate::utils::paths::unique_path;
use anyhow::Result;
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Sequences single-item downloads over a selected list of items.
///
/// The transcoder is injected so the orchestrator has no knowledge of
/// where external tools live. Destination directories are effectively
/// owned by one run at a time; callers must not point two concurrent runs
/// at the same directory (not enforced here).
pub struct BatchOrchestrator {
    transcoder: Arc<dyn Transcoder>,
}

impl BatchOrchestrator {
    pub fn new(transcoder: Arc<dyn Transcoder>) -> Self {
        Self { transcoder }
    }

    /// Compute names from the request's strategy, then run the batch.
    pub async fn execute(
        &self,
        items: Vec<Item>,
        request: &DownloadRequest,
        progress: Arc<BatchProgress>,
        cancel: CancellationToken,
        events_tx: Option<mpsc::Sender<BatchEvent>>,
    ) -> Result<Vec<DownloadOutcome>> {
        let names = naming::names(&items, request.naming, request.prefix.as_deref());
        self.run(items, names, request, progress, cancel, events_tx)
            .await
    }

    /// Run the batch with explicit per-item names.
    ///
    /// `names` must parallel `items` (same order, same length). Structural
    /// problems (empty batch, length mismatch, wrong-sized counters) fail
    /// here, before any item is touched. Everything after that is
    /// localized: outcomes come back in input order, one per processed
    /// item, and cancellation drops the not-yet-started remainder.
    pub async fn run(
        &self,
        items: Vec<Item>,
        names: Vec<String>,
        request: &DownloadRequest,
        progress: Arc<BatchProgress>,
        cancel: CancellationToken,
        events_tx: Option<mpsc::Sender<BatchEvent>>,
    ) -> Result<Vec<DownloadOutcome>> {
        if items.is_empty() {
            return Err(TunegrabError::InvalidInput("no items selected".to_string()).into());
        }
        if items.len() != names.len() {
            return Err(TunegrabError::InvalidInput(format!(
                "{} items but {} names",
                items.len(),
                names.len()
            ))
            .into());
        }
        if progress.total() != items.len() {
            return Err(TunegrabError::InvalidInput(format!(
                "progress sized for {} items, batch has {}",
                progress.total(),
                items.len()
            ))
            .into());
        }

        let batch_id = Uuid::new_v4().to_string();
        let destination = request.effective_destination();
        let total = items.len();
        info!(
            "Starting batch {} ({} items -> {})",
            batch_id,
            total,
            destination.display()
        );
        emit(
            &events_tx,
            BatchEvent::BatchStarted {
                batch_id: batch_id.clone(),
                total,
                timestamp: Utc::now(),
            },
        )
        .await;

        let mut outcomes = Vec::with_capacity(total);
        let mut cancelled = false;

        for (index, (item, name)) in items.into_iter().zip(names).enumerate() {
            // Cooperative stop: checked between items, never mid-download
            if cancel.is_cancelled() {
                warn!(
                    "Batch {} cancelled after {} of {} items",
                    batch_id,
                    outcomes.len(),
                    total
                );
                cancelled = true;
                break;
            }

            emit(
                &events_tx,
                BatchEvent::ItemStarted {
                    index,
                    title: item.title.clone(),
                    timestamp: Utc::now(),
                },
            )
            .await;

            let path = unique_path(&destination, &name, request.format.extension());
            let result = self
                .download_one_isolated(&item, &path, request.format, request.quality)
                .await;

            let outcome = match result {
                Ok(path) => {
                    progress.record_success();
                    debug!("Downloaded {} -> {}", item.title, path.display());
                    DownloadOutcome::success(item, path)
                }
                Err(e) => {
                    progress.record_failure();
                    warn!("Download failed for {}: {}", item.title, e);
                    DownloadOutcome::failure(item, e.to_string())
                }
            };

            emit(
                &events_tx,
                BatchEvent::ItemFinished {
                    index,
                    title: outcome.item.title.clone(),
                    path: outcome.path.clone(),
                    error: outcome.error.clone(),
                    timestamp: Utc::now(),
                },
            )
            .await;
            outcomes.push(outcome);
        }

        let snap = progress.snapshot();
        info!(
            "Batch {} finished: {} succeeded, {} failed, {} processed",
            batch_id, snap.succeeded, snap.failed, snap.processed
        );
        emit(
            &events_tx,
            BatchEvent::BatchFinished {
                batch_id,
                processed: snap.processed,
                succeeded: snap.succeeded,
                failed: snap.failed,
                cancelled,
                timestamp: Utc::now(),
            },
        )
        .await;

        Ok(outcomes)
    }

    /// Download a single item to `destination`.
    ///
    /// Creates the parent directory if missing, invokes the transcoder and
    /// verifies the output file actually exists afterwards (an engine that
    /// reports success without producing a file still counts as a failure).
    pub async fn download_one(
        &self,
        item: &Item,
        destination: &Path,
        format: AudioFormat,
        quality: AudioQuality,
    ) -> Result<PathBuf, TunegrabError> {
        transfer_item(
            Arc::clone(&self.transcoder),
            item.clone(),
            destination.to_path_buf(),
            format,
            quality,
        )
        .await
    }

    /// `download_one` on its own task, so a panicking engine is contained
    /// as a failed outcome instead of taking down the whole batch.
    async fn download_one_isolated(
        &self,
        item: &Item,
        destination: &Path,
        format: AudioFormat,
        quality: AudioQuality,
    ) -> Result<PathBuf, TunegrabError> {
        let handle = tokio::spawn(transfer_item(
            Arc::clone(&self.transcoder),
            item.clone(),
            destination.to_path_buf(),
            format,
            quality,
        ));

        match handle.await {
            Ok(result) => result,
            Err(e) => Err(TunegrabError::TranscodeError(format!(
                "download task panicked: {}",
                e
            ))),
        }
    }

    /// Start a batch on a background task and hand back a [`BatchHandle`].
    ///
    /// The foreground stays responsive: it can poll progress snapshots and
    /// request cancellation while the worker drains the list sequentially.
    /// At most one worker exists per handle.
    pub fn spawn(
        self: Arc<Self>,
        items: Vec<Item>,
        request: DownloadRequest,
        events_tx: Option<mpsc::Sender<BatchEvent>>,
    ) -> BatchHandle {
        let progress = Arc::new(BatchProgress::new(items.len()));
        let cancel = CancellationToken::new();

        let worker_progress = Arc::clone(&progress);
        let worker_cancel = cancel.clone();
        let handle = tokio::spawn(async move {
            self.execute(items, &request, worker_progress, worker_cancel, events_tx)
                .await
        });

        BatchHandle {
            progress,
            cancel,
            handle,
        }
    }
}

/// Foreground view of a spawned batch: read progress, request stop, await
/// the ordered outcomes.
pub struct BatchHandle {
    progress: Arc<BatchProgress>,
    cancel: CancellationToken,
    handle: JoinHandle<Result<Vec<DownloadOutcome>>>,
}

impl BatchHandle {
    /// Current counters; safe to call from any task at any time
    pub fn progress(&self) -> ProgressSnapshot {
        self.progress.snapshot()
    }

    /// Request a cooperative stop before the next item starts
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the worker and return the outcomes produced so far
    pub async fn wait(self) -> Result<Vec<DownloadOutcome>> {
        self.handle
            .await
            .map_err(|e| anyhow::anyhow!("batch worker panicked: {}", e))?
    }
}

/// The single-item transfer: ensure the parent directory, run the engine,
/// then verify the output file landed (a silent engine success without a
/// file on disk is still a failure).
async fn transfer_item(
    transcoder: Arc<dyn Transcoder>,
    item: Item,
    destination: PathBuf,
    format: AudioFormat,
    quality: AudioQuality,
) -> Result<PathBuf, TunegrabError> {
    if let Some(parent) = destination.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            TunegrabError::FilesystemError(format!("cannot create {}: {}", parent.display(), e))
        })?;
    }

    transcoder
        .convert(&item.url, &destination, format, quality.bitrate())
        .await
        .map_err(|e| TunegrabError::TranscodeError(e.to_string()))?;

    if !destination.exists() {
        return Err(TunegrabError::TranscodeError(format!(
            "engine reported success but no file at {}",
            destination.display()
        )));
    }

    Ok(destination)
}

async fn emit(tx: &Option<mpsc::Sender<BatchEvent>>, event: BatchEvent) {
    if let Some(tx) = tx {
        if let Err(e) = tx.send(event).await {
            debug!("No observer for batch event: {}", e);
        }
    }
}

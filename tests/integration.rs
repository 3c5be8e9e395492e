//! End-to-end tests over the public API
//!
//! These drive the batch pipeline the way the CLI does, with a scripted
//! transcoder standing in for yt-dlp.

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tunegrab::batch::events::BatchEvent;
use tunegrab::batch::{
    names, summarize, AudioFormat, AudioQuality, BatchOrchestrator, BatchProgress,
    DownloadRequest, NamingStrategy,
};
use tunegrab::extractor::Item;
use tunegrab::transcoder::Transcoder;
use tunegrab::utils::zip_directory;

/// Fake engine: writes a small file, fails for URLs containing "bad"
struct FakeEngine;

#[async_trait]
impl Transcoder for FakeEngine {
    async fn convert(
        &self,
        source_url: &str,
        destination: &Path,
        _format: AudioFormat,
        _bitrate: u32,
    ) -> Result<()> {
        if source_url.contains("bad") {
            anyhow::bail!("unavailable: {}", source_url);
        }
        tokio::fs::write(destination, b"fake audio payload").await?;
        Ok(())
    }
}

fn sample_item(id: &str, title: &str) -> Item {
    Item {
        url: format!("https://www.youtube.com/watch?v={}", id),
        title: title.to_string(),
        duration: Some(180),
        ..Default::default()
    }
}

fn sample_playlist(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| sample_item(&format!("vid{}", i), &format!("Track {}", i)))
        .collect()
}

#[tokio::test]
async fn test_full_pipeline_from_items_to_summary() {
    let temp = TempDir::new().unwrap();
    let mut request = DownloadRequest::new(temp.path().to_path_buf());
    request.group_dir = Some("Mix 2024".to_string());

    let orchestrator = Arc::new(BatchOrchestrator::new(Arc::new(FakeEngine)));
    let handle = orchestrator.spawn(sample_playlist(5), request, None);
    let outcomes = handle.wait().await.unwrap();

    let summary = summarize(&outcomes);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.successful, 5);
    assert_eq!(summary.success_rate, 100.0);

    // Files land in the group subfolder
    let group = temp.path().join("Mix 2024");
    for i in 0..5 {
        assert!(group.join(format!("Track {}.mp3", i)).exists());
    }
}

#[tokio::test]
async fn test_mixed_batch_summary_and_zip_packaging() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("album");
    let request = DownloadRequest::new(dest.clone());

    let mut items = sample_playlist(3);
    items[1].url = "https://www.youtube.com/watch?v=bad1".to_string();

    let orchestrator = Arc::new(BatchOrchestrator::new(Arc::new(FakeEngine)));
    let handle = orchestrator.spawn(items, request, None);
    let outcomes = handle.wait().await.unwrap();

    let summary = summarize(&outcomes);
    assert_eq!(summary.successful, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.failed_titles, vec!["Track 1"]);
    assert!((summary.success_rate - 66.666).abs() < 0.01);

    // Package the successes
    let archive = zip_directory(&dest, "album").unwrap();
    assert!(archive.exists());
    let mut zip = zip::ZipArchive::new(std::fs::File::open(&archive).unwrap()).unwrap();
    assert_eq!(zip.len(), 2);
    assert!(zip.by_name("Track 0.mp3").is_ok());
}

#[tokio::test]
async fn test_events_arrive_in_batch_order() {
    let temp = TempDir::new().unwrap();
    let request = DownloadRequest::new(temp.path().to_path_buf());
    let (tx, mut rx) = mpsc::channel(64);

    let orchestrator = BatchOrchestrator::new(Arc::new(FakeEngine));
    let items = sample_playlist(2);
    let progress = Arc::new(BatchProgress::new(items.len()));
    orchestrator
        .execute(items, &request, progress, CancellationToken::new(), Some(tx))
        .await
        .unwrap();

    let mut events = Vec::new();
    while let Some(event) = rx.recv().await {
        events.push(event);
    }

    assert_eq!(events.len(), 6);
    assert!(matches!(events[0], BatchEvent::BatchStarted { total: 2, .. }));
    assert!(matches!(events[1], BatchEvent::ItemStarted { index: 0, .. }));
    assert!(matches!(events[2], BatchEvent::ItemFinished { index: 0, .. }));
    assert!(matches!(events[3], BatchEvent::ItemStarted { index: 1, .. }));
    assert!(matches!(events[4], BatchEvent::ItemFinished { index: 1, .. }));
    match &events[5] {
        BatchEvent::BatchFinished {
            succeeded,
            failed,
            cancelled,
            ..
        } => {
            assert_eq!(*succeeded, 2);
            assert_eq!(*failed, 0);
            assert!(!cancelled);
        }
        other => panic!("expected BatchFinished, got {:?}", other),
    }
}

#[tokio::test]
async fn test_naming_strategies_produce_expected_files() {
    let temp = TempDir::new().unwrap();
    let items = sample_playlist(2);

    let titles = names(&items, NamingStrategy::OriginalTitle, None);
    assert_eq!(titles, vec!["Track 0", "Track 1"]);

    let prefixed = names(&items, NamingStrategy::CustomPrefix, Some("mix"));
    assert_eq!(prefixed, vec!["mix_1", "mix_2"]);

    let mut request = DownloadRequest::new(temp.path().to_path_buf());
    request.naming = NamingStrategy::CustomPrefix;
    request.prefix = Some("mix".to_string());
    request.quality = AudioQuality::High;

    let orchestrator = Arc::new(BatchOrchestrator::new(Arc::new(FakeEngine)));
    let outcomes = orchestrator.spawn(items, request, None).wait().await.unwrap();
    assert!(outcomes.iter().all(|o| o.succeeded()));
    assert!(temp.path().join("mix_1.mp3").exists());
    assert!(temp.path().join("mix_2.mp3").exists());
}

#[tokio::test]
async fn test_cancel_from_foreground_stops_remainder() {
    let temp = TempDir::new().unwrap();
    let request = DownloadRequest::new(temp.path().to_path_buf());

    let orchestrator = Arc::new(BatchOrchestrator::new(Arc::new(FakeEngine)));
    let handle = orchestrator.spawn(sample_playlist(50), request, None);

    // Stop as early as possible; the in-flight item still completes
    handle.cancel();
    let outcomes = handle.wait().await.unwrap();

    assert!(outcomes.len() <= 50);
    let snap_total: usize = outcomes.iter().filter(|o| o.succeeded()).count();
    assert_eq!(
        snap_total,
        outcomes.len(),
        "processed items all succeed with the fake engine"
    );
}

//! Tunegrab - Batch YouTube Audio Downloader
//!
//! A headless batch downloader that feeds yt-dlp extraction into a
//! sequential download orchestrator and reports a final summary.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tunegrab::batch::{summarize, BatchOrchestrator, DownloadRequest, NamingStrategy};
use tunegrab::batch::{AudioFormat, AudioQuality};
use tunegrab::extractor::{find_ytdlp, Extractor, Item, YtDlpExtractor};
use tunegrab::transcoder::YtDlpTranscoder;
use tunegrab::utils::{urls, zip_directory, AppSettings, TunegrabError};

#[derive(Parser)]
#[command(name = "tunegrab", about = "Batch YouTube audio downloader")]
struct Args {
    /// Video, playlist or channel URL
    url: String,

    /// Destination directory (defaults to the system download folder)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Audio format: mp3, m4a, wav, flac, webm
    #[arg(short, long, default_value = "mp3")]
    format: String,

    /// Quality tier: low, medium, high, very-high (or a bitrate: 128..320)
    #[arg(short, long, default_value = "medium")]
    quality: String,

    /// Naming strategy: title, prefix, numbered
    #[arg(short, long, default_value = "title")]
    naming: String,

    /// Prefix for the prefix naming strategy
    #[arg(long)]
    prefix: Option<String>,

    /// Subfolder under the destination (playlists get one per batch)
    #[arg(long)]
    group: Option<String>,

    /// Maximum items taken from a playlist
    #[arg(long)]
    max_items: Option<usize>,

    /// Package the finished batch into a zip archive next to the folder
    #[arg(long)]
    zip: bool,

    /// Print the final summary as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    // Check for yt-dlp before doing any work
    if find_ytdlp().is_none() {
        eprintln!("ERROR: yt-dlp not found on PATH or common locations");
        eprintln!("Please install yt-dlp:");
        eprintln!("  pip install yt-dlp");
        eprintln!("  or: brew install yt-dlp");
        eprintln!("  or visit: https://github.com/yt-dlp/yt-dlp");
        return Err(TunegrabError::YtDlpNotFound.into());
    }

    let settings = AppSettings::default();
    let format: AudioFormat = args.format.parse()?;
    let quality: AudioQuality = args.quality.parse()?;
    let naming: NamingStrategy = args.naming.parse()?;
    let destination = args.output.unwrap_or(settings.download_dir);
    let max_items = args.max_items.unwrap_or(settings.max_playlist_items);

    let items = collect_items(&args.url, max_items).await?;
    if items.is_empty() {
        println!("Nothing to download for {}", args.url);
        return Ok(());
    }
    println!("Queued {} item(s)", items.len());

    let mut request = DownloadRequest::new(destination);
    request.format = format;
    request.quality = quality;
    request.naming = naming;
    request.prefix = args.prefix;
    request.group_dir = args.group;

    let transcoder =
        Arc::new(YtDlpTranscoder::new()?.ffmpeg_location(settings.ffmpeg_location.clone()));
    let orchestrator = Arc::new(BatchOrchestrator::new(transcoder));

    let batch_dir = request.effective_destination();
    let handle = orchestrator.spawn(items, request, None);

    // Foreground progress loop; the worker drains the list on its own task
    while !handle.is_finished() {
        let snap = handle.progress();
        println!(
            "Progress: {}/{} ({} ok, {} failed)",
            snap.processed, snap.total, snap.succeeded, snap.failed
        );
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    let outcomes = handle.wait().await?;
    let summary = summarize(&outcomes);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Done: {}/{} succeeded ({:.1}%)",
            summary.successful, summary.total, summary.success_rate
        );
        for title in &summary.failed_titles {
            println!("  failed: {}", title);
        }
    }

    if args.zip && summary.successful > 0 {
        let name = batch_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "tunegrab".to_string());
        let archive = zip_directory(&batch_dir, &name)?;
        println!("Archive: {}", archive.display());
    }

    Ok(())
}

/// Resolve the URL into the list of items to download
async fn collect_items(url: &str, max_items: usize) -> Result<Vec<Item>> {
    let extractor = YtDlpExtractor::new()?;

    match urls::classify(url) {
        Some(urls::UrlKind::Watch) | Some(urls::UrlKind::Short) => {
            let item = extractor.fetch_one(url).await?;
            Ok(vec![item])
        }
        Some(urls::UrlKind::Playlist) => {
            println!("Fetching playlist entries...");
            extractor.fetch_playlist(url, max_items).await
        }
        Some(urls::UrlKind::Channel) => extractor.fetch_channel(url).await,
        None => Err(TunegrabError::InvalidUrl(url.to_string()).into()),
    }
}

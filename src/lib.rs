//! Tunegrab library
//!
//! Batch audio downloader built around yt-dlp: metadata extraction,
//! collision-safe naming, and a background batch orchestrator with
//! progress snapshots and cooperative cancellation.

pub mod batch;
pub mod extractor;
pub mod transcoder;
pub mod utils;

// Re-export main types for easier use
pub use batch::{
    AudioFormat, AudioQuality, BatchHandle, BatchOrchestrator, BatchProgress, DownloadOutcome,
    DownloadRequest, NamingStrategy, ProgressSnapshot, Summary,
};
pub use extractor::{Extractor, Item, YtDlpExtractor};
pub use transcoder::{Transcoder, YtDlpTranscoder};
pub use utils::{AppSettings, TunegrabError};

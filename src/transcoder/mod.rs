//! Audio transcoding capability
//!
//! The batch core never talks to ffmpeg or yt-dlp directly; it is handed a
//! `Transcoder` trait object by the caller. That keeps the core free of any
//! dependency on where external tools are installed.

pub mod ytdlp;

use crate::batch::request::AudioFormat;
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

pub use ytdlp::YtDlpTranscoder;

/// External audio extraction/transcoding engine.
///
/// `convert` is expected to leave the finished file at `destination` on
/// success. Retry policy, timeouts and network behavior are the engine's
/// concern, not the caller's.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn convert(
        &self,
        source_url: &str,
        destination: &Path,
        format: AudioFormat,
        bitrate: u32,
    ) -> Result<()>;
}

//! yt-dlp backed audio transcoding
//!
//! One `yt-dlp -x` invocation per item handles both the media download and
//! the ffmpeg post-processing step. `--no-part` keeps partial files out of
//! the destination directory.

use crate::batch::request::AudioFormat;
use crate::extractor::ytdlp::find_ytdlp;
use crate::transcoder::Transcoder;
use crate::utils::error::TunegrabError;
use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info};

/// Transcoder that drives yt-dlp's `-x` audio extraction mode
pub struct YtDlpTranscoder {
    ytdlp_path: PathBuf,
    /// Explicit ffmpeg location forwarded to yt-dlp, if configured
    ffmpeg_location: Option<PathBuf>,
}

impl YtDlpTranscoder {
    pub fn new() -> Result<Self> {
        let ytdlp_path = find_ytdlp().ok_or(TunegrabError::YtDlpNotFound)?;
        info!("Transcoder using yt-dlp at: {}", ytdlp_path.display());
        Ok(Self {
            ytdlp_path,
            ffmpeg_location: None,
        })
    }

    pub fn with_binary(ytdlp_path: PathBuf) -> Self {
        Self {
            ytdlp_path,
            ffmpeg_location: None,
        }
    }

    pub fn ffmpeg_location(mut self, location: Option<PathBuf>) -> Self {
        self.ffmpeg_location = location;
        self
    }
}

#[async_trait]
impl Transcoder for YtDlpTranscoder {
    async fn convert(
        &self,
        source_url: &str,
        destination: &Path,
        format: AudioFormat,
        bitrate: u32,
    ) -> Result<()> {
        debug!(
            "Transcoding {} -> {} ({}@{}k)",
            source_url,
            destination.display(),
            format,
            bitrate
        );

        let mut cmd = AsyncCommand::new(&self.ytdlp_path);
        cmd.arg("-x")
            .arg("--audio-format")
            .arg(format.extension())
            .arg("--audio-quality")
            .arg(format!("{}K", bitrate))
            .arg("--no-part")
            .arg("--no-warnings")
            .arg("--no-playlist")
            .arg("-o")
            .arg(destination)
            .arg(source_url);

        if let Some(ffmpeg) = &self.ffmpeg_location {
            cmd.arg("--ffmpeg-location").arg(ffmpeg);
        }

        let output = cmd.output().await?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp transcode failed: {}", error_msg);
            return Err(TunegrabError::TranscodeError(error_msg.trim().to_string()).into());
        }

        Ok(())
    }
}

//! Application configuration

use crate::batch::request::{AudioFormat, AudioQuality};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application settings.
///
/// An explicit value passed into constructors; there is no ambient global
/// configuration anywhere in the crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Where finished audio files land
    pub download_dir: PathBuf,

    /// Default audio format
    pub audio_format: AudioFormat,

    /// Default quality tier
    pub quality: AudioQuality,

    /// Maximum videos taken from a playlist
    pub max_playlist_items: usize,

    /// Explicit ffmpeg location handed to the transcoder, if any
    pub ffmpeg_location: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            download_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from("./downloads")),
            audio_format: AudioFormat::default(),
            quality: AudioQuality::default(),
            max_playlist_items: 1000,
            ffmpeg_location: None,
        }
    }
}

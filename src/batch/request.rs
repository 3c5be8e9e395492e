//! Batch request types: audio format, quality tier and per-run options

use crate::batch::naming::NamingStrategy;
use crate::utils::error::TunegrabError;
use crate::utils::filename::sanitize_filename;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Audio container/codec the transcoder is asked to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Mp3,
    M4a,
    Wav,
    Flac,
    Webm,
}

impl AudioFormat {
    /// File extension without the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::M4a => "m4a",
            AudioFormat::Wav => "wav",
            AudioFormat::Flac => "flac",
            AudioFormat::Webm => "webm",
        }
    }
}

impl Default for AudioFormat {
    fn default() -> Self {
        AudioFormat::Mp3
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for AudioFormat {
    type Err = TunegrabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mp3" => Ok(AudioFormat::Mp3),
            "m4a" => Ok(AudioFormat::M4a),
            "wav" => Ok(AudioFormat::Wav),
            "flac" => Ok(AudioFormat::Flac),
            "webm" => Ok(AudioFormat::Webm),
            other => Err(TunegrabError::InvalidInput(format!(
                "unknown audio format: {}",
                other
            ))),
        }
    }
}

/// Quality tier mapped onto a target bitrate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioQuality {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl AudioQuality {
    /// Target bitrate in kbps
    pub fn bitrate(&self) -> u32 {
        match self {
            AudioQuality::Low => 128,
            AudioQuality::Medium => 192,
            AudioQuality::High => 256,
            AudioQuality::VeryHigh => 320,
        }
    }

    /// Human-readable label for display
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioQuality::Low => "Low (128 kbps)",
            AudioQuality::Medium => "Medium (192 kbps)",
            AudioQuality::High => "High (256 kbps)",
            AudioQuality::VeryHigh => "Very High (320 kbps)",
        }
    }
}

impl Default for AudioQuality {
    fn default() -> Self {
        AudioQuality::Medium
    }
}

impl FromStr for AudioQuality {
    type Err = TunegrabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" | "128" => Ok(AudioQuality::Low),
            "medium" | "192" => Ok(AudioQuality::Medium),
            "high" | "256" => Ok(AudioQuality::High),
            "veryhigh" | "very-high" | "320" => Ok(AudioQuality::VeryHigh),
            other => Err(TunegrabError::InvalidInput(format!(
                "unknown quality tier: {}",
                other
            ))),
        }
    }
}

/// Everything one batch invocation needs besides the items themselves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadRequest {
    /// Destination directory; created if missing
    pub destination: PathBuf,
    pub format: AudioFormat,
    pub quality: AudioQuality,
    pub naming: NamingStrategy,
    /// Only meaningful with `NamingStrategy::CustomPrefix`
    pub prefix: Option<String>,
    /// Optional subfolder (e.g. the playlist title) under the destination
    pub group_dir: Option<String>,
}

impl DownloadRequest {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
            format: AudioFormat::default(),
            quality: AudioQuality::default(),
            naming: NamingStrategy::OriginalTitle,
            prefix: None,
            group_dir: None,
        }
    }

    /// Destination with the sanitized group subfolder applied, if any
    pub fn effective_destination(&self) -> PathBuf {
        match &self.group_dir {
            Some(group) if !group.trim().is_empty() => {
                self.destination.join(sanitize_filename(group))
            }
            _ => self.destination.clone(),
        }
    }
}

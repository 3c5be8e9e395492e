//! Error handling for tunegrab

use thiserror::Error;

/// Main error type for tunegrab
#[derive(Debug, Error)]
pub enum TunegrabError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to extract video info: {0}")]
    ExtractionError(String),

    #[error("Transcode failed: {0}")]
    TranscodeError(String),

    #[error("Filesystem error: {0}")]
    FilesystemError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

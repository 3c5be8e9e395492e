//! yt-dlp wrapper for metadata extraction
//!
//! Extraction shells out to yt-dlp with `--dump-json`; network behavior,
//! retries and geo handling all live inside the engine.

use crate::extractor::models::Item;
use crate::extractor::traits::Extractor;
use crate::utils::error::TunegrabError;
use crate::utils::urls;
use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command as AsyncCommand;
use tracing::{debug, error, info, warn};

/// Metadata extractor backed by the yt-dlp binary
pub struct YtDlpExtractor {
    ytdlp_path: PathBuf,
}

impl YtDlpExtractor {
    /// Initialize the extractor, locating yt-dlp on this machine.
    ///
    /// Search order: system PATH, then common installation paths.
    pub fn new() -> Result<Self> {
        let ytdlp_path = match find_ytdlp() {
            Some(path) => {
                info!("Found yt-dlp at: {}", path.display());
                path
            }
            None => {
                error!("yt-dlp not found anywhere");
                return Err(TunegrabError::YtDlpNotFound.into());
            }
        };

        Ok(Self { ytdlp_path })
    }

    /// Use an explicit yt-dlp binary (tests, unusual installs)
    pub fn with_binary(ytdlp_path: PathBuf) -> Self {
        Self { ytdlp_path }
    }

    /// Path to the yt-dlp binary in use
    pub fn ytdlp_path(&self) -> &PathBuf {
        &self.ytdlp_path
    }
}

#[async_trait]
impl Extractor for YtDlpExtractor {
    fn id(&self) -> &'static str {
        "ytdlp"
    }

    fn supports(&self, url: &str) -> bool {
        urls::is_valid(url)
    }

    /// Uses: yt-dlp --dump-json --no-download
    async fn fetch_one(&self, url: &str) -> Result<Item> {
        if !self.supports(url) {
            return Err(TunegrabError::InvalidUrl(url.to_string()).into());
        }
        debug!("Extracting video info for URL: {}", url);

        let output = AsyncCommand::new(&self.ytdlp_path)
            .arg("--dump-json")
            .arg("--no-download")
            .arg("--no-warnings")
            .arg(url)
            .output()
            .await?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp extraction failed: {}", error_msg);
            return Err(TunegrabError::ExtractionError(error_msg.to_string()).into());
        }

        let json_str = String::from_utf8_lossy(&output.stdout);
        let item: Item = serde_json::from_str(json_str.trim())?;
        Ok(item)
    }

    /// Uses: yt-dlp --flat-playlist --dump-json, one JSON object per line
    async fn fetch_playlist(&self, url: &str, max_items: usize) -> Result<Vec<Item>> {
        if !urls::is_playlist(url) {
            return Err(TunegrabError::InvalidUrl(url.to_string()).into());
        }
        debug!("Extracting playlist info for URL: {}", url);

        let output = AsyncCommand::new(&self.ytdlp_path)
            .arg("--flat-playlist")
            .arg("--dump-json")
            .arg("--no-warnings")
            .arg(url)
            .output()
            .await?;

        if !output.status.success() {
            let error_msg = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp playlist extraction failed: {}", error_msg);
            return Err(TunegrabError::ExtractionError(error_msg.to_string()).into());
        }

        let json_str = String::from_utf8_lossy(&output.stdout);
        let mut items = Vec::new();

        for line in json_str.lines() {
            if line.trim().is_empty() {
                continue;
            }
            if items.len() >= max_items {
                break;
            }

            match serde_json::from_str::<Item>(line) {
                Ok(item) => items.push(item),
                Err(e) => {
                    // One bad entry must not sink the playlist
                    warn!("Failed to parse playlist entry: {}", e);
                }
            }
        }

        Ok(items)
    }

    // fetch_channel deliberately not overridden: channel enumeration stays
    // the trait's empty-list default until the engine grows support for it.
}

/// Find yt-dlp on the system PATH or in common installation locations
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Ok(path) = which::which("yt-dlp") {
        if path.exists() {
            return Some(path);
        }
    }

    let common_paths = [
        "/opt/homebrew/bin/yt-dlp",
        "/usr/local/bin/yt-dlp",
        "/usr/bin/yt-dlp",
        "~/.local/bin/yt-dlp",
    ];

    for path_str in common_paths {
        let expanded = if let Some(rest) = path_str.strip_prefix("~/") {
            dirs::home_dir().map(|home| home.join(rest))?
        } else {
            PathBuf::from(path_str)
        };

        if expanded.exists() && is_executable(&expanded) {
            return Some(expanded);
        }
    }

    warn!("yt-dlp not found on PATH or common locations");
    None
}

fn is_executable(path: &PathBuf) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        if let Ok(metadata) = std::fs::metadata(path) {
            return metadata.permissions().mode() & 0o111 != 0;
        }
        false
    }

    #[cfg(not(unix))]
    {
        path.exists()
    }
}

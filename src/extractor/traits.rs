use crate::extractor::models::Item;
use anyhow::Result;
use async_trait::async_trait;

/// Core trait for metadata extraction engines.
///
/// Isolates the application from the concrete extraction method (yt-dlp
/// subprocess, a future native implementation, a test double).
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Unique identifier for this extractor (e.g. "ytdlp")
    fn id(&self) -> &'static str;

    /// Whether this extractor can handle the given URL
    fn supports(&self, url: &str) -> bool;

    /// Fetch metadata for a single video
    async fn fetch_one(&self, url: &str) -> Result<Item>;

    /// Fetch metadata for every video in a playlist, up to `max_items`
    async fn fetch_playlist(&self, url: &str, max_items: usize) -> Result<Vec<Item>>;

    /// Fetch metadata for a channel's videos.
    ///
    /// Channel enumeration is an optional capability; the default body
    /// returns an empty list, which callers treat as "nothing to do"
    /// rather than an error.
    async fn fetch_channel(&self, _url: &str) -> Result<Vec<Item>> {
        Ok(Vec::new())
    }
}

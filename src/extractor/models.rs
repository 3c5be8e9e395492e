//! Data structures for extracted media metadata

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Metadata for a single video, as produced by the extraction engine.
///
/// Items are read-only once extracted; the batch core never mutates them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    #[serde(alias = "webpage_url")]
    pub url: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub playlist_title: Option<String>,
    /// Duration in seconds
    #[serde(default)]
    pub duration: Option<u64>,
    /// Raw upload date from the engine (usually `YYYYMMDD`)
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub view_count: Option<u64>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

fn default_title() -> String {
    "Untitled Video".to_string()
}

impl Item {
    /// Upload date parsed from the formats yt-dlp and friends emit
    pub fn parsed_upload_date(&self) -> Option<NaiveDate> {
        let raw = self.upload_date.as_deref()?;
        for fmt in ["%Y%m%d", "%Y-%m-%d", "%d.%m.%Y"] {
            if let Ok(date) = NaiveDate::parse_from_str(raw, fmt) {
                return Some(date);
            }
        }
        None
    }

    /// Human-readable duration, e.g. `1h 3m 20s`
    pub fn format_duration(&self) -> Option<String> {
        let total = self.duration?;
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let seconds = total % 60;

        let mut parts = Vec::new();
        if hours > 0 {
            parts.push(format!("{}h", hours));
        }
        if minutes > 0 {
            parts.push(format!("{}m", minutes));
        }
        if seconds > 0 {
            parts.push(format!("{}s", seconds));
        }

        if parts.is_empty() {
            Some("0s".to_string())
        } else {
            Some(parts.join(" "))
        }
    }
}

//! Per-item outcomes and the final batch summary

use crate::extractor::Item;
use serde::Serialize;
use std::path::PathBuf;

/// The result of one item's download. Created once per item per batch run;
/// never mutated afterward.
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    pub item: Item,
    /// Present only on success
    pub path: Option<PathBuf>,
    /// Human-readable reason, present only on failure
    pub error: Option<String>,
}

impl DownloadOutcome {
    pub fn success(item: Item, path: PathBuf) -> Self {
        Self {
            item,
            path: Some(path),
            error: None,
        }
    }

    pub fn failure(item: Item, error: String) -> Self {
        Self {
            item,
            path: None,
            error: Some(error),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.path.is_some()
    }
}

/// Aggregate report for a finished batch
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    /// Percentage, 0.0 for an empty batch (never NaN)
    pub success_rate: f64,
    pub successful_titles: Vec<String>,
    pub failed_titles: Vec<String>,
}

/// Build a summary from a batch's ordered outcomes
pub fn summarize(outcomes: &[DownloadOutcome]) -> Summary {
    let mut successful_titles = Vec::new();
    let mut failed_titles = Vec::new();

    for outcome in outcomes {
        if outcome.succeeded() {
            successful_titles.push(outcome.item.title.clone());
        } else {
            failed_titles.push(outcome.item.title.clone());
        }
    }

    summarize_titles(successful_titles, failed_titles)
}

/// Build a summary from already-split title lists
pub fn summarize_titles(successful_titles: Vec<String>, failed_titles: Vec<String>) -> Summary {
    let successful = successful_titles.len();
    let failed = failed_titles.len();
    let total = successful + failed;

    // Explicit zero guard: an empty batch reports 0%, not NaN
    let success_rate = if total == 0 {
        0.0
    } else {
        successful as f64 / total as f64 * 100.0
    };

    Summary {
        total,
        successful,
        failed,
        success_rate,
        successful_titles,
        failed_titles,
    }
}

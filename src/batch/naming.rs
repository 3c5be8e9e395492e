//! File naming strategies for batch downloads

use crate::extractor::Item;
use crate::utils::error::TunegrabError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Default prefix used by [`NamingStrategy::CustomPrefix`] when none is given
pub const DEFAULT_PREFIX: &str = "audio";

/// Rule used to derive each file's base name from an item and its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamingStrategy {
    /// Each item's title verbatim (sanitation happens at path resolution)
    OriginalTitle,
    /// `{prefix}_{n}` with a 1-based index
    CustomPrefix,
    /// `track_{n}` with a 1-based index
    NumberedSequence,
}

impl FromStr for NamingStrategy {
    type Err = TunegrabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" | "original" | "original-title" => Ok(NamingStrategy::OriginalTitle),
            "prefix" | "custom-prefix" => Ok(NamingStrategy::CustomPrefix),
            "numbered" | "sequence" | "numbered-sequence" => Ok(NamingStrategy::NumberedSequence),
            other => Err(TunegrabError::InvalidInput(format!(
                "unknown naming strategy: {}",
                other
            ))),
        }
    }
}

/// Compute one base name per item, in input order.
///
/// The returned list always has the same length and order as `items`.
/// An empty or whitespace-only prefix falls back to [`DEFAULT_PREFIX`].
pub fn names(items: &[Item], strategy: NamingStrategy, prefix: Option<&str>) -> Vec<String> {
    match strategy {
        NamingStrategy::OriginalTitle => items.iter().map(|item| item.title.clone()).collect(),
        NamingStrategy::CustomPrefix => {
            let prefix = match prefix {
                Some(p) if !p.trim().is_empty() => p.trim(),
                _ => DEFAULT_PREFIX,
            };
            (1..=items.len())
                .map(|i| format!("{}_{}", prefix, i))
                .collect()
        }
        NamingStrategy::NumberedSequence => {
            (1..=items.len()).map(|i| format!("track_{}", i)).collect()
        }
    }
}

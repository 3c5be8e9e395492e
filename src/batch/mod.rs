//! Batch download orchestration: naming, progress, events, outcomes

pub mod events;
pub mod naming;
pub mod orchestrator;
pub mod progress;
pub mod request;
pub mod summary;

pub use events::BatchEvent;
pub use naming::{names, NamingStrategy};
pub use orchestrator::{BatchHandle, BatchOrchestrator};
pub use progress::{BatchProgress, ProgressSnapshot};
pub use request::{AudioFormat, AudioQuality, DownloadRequest};
pub use summary::{summarize, summarize_titles, DownloadOutcome, Summary};

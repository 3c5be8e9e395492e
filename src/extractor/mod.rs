//! Metadata extraction: trait, models and the yt-dlp implementation

pub mod models;
pub mod traits;
pub mod ytdlp;

pub use models::Item;
pub use traits::Extractor;
pub use ytdlp::{find_ytdlp, YtDlpExtractor};

//! Utility modules for error handling, naming, and filesystem helpers

pub mod archive;
pub mod config;
pub mod error;
pub mod filename;
pub mod paths;
pub mod urls;

// Re-export for convenience
pub use archive::{cleanup_stale_files, zip_directory};
pub use config::AppSettings;
pub use error::TunegrabError;
pub use filename::{sanitize_filename, sanitize_filename_limited};
pub use paths::unique_path;

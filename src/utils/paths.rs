//! Collision-safe output path resolution

use crate::utils::filename::sanitize_filename;
use std::path::{Path, PathBuf};

/// Resolves a path in `dir` for `base_name` + `extension` that does not
/// collide with an existing filesystem entry.
///
/// The base name is sanitized first. If `dir/base.ext` exists, integer
/// suffixes are appended (`base_1.ext`, `base_2.ext`, ...) until a free
/// path is found.
///
/// Known limitations, accepted because a single orchestrator owns the
/// destination directory for the duration of a run:
/// - there is a TOCTOU window between the existence check and the actual
///   write performed by the caller;
/// - the suffix counter is unbounded, so a directory pre-seeded with every
///   `base_N.ext` keeps the loop going. No cap is imposed.
pub fn unique_path(dir: &Path, base_name: &str, extension: &str) -> PathBuf {
    let clean = sanitize_filename(base_name);
    let extension = extension.trim_start_matches('.');

    let mut candidate = dir.join(format!("{}.{}", clean, extension));
    let mut counter = 1u32;
    while candidate.exists() {
        candidate = dir.join(format!("{}_{}.{}", clean, counter, extension));
        counter += 1;
    }

    candidate
}

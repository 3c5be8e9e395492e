//! Post-processing helpers: zip packaging and stale-file cleanup
//!
//! Both run after a batch finishes; neither is part of the orchestration
//! core.

use crate::utils::error::TunegrabError;
use crate::utils::filename::sanitize_filename;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing::{debug, info, warn};
use zip::write::FileOptions;
use zip::CompressionMethod;

/// Package a directory into `{parent}/{archive_name}.zip`.
///
/// The archive name is sanitized; entries keep their paths relative to
/// `source_dir`. Returns the path of the created archive.
pub fn zip_directory(source_dir: &Path, archive_name: &str) -> Result<PathBuf, TunegrabError> {
    if !source_dir.is_dir() {
        return Err(TunegrabError::FilesystemError(format!(
            "source directory {} does not exist",
            source_dir.display()
        )));
    }

    let parent = source_dir.parent().unwrap_or(Path::new("."));
    let zip_path = parent.join(format!("{}.zip", sanitize_filename(archive_name)));

    let file = File::create(&zip_path)?;
    let mut writer = zip::ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut count = 0usize;
    add_dir_entries(&mut writer, source_dir, source_dir, options, &mut count)?;

    writer
        .finish()
        .map_err(|e| TunegrabError::FilesystemError(format!("failed to finish zip: {}", e)))?;

    info!("Packaged {} file(s) into {}", count, zip_path.display());
    Ok(zip_path)
}

fn add_dir_entries(
    writer: &mut zip::ZipWriter<File>,
    root: &Path,
    dir: &Path,
    options: FileOptions,
    count: &mut usize,
) -> Result<(), TunegrabError> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            add_dir_entries(writer, root, &path, options, count)?;
            continue;
        }

        let rel = path
            .strip_prefix(root)
            .map_err(|e| TunegrabError::FilesystemError(e.to_string()))?;
        let name = rel.to_string_lossy().replace('\\', "/");
        debug!("Adding to archive: {}", name);

        writer
            .start_file(name, options)
            .map_err(|e| TunegrabError::FilesystemError(format!("zip entry failed: {}", e)))?;
        let mut src = File::open(&path)?;
        io::copy(&mut src, writer)?;
        *count += 1;
    }
    Ok(())
}

/// Delete files in `dir` whose extension matches and whose modification
/// time is older than `max_age`. Returns (files_checked, files_deleted).
///
/// Per-file errors are logged and skipped; one stubborn file does not stop
/// the sweep.
pub fn cleanup_stale_files(
    dir: &Path,
    max_age: Duration,
    extensions: &[&str],
) -> Result<(usize, usize), TunegrabError> {
    let mut checked = 0usize;
    let mut deleted = 0usize;
    let now = SystemTime::now();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| extensions.iter().any(|want| ext.eq_ignore_ascii_case(want)))
            .unwrap_or(false);
        if !matches {
            continue;
        }
        checked += 1;

        let modified = match path.metadata().and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(e) => {
                warn!("Cannot stat {}: {}", path.display(), e);
                continue;
            }
        };

        let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
        if age >= max_age {
            match std::fs::remove_file(&path) {
                Ok(()) => {
                    debug!("Deleted stale file {}", path.display());
                    deleted += 1;
                }
                Err(e) => warn!("Cannot delete {}: {}", path.display(), e),
            }
        }
    }

    Ok((checked, deleted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_zip_directory_contains_all_files() {
        let temp = TempDir::new().unwrap();
        let music = temp.path().join("music");
        std::fs::create_dir_all(music.join("sub")).unwrap();
        std::fs::write(music.join("a.mp3"), b"aaa").unwrap();
        std::fs::write(music.join("b.mp3"), b"bbb").unwrap();
        std::fs::write(music.join("sub/c.mp3"), b"ccc").unwrap();

        let zip_path = zip_directory(&music, "my batch").unwrap();
        assert_eq!(zip_path, temp.path().join("my batch.zip"));

        let reader = File::open(&zip_path).unwrap();
        let mut archive = zip::ZipArchive::new(reader).unwrap();
        assert_eq!(archive.len(), 3);
        let mut names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.mp3", "b.mp3", "sub/c.mp3"]);
    }

    #[test]
    fn test_zip_directory_missing_source() {
        let temp = TempDir::new().unwrap();
        let err = zip_directory(&temp.path().join("nope"), "x");
        assert!(matches!(err, Err(TunegrabError::FilesystemError(_))));
    }

    #[test]
    fn test_cleanup_only_touches_matching_extensions() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("old.mp3"), b"x").unwrap();
        std::fs::write(temp.path().join("keep.txt"), b"x").unwrap();

        // max_age zero makes every matching file stale
        let (checked, deleted) =
            cleanup_stale_files(temp.path(), Duration::ZERO, &["mp3"]).unwrap();
        assert_eq!(checked, 1);
        assert_eq!(deleted, 1);
        assert!(!temp.path().join("old.mp3").exists());
        assert!(temp.path().join("keep.txt").exists());
    }

    #[test]
    fn test_cleanup_keeps_fresh_files() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("new.mp3"), b"x").unwrap();

        let (checked, deleted) =
            cleanup_stale_files(temp.path(), Duration::from_secs(3600), &["mp3"]).unwrap();
        assert_eq!(checked, 1);
        assert_eq!(deleted, 0);
        assert!(temp.path().join("new.mp3").exists());
    }
}

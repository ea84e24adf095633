use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::Result;
use crate::types::ImageKind;

/// Regular files directly inside `dir`, sorted by file name.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Files of `dir` whose extension is a supported image kind.
pub fn list_images(dir: &Path) -> Result<Vec<(PathBuf, ImageKind)>> {
    Ok(list_files(dir)?
        .into_iter()
        .filter_map(|path| ImageKind::from_path(&path).map(|kind| (path, kind)))
        .collect())
}

/// Recursively collect files under `root` with extension `ext` (case-insensitive),
/// sorted by path. Unreadable entries are logged and skipped.
pub fn collect_files_with_extension(root: &Path, ext: &str) -> Vec<PathBuf> {
    let ext = ext.trim_start_matches('.');
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                debug!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|x| x.to_str())
                .is_some_and(|x| x.eq_ignore_ascii_case(ext))
        })
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

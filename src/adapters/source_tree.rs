//! Recursive discovery of input files below a directory.

use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::{DirEntry, WalkDir};

use crate::domain::AppError;

/// True if `path` ends in one of `extensions` (dot-prefixed, e.g. `.json`).
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => extensions.iter().any(|wanted| wanted.strip_prefix('.') == Some(ext)),
        None => false,
    }
}

/// Collect every file below `root` carrying one of `extensions`.
///
/// Sub-directories whose name matches any of `exclude` at its start are not
/// entered. The root itself is never excluded. Symbolic links are not
/// followed. Entries that cannot be read are skipped with a warning.
pub fn collect_files(
    root: &Path,
    extensions: &[String],
    exclude: &[Regex],
) -> Result<Vec<PathBuf>, AppError> {
    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_excluded_dir(entry, exclude));

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if entry.file_type().is_dir() {
            continue;
        }
        if has_extension(entry.path(), extensions) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

fn is_excluded_dir(entry: &DirEntry, exclude: &[Regex]) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    exclude.iter().any(|pattern| pattern.find(&name).is_some_and(|found| found.start() == 0))
}

//! Page discovery
//!
//! Lists the pages directly inside a directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

/// Find the files directly in `dir` whose name ends with `.{extension}`
///
/// The suffix match is case-sensitive, and a file named just `.html`
/// counts. The listing is non-recursive and sorted by path. A directory that does
/// not exist or cannot be read yields an empty list, the same as a
/// directory without pages.
pub fn find_files(dir: &Path, extension: &str) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "Cannot list directory");
            return Vec::new();
        }
    };

    let suffix = format!(".{}", extension);
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .is_some_and(|name| name.as_encoded_bytes().ends_with(suffix.as_bytes()))
        })
        .collect();
    files.sort();

    trace!(dir = %dir.display(), count = files.len(), "Listed pages");
    files
}

/// Find the `.html` files directly in `dir`
pub fn find_html_files(dir: &Path) -> Vec<PathBuf> {
    find_files(dir, super::DEFAULT_EXTENSION)
}

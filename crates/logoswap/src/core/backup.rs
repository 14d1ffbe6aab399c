//! Backup files
//!
//! A page's original text is saved next to it before the page is rewritten.

use std::ffi::OsString;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::LogoError;

/// Sibling path holding the backup of `path`: the file name with `suffix`
/// appended (`index.html` becomes `index.html.backup`)
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

/// Write `original` to the backup path of `path` and flush it to disk
///
/// Any earlier backup at that path is replaced. Returns the backup path.
pub fn write_backup(path: &Path, original: &str, suffix: &str) -> Result<PathBuf, LogoError> {
    let backup = backup_path(path, suffix);

    let mut file = File::create(&backup).map_err(|e| LogoError::backup_error(&backup, e))?;
    file.write_all(original.as_bytes())
        .map_err(|e| LogoError::backup_error(&backup, e))?;
    file.sync_all()
        .map_err(|e| LogoError::backup_error(&backup, e))?;

    debug!(backup = %backup.display(), bytes = original.len(), "Backup written");
    Ok(backup)
}

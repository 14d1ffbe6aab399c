//! Core error types for logo replacement
//!
//! Every failure is tied to a single file (or to the console prompt), so the
//! batch can report it and move on to the next file.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Core error types for logo replacement
#[derive(Error, Debug)]
pub enum LogoError {
    #[error("Read error: {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Backup error: {path}: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Write error: {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Prompt error: {source}")]
    Prompt {
        #[from]
        source: io::Error,
    },
}

impl LogoError {
    /// Create a new read error
    pub fn read_error(path: &Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a new backup error
    pub fn backup_error(path: &Path, source: io::Error) -> Self {
        Self::Backup {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create a new write error
    pub fn write_error(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the file involved, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Backup { path, .. } | Self::Write { path, .. } => {
                Some(path)
            }
            Self::Prompt { .. } => None,
        }
    }
}

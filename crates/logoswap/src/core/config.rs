//! Run configuration
//!
//! Which files are picked up and how their backups are named.

/// Default extension of the pages to update
pub const DEFAULT_EXTENSION: &str = "html";

/// Default suffix appended to a page's file name for its backup
pub const DEFAULT_BACKUP_SUFFIX: &str = ".backup";

/// Configuration for a replacement run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateConfig {
    /// File extension (without the dot) of the pages to update
    pub extension: String,
    /// Suffix appended to the full file name of each backup
    pub backup_suffix: String,
}

impl UpdateConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different page extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Use a different backup suffix
    pub fn with_backup_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.backup_suffix = suffix.into();
        self
    }
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
        }
    }
}

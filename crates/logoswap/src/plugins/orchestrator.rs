//! Updater orchestrating the replacement run
//!
//! The updater wires discovery, matching and backup-and-write together:
//! directory prompt → discovery → confirmation prompt → per file
//! (read → match → backup → overwrite).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, span, trace, warn, Level};

use crate::core::{
    find_files, write_backup, BatchReport, FileOutcome, LogoError, LogoMatcher, Replacement,
    ScanEntry, SessionOutcome, SessionPrompt, UpdateConfig, LOGO_SVG,
};
use crate::plugins::RegexLogoMatcher;

/// Receives progress while a batch runs
///
/// All methods default to doing nothing.
pub trait UpdateObserver {
    /// Pages were found in `dir`, before confirmation is asked
    fn on_discovered(&mut self, _dir: &Path, _files: &[PathBuf]) {}

    /// The operator agreed to modify `files`
    fn on_confirmed(&mut self, _files: &[PathBuf]) {}

    /// `path` is about to be processed
    fn on_start(&mut self, _path: &Path) {}

    /// The original text of `path` is saved at `backup`; the page has not
    /// been overwritten yet
    fn on_backup(&mut self, _path: &Path, _backup: &Path) {}

    /// `path` is done
    fn on_finish(&mut self, _path: &Path, _outcome: &FileOutcome) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl UpdateObserver for NoopObserver {}

/// Replaces the logo in a set of pages, one file at a time
pub struct Updater {
    config: UpdateConfig,
    matcher: Box<dyn LogoMatcher>,
}

impl Updater {
    /// Create an updater with the default config and the regex matcher
    pub fn new() -> Self {
        Self::with_config(UpdateConfig::default())
    }

    /// Create an updater with a config and the regex matcher
    pub fn with_config(config: UpdateConfig) -> Self {
        Self::with_matcher(config, Box::new(RegexLogoMatcher::new()))
    }

    /// Create an updater with a config and a custom matcher
    pub fn with_matcher(config: UpdateConfig, matcher: Box<dyn LogoMatcher>) -> Self {
        Self { config, matcher }
    }

    pub fn config(&self) -> &UpdateConfig {
        &self.config
    }

    pub fn matcher(&self) -> &dyn LogoMatcher {
        self.matcher.as_ref()
    }

    /// List the pages directly in `dir`
    pub fn discover(&self, dir: &Path) -> Vec<PathBuf> {
        let files = find_files(dir, &self.config.extension);
        info!(dir = %dir.display(), count = files.len(), "Discovered pages");
        files
    }

    /// Replace the logo in one page
    ///
    /// When the page holds no logo container nothing is written. Otherwise
    /// the original text is backed up before the page is overwritten. Every
    /// failure is returned as [`FileOutcome::Failed`].
    pub fn update_file(&self, path: &Path) -> FileOutcome {
        self.update_file_observed(path, &mut NoopObserver)
    }

    /// Same as [`Updater::update_file`], reporting the backup to `observer`
    /// as soon as it is written
    pub fn update_file_observed(
        &self,
        path: &Path,
        observer: &mut dyn UpdateObserver,
    ) -> FileOutcome {
        let file_span = span!(Level::INFO, "update_file", path = %path.display());
        let _enter = file_span.enter();

        match self.try_update_file(path, observer) {
            Ok(Some((backup, occurrences))) => {
                info!(occurrences, backup = %backup.display(), "Logo updated");
                FileOutcome::Updated {
                    backup,
                    occurrences,
                }
            }
            Ok(None) => {
                info!("No logo container found");
                FileOutcome::NotFound
            }
            Err(e) => {
                warn!(error = %e, "Failed to update page");
                FileOutcome::Failed(e)
            }
        }
    }

    fn try_update_file(
        &self,
        path: &Path,
        observer: &mut dyn UpdateObserver,
    ) -> Result<Option<(PathBuf, usize)>, LogoError> {
        let original = fs::read_to_string(path).map_err(|e| LogoError::read_error(path, e))?;
        trace!(bytes = original.len(), "Read page");

        let (content, occurrences) = match self.matcher.replace(&original, LOGO_SVG) {
            Replacement::NotFound => return Ok(None),
            Replacement::Found {
                content,
                occurrences,
            } => (content, occurrences),
        };

        if content == original {
            debug!("Page already carries the new logo");
        }

        let backup = write_backup(path, &original, &self.config.backup_suffix)?;
        observer.on_backup(path, &backup);
        fs::write(path, content).map_err(|e| LogoError::write_error(path, e))?;

        Ok(Some((backup, occurrences)))
    }

    /// Update every file in order, one at a time
    pub fn update_all(&self, files: &[PathBuf], observer: &mut dyn UpdateObserver) -> BatchReport {
        let batch_span = span!(Level::INFO, "update_all", total = files.len());
        let _enter = batch_span.enter();

        let mut report = BatchReport::default();
        for path in files {
            observer.on_start(path);
            let outcome = self.update_file_observed(path, observer);
            report.record(&outcome);
            observer.on_finish(path, &outcome);
        }

        info!(
            updated = report.updated,
            not_found = report.not_found,
            failed = report.failed,
            "Batch completed"
        );
        report
    }

    /// Run the full flow: ask for a directory, discover, confirm, update
    ///
    /// Stops with [`SessionOutcome::NoFiles`] when the directory holds no
    /// pages, and with [`SessionOutcome::Cancelled`] when confirmation is
    /// refused; in both cases no page is read. Only prompt I/O errors are
    /// returned as `Err`.
    pub fn run_session(
        &self,
        prompt: &mut dyn SessionPrompt,
        observer: &mut dyn UpdateObserver,
    ) -> Result<SessionOutcome, LogoError> {
        let dir = prompt.project_dir()?;
        let discovered = self.discover(&dir);

        if discovered.is_empty() {
            return Ok(SessionOutcome::NoFiles { dir });
        }

        observer.on_discovered(&dir, &discovered);

        if !prompt.confirm(&discovered)? {
            info!("Cancelled by user");
            return Ok(SessionOutcome::Cancelled { discovered });
        }
        observer.on_confirmed(&discovered);

        let report = self.update_all(&discovered, observer);
        Ok(SessionOutcome::Completed { discovered, report })
    }

    /// Count logo containers in each file without writing anything
    pub fn scan(&self, files: &[PathBuf]) -> Vec<ScanEntry> {
        files
            .iter()
            .map(|path| match fs::read_to_string(path) {
                Ok(content) => ScanEntry {
                    path: path.clone(),
                    occurrences: self.matcher.count(&content),
                    error: None,
                },
                Err(e) => ScanEntry {
                    path: path.clone(),
                    occurrences: 0,
                    error: Some(LogoError::read_error(path, e).to_string()),
                },
            })
            .collect()
    }
}

impl Default for Updater {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AssumeYes, ConfirmationProvider, FixedPath, Prompts};
    use tempfile::tempdir;

    const OLD_LOGO: &str =
        r#"<div class="logo-container"><a href="/"><svg width="10"><circle/></svg></a></div>"#;

    struct Refuse;

    impl ConfirmationProvider for Refuse {
        fn confirm(&mut self, _files: &[PathBuf]) -> Result<bool, LogoError> {
            Ok(false)
        }
    }

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl UpdateObserver for Recorder {
        fn on_discovered(&mut self, _dir: &Path, files: &[PathBuf]) {
            self.events.push(format!("discovered {}", files.len()));
        }

        fn on_confirmed(&mut self, _files: &[PathBuf]) {
            self.events.push("confirmed".to_string());
        }

        fn on_start(&mut self, path: &Path) {
            self.events
                .push(format!("start {}", path.file_name().unwrap().to_string_lossy()));
        }

        fn on_backup(&mut self, path: &Path, _backup: &Path) {
            self.events
                .push(format!("backup {}", path.file_name().unwrap().to_string_lossy()));
        }

        fn on_finish(&mut self, path: &Path, outcome: &FileOutcome) {
            self.events.push(format!(
                "finish {} {}",
                path.file_name().unwrap().to_string_lossy(),
                outcome.is_updated()
            ));
        }
    }

    struct NeverMatches;

    impl LogoMatcher for NeverMatches {
        fn name(&self) -> &'static str {
            "never"
        }

        fn count(&self, _content: &str) -> usize {
            0
        }

        fn replace(&self, _content: &str, _payload: &str) -> Replacement {
            Replacement::NotFound
        }
    }

    #[test]
    fn test_update_file_writes_backup_then_page() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, OLD_LOGO).unwrap();

        let outcome = Updater::new().update_file(&page);

        match outcome {
            FileOutcome::Updated {
                backup,
                occurrences,
            } => {
                assert_eq!(occurrences, 1);
                assert_eq!(backup, dir.path().join("index.html.backup"));
                assert_eq!(fs::read_to_string(backup).unwrap(), OLD_LOGO);
            }
            other => panic!("expected Updated, got {:?}", other),
        }
        assert_eq!(
            fs::read_to_string(&page).unwrap(),
            format!(
                r#"<div class="logo-container"><a href="/">{}</a></div>"#,
                LOGO_SVG
            )
        );
    }

    #[test]
    fn test_update_file_without_logo_writes_nothing() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("plain.html");
        fs::write(&page, "<p>no logo</p>").unwrap();

        let outcome = Updater::new().update_file(&page);

        assert!(matches!(outcome, FileOutcome::NotFound));
        assert_eq!(fs::read_to_string(&page).unwrap(), "<p>no logo</p>");
        assert!(!dir.path().join("plain.html.backup").exists());
    }

    #[test]
    fn test_update_file_missing_page_fails() {
        let dir = tempdir().unwrap();
        let outcome = Updater::new().update_file(&dir.path().join("gone.html"));
        assert!(matches!(outcome, FileOutcome::Failed(LogoError::Read { .. })));
    }

    #[test]
    fn test_update_file_keeps_page_when_backup_fails() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, OLD_LOGO).unwrap();
        fs::create_dir(dir.path().join("index.html.backup")).unwrap();

        let mut recorder = Recorder::default();
        let outcome = Updater::new().update_file_observed(&page, &mut recorder);

        match outcome {
            FileOutcome::Failed(LogoError::Backup { path, .. }) => {
                assert_eq!(path, dir.path().join("index.html.backup"));
            }
            other => panic!("expected a backup failure, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(&page).unwrap(), OLD_LOGO);
        assert!(recorder.events.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_update_file_write_failure_leaves_backup() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, OLD_LOGO).unwrap();

        let mut permissions = fs::metadata(&page).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&page, permissions).unwrap();

        // Root ignores file permissions
        if fs::OpenOptions::new().write(true).open(&page).is_ok() {
            return;
        }

        let mut recorder = Recorder::default();
        let outcome = Updater::new().update_file_observed(&page, &mut recorder);

        assert!(matches!(outcome, FileOutcome::Failed(LogoError::Write { .. })));
        assert_eq!(recorder.events, vec!["backup index.html"]);
        assert_eq!(
            fs::read_to_string(dir.path().join("index.html.backup")).unwrap(),
            OLD_LOGO
        );
        assert_eq!(fs::read_to_string(&page).unwrap(), OLD_LOGO);
    }

    #[test]
    fn test_custom_backup_suffix() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, OLD_LOGO).unwrap();

        let updater = Updater::with_config(UpdateConfig::new().with_backup_suffix(".orig"));
        assert!(updater.update_file(&page).is_updated());
        assert!(dir.path().join("index.html.orig").exists());
    }

    #[test]
    fn test_custom_matcher_is_used() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, OLD_LOGO).unwrap();

        let updater = Updater::with_matcher(UpdateConfig::default(), Box::new(NeverMatches));
        assert_eq!(updater.matcher().name(), "never");
        assert!(matches!(updater.update_file(&page), FileOutcome::NotFound));
        assert_eq!(fs::read_to_string(&page).unwrap(), OLD_LOGO);
    }

    #[test]
    fn test_update_all_notifies_in_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.html"), OLD_LOGO).unwrap();
        fs::write(dir.path().join("b.html"), "<p></p>").unwrap();

        let updater = Updater::new();
        let files = updater.discover(dir.path());
        let mut recorder = Recorder::default();
        let report = updater.update_all(&files, &mut recorder);

        assert_eq!(report.updated, 1);
        assert_eq!(report.not_found, 1);
        assert_eq!(
            recorder.events,
            vec![
                "start a.html",
                "backup a.html",
                "finish a.html true",
                "start b.html",
                "finish b.html false"
            ]
        );
    }

    #[test]
    fn test_session_without_files() {
        let dir = tempdir().unwrap();
        let outcome = Updater::new()
            .run_session(
                &mut Prompts::new(FixedPath(dir.path().to_path_buf()), AssumeYes),
                &mut NoopObserver,
            )
            .unwrap();

        assert_eq!(
            outcome,
            SessionOutcome::NoFiles {
                dir: dir.path().to_path_buf()
            }
        );
    }

    #[test]
    fn test_session_cancelled_touches_nothing() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, OLD_LOGO).unwrap();

        let mut recorder = Recorder::default();
        let outcome = Updater::new()
            .run_session(
                &mut Prompts::new(FixedPath(dir.path().to_path_buf()), Refuse),
                &mut recorder,
            )
            .unwrap();

        assert_eq!(
            outcome,
            SessionOutcome::Cancelled {
                discovered: vec![page.clone()]
            }
        );
        assert_eq!(recorder.events, vec!["discovered 1"]);
        assert_eq!(fs::read_to_string(&page).unwrap(), OLD_LOGO);
        assert!(!dir.path().join("index.html.backup").exists());
    }

    #[test]
    fn test_session_completed() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("index.html"), OLD_LOGO).unwrap();

        let mut recorder = Recorder::default();
        let outcome = Updater::new()
            .run_session(
                &mut Prompts::new(FixedPath(dir.path().to_path_buf()), AssumeYes),
                &mut recorder,
            )
            .unwrap();

        let SessionOutcome::Completed { report, .. } = outcome else {
            panic!("expected a completed session");
        };
        assert_eq!(report.updated, 1);
        assert_eq!(
            recorder.events,
            vec![
                "discovered 1",
                "confirmed",
                "start index.html",
                "backup index.html",
                "finish index.html true"
            ]
        );
    }

    #[test]
    fn test_scan_counts_without_writing() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("index.html");
        fs::write(&page, format!("{}{}", OLD_LOGO, OLD_LOGO)).unwrap();

        let entries = Updater::new().scan(&[page.clone(), dir.path().join("gone.html")]);

        assert_eq!(entries[0].occurrences, 2);
        assert!(entries[0].error.is_none());
        assert!(entries[1].error.is_some());
        assert!(!dir.path().join("index.html.backup").exists());
    }
}

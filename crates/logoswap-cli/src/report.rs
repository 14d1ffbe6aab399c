//! Console progress output
//!
//! Prints the banner, the discovered pages, one block per processed page and
//! the final summary. Status markers are colored with crossterm when enabled.

use std::io::Write;
use std::path::{Path, PathBuf};

use crossterm::style::{Color, Stylize};
use logoswap::prelude::{BatchReport, FileOutcome, UpdateObserver};

const RULE_WIDTH: usize = 60;

/// Writes human-readable progress for an update run
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    // Progress lines are informational; a closed stdout must not abort the batch.
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.flush();
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.to_string().with(color))
        } else {
            text.to_string()
        }
    }

    fn rule(&mut self) {
        self.line(&"=".repeat(RULE_WIDTH));
    }

    pub fn banner(&mut self) {
        self.rule();
        let title = self.paint("🚀 HarmonJa Logo Auto-Updater", Color::Cyan);
        self.line(&title);
        self.rule();
        self.line("");
    }

    pub fn no_files(&mut self, dir: &Path) {
        let text = self.paint("❌ No HTML files found!", Color::Red);
        self.line(&text);
        tracing::debug!(dir = %dir.display(), "Nothing to do");
    }

    pub fn cancelled(&mut self) {
        let text = self.paint("❌ Cancelled by user", Color::Red);
        self.line(&text);
    }

    pub fn summary(&mut self, report: &BatchReport) {
        self.rule();
        let text = format!(
            "✨ Complete! Updated {}/{} files",
            report.updated, report.total
        );
        let text = self.paint(&text, Color::Green);
        self.line(&text);
        self.rule();
        self.line("");
        self.line("📝 Next steps:");
        self.line("   1. Check each file to verify logo looks correct");
        self.line("   2. Test responsive behavior (mobile/desktop)");
        self.line("   3. If issues occur, restore from .backup files");
        self.line("   4. Commit to GitHub when satisfied");
        self.line("");
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl<W: Write> UpdateObserver for ConsoleReporter<W> {
    fn on_discovered(&mut self, _dir: &Path, files: &[PathBuf]) {
        self.line("");
        self.line(&format!("📁 Found {} HTML file(s):", files.len()));
        for file in files {
            self.line(&format!("   - {}", display_name(file)));
        }
        self.line("");
        self.rule();
    }

    fn on_confirmed(&mut self, _files: &[PathBuf]) {
        self.line("");
        self.line("🔄 Starting replacement...");
        self.line("");
    }

    fn on_start(&mut self, path: &Path) {
        self.line(&format!("🔍 Processing: {}", display_name(path)));
    }

    fn on_backup(&mut self, _path: &Path, backup: &Path) {
        self.line(&format!("   💾 Backup saved: {}", display_name(backup)));
    }

    fn on_finish(&mut self, _path: &Path, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Updated { .. } => {
                let text = self.paint("   ✅ Logo updated successfully!", Color::Green);
                self.line(&text);
            }
            FileOutcome::NotFound => {
                let text = self.paint(
                    "   ⚠️  No logo found (might use different structure)",
                    Color::Yellow,
                );
                self.line(&text);
            }
            FileOutcome::Failed(e) => {
                let text = self.paint(&format!("   ❌ Error: {}", e), Color::Red);
                self.line(&text);
            }
        }
        self.line("");
    }
}

//! Command-line interface for the logoswap utility
//!
//! Runs the interactive logo replacement and a couple of read-only helpers.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::report::ConsoleReporter;
use logoswap::core::logging::init_logging;
use logoswap::prelude::*;

/// Logoswap - Replace the inline SVG logo in every HTML page of a site
#[derive(Parser)]
#[command(name = "logoswap")]
#[command(about = "Replace the inline SVG logo across a directory of HTML pages, keeping backups")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    /// Command to run (defaults to an interactive `update`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error|off)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Replace the logo in every HTML page of a directory
    Update {
        /// Directory holding the pages (prompted for when omitted)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Proceed without asking for confirmation
        #[arg(short, long)]
        yes: bool,

        /// When to use colors in output
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },

    /// Report which pages contain the logo container, without writing
    Scan {
        /// Directory holding the pages
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Print the replacement logo markup
    Payload {
        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Update {
            dir: None,
            yes: false,
            color: ColorChoice::Auto,
        }
    }
}

/// When to colorize output
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Use colors if stdout is a terminal and NO_COLOR is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Serialize)]
struct ScanOutput<'a> {
    dir: &'a Path,
    files: &'a [ScanEntry],
    with_logo: usize,
    total: usize,
}

/// Main CLI application
pub struct LogoswapApp {
    updater: Updater,
}

impl LogoswapApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_config(UpdateConfig::default())
    }

    /// Create a new application instance with an update config
    pub fn with_config(config: UpdateConfig) -> Self {
        Self {
            updater: Updater::with_config(config),
        }
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        let (log_level_str, log_format_str) =
            Self::logging_settings(&cli, |key| std::env::var(key).ok());

        if let Err(e) = init_logging(Some(&log_level_str), Some(&log_format_str)) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Logoswap v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command.unwrap_or_default() {
            Commands::Update { dir, yes, color } => self.update_command(dir, yes, color, cli.verbose),
            Commands::Scan { dir, json } => self.scan_command(&dir, json, cli.verbose),
            Commands::Payload { json } => self.payload_command(json),
        }
    }

    /// Resolve the log level and format; environment variables take
    /// precedence over flags.
    fn logging_settings(cli: &Cli, env: impl Fn(&str) -> Option<String>) -> (String, String) {
        let level = env("LOGOSWAP_LOG_LEVEL")
            .or_else(|| env("RUST_LOG"))
            .unwrap_or_else(|| cli.log_level.as_str().to_string());

        let format = env("LOGOSWAP_LOG_FORMAT")
            .unwrap_or_else(|| cli.log_format.as_str().to_string());

        (level, format)
    }

    /// Handle the update command
    fn update_command(
        &self,
        dir: Option<PathBuf>,
        yes: bool,
        color: ColorChoice,
        verbose: bool,
    ) -> Result<()> {
        let mut reporter = ConsoleReporter::new(io::stdout(), Self::should_colorize(color));
        reporter.banner();

        let console = || ConsolePrompt::new(io::stdin().lock(), io::stdout());
        let mut prompt: Box<dyn SessionPrompt> = match (dir, yes) {
            (Some(dir), true) => Box::new(Prompts::new(FixedPath(dir), AssumeYes)),
            (Some(dir), false) => Box::new(Prompts::new(FixedPath(dir), console())),
            (None, true) => Box::new(Prompts::new(console(), AssumeYes)),
            (None, false) => Box::new(console()),
        };

        let outcome = self.updater.run_session(&mut *prompt, &mut reporter)?;

        match outcome {
            SessionOutcome::NoFiles { dir } => reporter.no_files(&dir),
            SessionOutcome::Cancelled { .. } => reporter.cancelled(),
            SessionOutcome::Completed { report, .. } => {
                if verbose {
                    eprintln!(
                        "{} updated, {} without logo, {} failed",
                        report.updated, report.not_found, report.failed
                    );
                }
                reporter.summary(&report);
            }
        }
        Ok(())
    }

    /// Determine if we should colorize the output based on color choice
    fn should_colorize(color: ColorChoice) -> bool {
        match color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                crossterm::tty::IsTty::is_tty(&std::io::stdout())
            }
        }
    }

    /// Handle the scan command
    fn scan_command(&self, dir: &Path, json: bool, verbose: bool) -> Result<()> {
        let files = self.updater.discover(dir);
        if verbose {
            eprintln!("Scanning {} file(s) in {}", files.len(), dir.display());
        }

        let entries = self.updater.scan(&files);
        let with_logo = entries.iter().filter(|e| e.occurrences > 0).count();

        let mut out = io::stdout().lock();
        if json {
            let output = ScanOutput {
                dir,
                files: &entries,
                with_logo,
                total: entries.len(),
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        } else {
            writeln!(out, "{}", Self::format_scan(&entries))?;
            writeln!(out, "{}/{} file(s) contain the logo container", with_logo, entries.len())?;
        }
        Ok(())
    }

    fn format_scan(entries: &[ScanEntry]) -> String {
        entries
            .iter()
            .map(|entry| match &entry.error {
                Some(error) => format!("✗ {} ({})", entry.path.display(), error),
                None if entry.occurrences > 0 => {
                    format!("✓ {} ({} logo block(s))", entry.path.display(), entry.occurrences)
                }
                None => format!("- {} (no logo container)", entry.path.display()),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Handle the payload command
    fn payload_command(&self, json: bool) -> Result<()> {
        let mut out = io::stdout().lock();
        if json {
            let payload = serde_json::json!({
                "payload": LOGO_SVG,
                "bytes": LOGO_SVG.len(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
        } else {
            writeln!(out, "{}", LOGO_SVG)?;
        }
        Ok(())
    }

    /// Get a reference to the updater (for testing)
    #[cfg(test)]
    pub fn updater(&self) -> &Updater {
        &self.updater
    }
}

impl Default for LogoswapApp {
    fn default() -> Self {
        Self::new()
    }
}

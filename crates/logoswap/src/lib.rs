//! Logoswap - Replace the inline SVG logo across static HTML pages
//!
//! A library for finding the logo container (`<div class="logo-container">`
//! wrapping a link wrapping an inline `<svg>`) in every page of a directory
//! and swapping the `<svg>` for the current logo, keeping a backup of each
//! page it rewrites.
//!
//! # Quick Start
//!
//! ```rust
//! use logoswap::replace_logo;
//!
//! let page = r#"<div class="logo-container"><a href="/"><svg><circle/></svg></a></div>"#;
//! let replaced = replace_logo(page);
//! assert!(replaced.is_found());
//! assert!(replaced.content_or(page).contains("Logo HarmonJa"));
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust,no_run
//! use logoswap::prelude::*;
//!
//! let updater = Updater::new();
//! let pages = updater.discover(std::path::Path::new("site"));
//! let report = updater.update_all(&pages, &mut NoopObserver);
//! println!("Updated {}/{} files", report.updated, report.total);
//! ```

pub mod core;
pub mod plugins;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        AssumeYes, BatchReport, ConfirmationProvider, ConsolePrompt, FileOutcome, FixedPath,
        LogoError, LogoMatcher, PathProvider, Prompts, Replacement, ScanEntry, SessionOutcome,
        SessionPrompt, UpdateConfig, LOGO_SVG,
    };
    pub use crate::plugins::{NoopObserver, RegexLogoMatcher, UpdateObserver, Updater};
}

/// Replace the logo in a page's text with [`LOGO_SVG`]
///
/// Uses the regex matcher. Nothing touches the filesystem.
///
/// # Example
/// ```rust
/// use logoswap::{replace_logo, Replacement};
///
/// assert_eq!(replace_logo("<p>no logo</p>"), Replacement::NotFound);
/// ```
pub fn replace_logo(content: &str) -> Replacement {
    use crate::core::LogoMatcher as _;

    plugins::RegexLogoMatcher::new().replace(content, LOGO_SVG)
}

/// Replace the logo in every `.html` page directly inside `dir`
///
/// Non-interactive: no prompt, no confirmation.
///
/// # Example
/// ```rust,no_run
/// let report = logoswap::update_dir(std::path::Path::new("site"));
/// assert_eq!(report.total, report.updated + report.not_found + report.failed);
/// ```
pub fn update_dir(dir: &std::path::Path) -> BatchReport {
    let updater = plugins::Updater::new();
    let pages = updater.discover(dir);
    updater.update_all(&pages, &mut plugins::NoopObserver)
}

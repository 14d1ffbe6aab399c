//! Core matcher trait for locating the logo anchor
//!
//! The anchor is a logo container wrapping a link wrapping an inline
//! `<svg>` block. Implementations decide how that structure is found; the
//! orchestrator only sees the resulting [`Replacement`].

use super::Replacement;

/// Core trait for logo matchers
///
/// # Example
/// ```
/// use logoswap::core::LogoMatcher;
/// use logoswap::plugins::RegexLogoMatcher;
///
/// let matcher = RegexLogoMatcher::new();
/// let page = r#"<div class="logo-container"><a href="/"><svg><circle/></svg></a></div>"#;
/// assert_eq!(matcher.count(page), 1);
/// ```
pub trait LogoMatcher: Send + Sync {
    /// Get the matcher name
    fn name(&self) -> &'static str;

    /// Count the non-overlapping anchor occurrences in `content`
    fn count(&self, content: &str) -> usize;

    /// Replace the `<svg>` block of every anchor occurrence with `payload`
    ///
    /// The container and link markup around each block is kept byte for
    /// byte. Returns [`Replacement::NotFound`] when nothing matched.
    fn replace(&self, content: &str, payload: &str) -> Replacement;
}

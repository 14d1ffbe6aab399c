//! Regex-based logo matcher
//!
//! Finds `<div class="logo-container">`, then an `<a ...>` link, then the
//! `<svg ...>...</svg>` block and the closing `</a>`, with any whitespace in
//! between. The `<svg>` body may span lines and ends at the first `</svg>`
//! that is followed by `</a>`.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::core::{LogoMatcher, Replacement};

/// Container + link opening, the `<svg>` block, and the link closing
pub const LOGO_PATTERN: &str =
    r#"(?s)(<div class="logo-container">\s*<a[^>]*>\s*)(<svg[^>]*>.*?</svg>)(\s*</a>)"#;

static LOGO_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LOGO_PATTERN).expect("logo pattern is a valid regex"));

/// Logo matcher driven by [`LOGO_PATTERN`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexLogoMatcher;

impl RegexLogoMatcher {
    pub fn new() -> Self {
        Self
    }
}

impl LogoMatcher for RegexLogoMatcher {
    fn name(&self) -> &'static str {
        "regex"
    }

    fn count(&self, content: &str) -> usize {
        LOGO_REGEX.find_iter(content).count()
    }

    fn replace(&self, content: &str, payload: &str) -> Replacement {
        trace!(input_len = content.len(), "RegexLogoMatcher::replace called");

        let mut occurrences = 0;
        let replaced = LOGO_REGEX.replace_all(content, |caps: &Captures| {
            occurrences += 1;
            format!("{}{}{}", &caps[1], payload, &caps[3])
        });

        if occurrences == 0 {
            debug!("No logo container found");
            return Replacement::NotFound;
        }

        debug!(occurrences, "Replaced logo blocks");
        Replacement::Found {
            content: replaced.into_owned(),
            occurrences,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LOGO_SVG;

    const PAYLOAD: &str = "<svg id=\"new\"><rect/></svg>";

    #[test]
    fn test_single_line_logo() {
        let matcher = RegexLogoMatcher::new();
        let input = r#"<div class="logo-container"><a href="/"><svg width="10"><circle/></svg></a></div>"#;

        let result = matcher.replace(input, PAYLOAD);
        assert_eq!(
            result,
            Replacement::Found {
                content: format!(r#"<div class="logo-container"><a href="/">{}</a></div>"#, PAYLOAD),
                occurrences: 1,
            }
        );
    }

    #[test]
    fn test_multiline_logo_with_whitespace() {
        let matcher = RegexLogoMatcher::new();
        let input = "<div class=\"logo-container\">\n  <a href=\"index.html\" class=\"brand\">\n    <svg viewBox=\"0 0 10 10\">\n      <path d=\"M0 0\"/>\n    </svg>\n  </a>\n</div>";

        let result = matcher.replace(input, PAYLOAD);
        assert_eq!(
            result.content_or(input),
            format!(
                "<div class=\"logo-container\">\n  <a href=\"index.html\" class=\"brand\">\n    {}\n  </a>\n</div>",
                PAYLOAD
            )
        );
    }

    #[test]
    fn test_every_occurrence_is_replaced() {
        let matcher = RegexLogoMatcher::new();
        let block = r#"<div class="logo-container"><a href="/"><svg><g/></svg></a></div>"#;
        let input = format!("<header>{}</header><footer>{}</footer>", block, block);

        let result = matcher.replace(&input, PAYLOAD);
        assert_eq!(result.occurrences(), 2);
        assert_eq!(result.content_or(&input).matches(PAYLOAD).count(), 2);
        assert!(!result.content_or(&input).contains("<g/>"));
    }

    #[test]
    fn test_missing_container_is_not_found() {
        let matcher = RegexLogoMatcher::new();
        let inputs = [
            "<html><body>No logo here</body></html>",
            r#"<div class="logo"><a href="/"><svg></svg></a></div>"#,
            r#"<div class="logo-container"><img src="logo.png"></div>"#,
            r#"<div class="logo-container"><svg></svg></div>"#,
        ];

        for input in inputs {
            assert_eq!(matcher.replace(input, PAYLOAD), Replacement::NotFound);
            assert_eq!(matcher.count(input), 0);
        }
    }

    #[test]
    fn test_payload_is_spliced_literally() {
        let matcher = RegexLogoMatcher::new();
        let input = r#"<div class="logo-container"><a><svg></svg></a>"#;

        let result = matcher.replace(input, "<svg>$1 ${3}</svg>");
        assert_eq!(
            result.content_or(input),
            r#"<div class="logo-container"><a><svg>$1 ${3}</svg></a>"#
        );
    }

    #[test]
    fn test_rerun_with_real_payload_is_identical() {
        let matcher = RegexLogoMatcher::new();
        let input = r#"<div class="logo-container"><a href="/"><svg><circle/></svg></a></div>"#;

        let first = matcher.replace(input, LOGO_SVG);
        let once = first.content_or(input).to_string();
        let second = matcher.replace(&once, LOGO_SVG);

        assert!(second.is_found());
        assert_eq!(second.content_or(&once), once);
    }

    #[test]
    fn test_matcher_name() {
        assert_eq!(RegexLogoMatcher::new().name(), "regex");
    }
}

//! Matcher implementations and the update orchestrator
//!
//! Matchers implement [`crate::core::LogoMatcher`]; the orchestrator drives
//! whichever matcher it is given over a directory of pages.

pub mod orchestrator;
pub mod regex_matcher;

pub use orchestrator::*;
pub use regex_matcher::*;

//! Core abstractions for logo replacement
//!
//! Matching is hidden behind the [`LogoMatcher`] trait; everything else here
//! is plain file and console plumbing used by the orchestrator.

mod backup;
mod config;
mod discovery;
mod error;
pub mod logging;
mod matcher;
mod payload;
mod prompt;
mod types;

pub use backup::*;
pub use config::*;
pub use discovery::*;
pub use error::*;
pub use logging::*;
pub use matcher::*;
pub use payload::*;
pub use prompt::*;
pub use types::*;

//! Directory and confirmation providers
//!
//! The updater never talks to the terminal itself. It asks a
//! [`PathProvider`] where the pages live and a [`ConfirmationProvider`]
//! whether to go ahead, so both can be swapped for fixed answers.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::LogoError;

/// Text shown when asking for the project directory
pub const PATH_PROMPT: &str = "Enter project directory path (or press Enter for current): ";

/// Text shown when asking to proceed
pub const CONFIRM_PROMPT: &str = "Proceed with logo replacement? (yes/no): ";

/// The only answer that lets a run proceed (after trimming and lower-casing)
pub const AFFIRMATIVE: &str = "yes";

/// Supplies the directory to process
pub trait PathProvider {
    fn project_dir(&mut self) -> Result<PathBuf, LogoError>;
}

/// Decides whether the discovered files may be modified
pub trait ConfirmationProvider {
    fn confirm(&mut self, files: &[PathBuf]) -> Result<bool, LogoError>;
}

/// Everything an interactive session asks for
pub trait SessionPrompt: PathProvider + ConfirmationProvider {}

impl<T: PathProvider + ConfirmationProvider> SessionPrompt for T {}

/// Pairs a path provider with a separate confirmation provider
#[derive(Debug, Clone)]
pub struct Prompts<P, C> {
    pub paths: P,
    pub confirmation: C,
}

impl<P, C> Prompts<P, C> {
    pub fn new(paths: P, confirmation: C) -> Self {
        Self {
            paths,
            confirmation,
        }
    }
}

impl<P: PathProvider, C> PathProvider for Prompts<P, C> {
    fn project_dir(&mut self) -> Result<PathBuf, LogoError> {
        self.paths.project_dir()
    }
}

impl<P, C: ConfirmationProvider> ConfirmationProvider for Prompts<P, C> {
    fn confirm(&mut self, files: &[PathBuf]) -> Result<bool, LogoError> {
        self.confirmation.confirm(files)
    }
}

/// A directory known up front
#[derive(Debug, Clone)]
pub struct FixedPath(pub PathBuf);

impl PathProvider for FixedPath {
    fn project_dir(&mut self) -> Result<PathBuf, LogoError> {
        Ok(self.0.clone())
    }
}

/// Confirms every run without asking
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl ConfirmationProvider for AssumeYes {
    fn confirm(&mut self, _files: &[PathBuf]) -> Result<bool, LogoError> {
        Ok(true)
    }
}

/// Line-oriented prompts over any reader/writer pair
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Show `prompt` and return the trimmed answer; end of input reads as ""
    fn ask(&mut self, prompt: &str) -> Result<String, LogoError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> PathProvider for ConsolePrompt<R, W> {
    fn project_dir(&mut self) -> Result<PathBuf, LogoError> {
        let answer = self.ask(PATH_PROMPT)?;
        if answer.is_empty() {
            Ok(PathBuf::from("."))
        } else {
            Ok(PathBuf::from(answer))
        }
    }
}

impl<R: BufRead, W: Write> ConfirmationProvider for ConsolePrompt<R, W> {
    fn confirm(&mut self, _files: &[PathBuf]) -> Result<bool, LogoError> {
        let answer = self.ask(CONFIRM_PROMPT)?;
        Ok(answer.to_lowercase() == AFFIRMATIVE)
    }
}

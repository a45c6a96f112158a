//! # Error Handling
//!
//! This module defines the centralized error type for the `example-submodules`
//! library. It uses `thiserror` to build a single `Error` enum covering every
//! failure the registration engine can report, with messages written for the
//! operator running the tool.
//!
//! ## Key Components
//!
//! - **`Error`**: All failure modes of the library. The first two variants are
//!   fatal preconditions that abort a run before any candidate is touched:
//!
//!   - `Configuration`: the organization is unset, the prefix is empty, the
//!     host is not a URL, or a settings file could not be read.
//!   - `Precondition`: the working directory is not inside a git work tree.
//!
//!   `GitCommand` is what a failed `git` invocation turns into. When it comes
//!   out of `git submodule add` it is recorded as a per-candidate failure
//!   rather than propagated.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.

use thiserror::Error;

/// Main error type for example-submodules operations
#[derive(Error, Debug)]
pub enum Error {
    /// The run configuration is missing or invalid.
    ///
    /// Carries an optional hint telling the operator which flag, variable or
    /// settings key to set.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Configuration {
        message: String,
        /// Optional hint for how to fix the configuration
        hint: Option<String>,
    },

    /// The tool was invoked somewhere it cannot operate.
    #[error("Precondition failed: {message}")]
    Precondition { message: String },

    /// A git command exited unsuccessfully or could not be spawned.
    #[error("Git command failed for {url}: {command} - {stderr}")]
    GitCommand {
        command: String,
        url: String,
        stderr: String,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    /// True for errors that must stop a run before any candidate is processed.
    pub fn is_fatal_precondition(&self) -> bool {
        matches!(self, Error::Configuration { .. } | Error::Precondition { .. })
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

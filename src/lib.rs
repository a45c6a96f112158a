//! # Example Submodules Library
//!
//! This library registers independently hosted example projects as git
//! submodules of a parent repository. Registration is idempotent: an example
//! whose path already exists, or that the `.gitmodules` manifest already
//! records, is skipped instead of being linked a second time.
//!
//! ## Quick Example
//!
//! ```
//! use example_submodules::config::Config;
//!
//! let config = Config::new("acme", "ex");
//! let resolved = config.resolve("01");
//!
//! assert_eq!(resolved.derived_repo_name, "ex-01");
//! assert_eq!(resolved.remote_url, "https://github.com/acme/ex-01.git");
//! assert_eq!(resolved.local_path, std::path::PathBuf::from("ex-01"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: Hosting service, organization and name
//!   prefix, and the pure mapping from an example name to its remote URL and
//!   local path.
//! - **Candidates (`candidate`)**: The ordered examples a run considers,
//!   taken from explicit names or from a scan of the repository root.
//! - **Guard (`guard`)**: Decides, before anything is mutated, whether a
//!   candidate must be skipped.
//! - **Linker (`linker`)**: Performs `git submodule add` for one candidate.
//! - **Reporter (`report`)**: Prints one line per candidate plus a summary and
//!   derives the exit status.
//! - **Git (`git`)**: The [`git::Vcs`] seam and its system-git implementation.
//!
//! ## Execution Flow
//!
//! [`registration::run`] validates the configuration, checks that the root is
//! a git work tree, enumerates candidates, and then runs guard and linker for
//! each candidate sequentially. Fatal problems abort the run before any
//! candidate is touched; per-candidate failures are recorded and the run
//! continues.

pub mod candidate;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod git;
pub mod guard;
pub mod linker;
pub mod output;
pub mod registration;
pub mod report;

#[cfg(test)]
mod resolve_proptest;

//! Registration guard: decides whether a candidate must be left alone before
//! anything mutating happens.
//!
//! Conditions are checked in a fixed order and the first match wins, so the
//! reported reason is deterministic:
//!
//! 1.  the local path already exists on disk,
//! 2.  the local path is already a registered submodule path,
//! 3.  the same example name was already handled earlier in this run.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::candidate::Candidate;
use crate::git::Manifest;

/// Why a candidate was not linked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    PathExists,
    AlreadyRegistered,
    Duplicate,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::PathExists => "path exists",
            SkipReason::AlreadyRegistered => "already registered",
            SkipReason::Duplicate => "duplicate",
        };
        f.write_str(text)
    }
}

/// Guard state for one run.
#[derive(Debug, Default)]
pub struct Guard {
    seen: HashSet<String>,
}

impl Guard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check `candidate` and mark its name as handled.
    ///
    /// `manifest` must be queried fresh for each candidate so that entries
    /// added earlier in the same run are visible.
    pub fn check(&mut self, candidate: &Candidate, root: &Path, manifest: &Manifest) -> Option<SkipReason> {
        let first_time = self.seen.insert(candidate.name.clone());
        let reason = should_skip(candidate, root, manifest);
        if reason.is_some() {
            return reason;
        }
        if !first_time {
            return Some(SkipReason::Duplicate);
        }
        None
    }
}

/// The path and manifest conditions, without run-level state.
pub fn should_skip(candidate: &Candidate, root: &Path, manifest: &Manifest) -> Option<SkipReason> {
    // symlink_metadata so that a dangling symlink still counts as present
    if root.join(&candidate.local_path).symlink_metadata().is_ok() {
        log::debug!("{}: {} exists", candidate.name, candidate.local_path.display());
        return Some(SkipReason::PathExists);
    }
    if manifest.contains_path(&candidate.local_path) {
        log::debug!(
            "{}: {} is already in the manifest",
            candidate.name,
            candidate.local_path.display()
        );
        return Some(SkipReason::AlreadyRegistered);
    }
    None
}

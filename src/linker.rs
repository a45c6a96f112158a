//! Linker: performs the registration of one candidate.
//!
//! Registration delegates to `git submodule add`, which is not transactional
//! from our side. The exit status is the only source of truth; the manifest is
//! not re-read afterwards, and a failed clone may leave behind whatever git
//! itself left behind. No retries are attempted.

use std::fmt;

use crate::candidate::Candidate;
use crate::git::Vcs;
use crate::guard::SkipReason;

/// Terminal state of one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunResult {
    Added,
    Skipped(SkipReason),
    Failed(String),
    /// Dry run: registration would have been attempted.
    Planned,
}

impl RunResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, RunResult::Failed(_))
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunResult::Added => write!(f, "added"),
            RunResult::Skipped(reason) => write!(f, "skipped ({})", reason),
            RunResult::Failed(cause) => write!(f, "failed: {}", cause),
            RunResult::Planned => write!(f, "would add"),
        }
    }
}

/// Performs `submodule add` for candidates through a [`Vcs`].
pub struct Linker<'a, V: Vcs + ?Sized> {
    vcs: &'a V,
    dry_run: bool,
}

impl<'a, V: Vcs + ?Sized> Linker<'a, V> {
    pub fn new(vcs: &'a V) -> Self {
        Self {
            vcs,
            dry_run: false,
        }
    }

    /// Report `Planned` instead of invoking git.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn link(&self, candidate: &Candidate) -> RunResult {
        if self.dry_run {
            log::info!(
                "dry run: would add {} at {}",
                candidate.remote_url,
                candidate.local_path.display()
            );
            return RunResult::Planned;
        }

        log::info!(
            "adding {} at {}",
            candidate.remote_url,
            candidate.local_path.display()
        );
        match self
            .vcs
            .submodule_add(&candidate.remote_url, &candidate.local_path)
        {
            Ok(()) => RunResult::Added,
            Err(e) => RunResult::Failed(format!(
                "{}\n  hint: verify that {} is reachable",
                e, candidate.remote_url
            )),
        }
    }
}

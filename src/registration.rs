//! # Registration Run
//!
//! Drives one run of the engine:
//!
//! 1.  Validate the configuration (fatal on error).
//! 2.  Check that the root is the top level of a git work tree (fatal on
//!     error).
//! 3.  Enumerate candidates.
//! 4.  For each candidate, strictly one after another: query the manifest,
//!     run the guard, and link if nothing says skip.
//!
//! Fatal errors are returned before any outcome is produced. Everything that
//! goes wrong for a single candidate is recorded as its outcome and the run
//! moves on to the next one.

use std::path::Path;

use crate::candidate::{self, Candidate};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::git::Vcs;
use crate::guard::Guard;
use crate::linker::{Linker, RunResult};
use crate::report::Outcome;

/// Options for a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Report what would be added without calling git.
    pub dry_run: bool,
}

/// Check the fatal preconditions of a run.
pub fn preflight<V: Vcs + ?Sized>(config: &Config, vcs: &V) -> Result<()> {
    config.validate()?;
    if !vcs.is_work_tree()? {
        return Err(Error::Precondition {
            message: "not inside a git work tree; run from the root of the parent repository"
                .to_string(),
        });
    }
    // Candidate paths and the manifest are both relative to the top level.
    if !vcs.is_top_level()? {
        return Err(Error::Precondition {
            message: "not at the top level of the git work tree; run from the root of the parent repository"
                .to_string(),
        });
    }
    Ok(())
}

/// Run registration and collect every outcome.
pub fn run<V: Vcs + ?Sized>(
    config: &Config,
    explicit_names: &[String],
    vcs: &V,
    root: &Path,
    options: RunOptions,
) -> Result<Vec<Outcome>> {
    run_with(config, explicit_names, vcs, root, options, |_| Ok(()))
}

/// Like [`run`], calling `on_outcome` as soon as each candidate finishes.
pub fn run_with<V, F>(
    config: &Config,
    explicit_names: &[String],
    vcs: &V,
    root: &Path,
    options: RunOptions,
    mut on_outcome: F,
) -> Result<Vec<Outcome>>
where
    V: Vcs + ?Sized,
    F: FnMut(&Outcome) -> Result<()>,
{
    preflight(config, vcs)?;
    let candidates = candidate::enumerate(config, root, explicit_names)?;
    log::debug!("processing {} candidate(s)", candidates.len());

    let linker = Linker::new(vcs).dry_run(options.dry_run);
    let mut guard = Guard::new();
    let mut outcomes = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let result = process(&candidate, root, vcs, &linker, &mut guard);
        let outcome = Outcome { candidate, result };
        on_outcome(&outcome)?;
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

fn process<V: Vcs + ?Sized>(
    candidate: &Candidate,
    root: &Path,
    vcs: &V,
    linker: &Linker<'_, V>,
    guard: &mut Guard,
) -> RunResult {
    let manifest = match vcs.manifest() {
        Ok(manifest) => manifest,
        Err(e) => return RunResult::Failed(format!("cannot read submodule manifest: {}", e)),
    };
    match guard.check(candidate, root, &manifest) {
        Some(reason) => RunResult::Skipped(reason),
        None => linker.link(candidate),
    }
}

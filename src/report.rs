//! # Reporter
//!
//! Turns per-candidate outcomes into the lines an operator reads and into the
//! process exit status.
//!
//! A run fails if and only if at least one candidate ended in
//! [`RunResult::Failed`]. Skipped and planned candidates never affect the
//! exit status. When anything was added, the reporter reminds the caller that
//! `.gitmodules` and the new paths are staged but not committed.

use std::io::{self, Write};

use crate::candidate::Candidate;
use crate::exit_codes;
use crate::linker::RunResult;
use crate::output::{emoji, paint, OutputConfig, Tone};

/// A candidate together with how its processing ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub candidate: Candidate,
    pub result: RunResult,
}

/// Counts per outcome kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub added: usize,
    pub skipped: usize,
    pub failed: usize,
    pub planned: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &RunResult) {
        match result {
            RunResult::Added => self.added += 1,
            RunResult::Skipped(_) => self.skipped += 1,
            RunResult::Failed(_) => self.failed += 1,
            RunResult::Planned => self.planned += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.added + self.skipped + self.failed + self.planned
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            exit_codes::SUCCESS
        } else {
            exit_codes::FAILURE
        }
    }
}

/// Writes outcome lines and the final summary.
pub struct Reporter<W: Write> {
    out: W,
    output: OutputConfig,
    quiet: bool,
    summary: RunSummary,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, output: OutputConfig) -> Self {
        Self {
            out,
            output,
            quiet: false,
            summary: RunSummary::default(),
        }
    }

    /// Suppress everything except the exit status.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Record one outcome and print its line.
    pub fn outcome(&mut self, outcome: &Outcome) -> io::Result<()> {
        self.summary.record(&outcome.result);
        if self.quiet {
            return Ok(());
        }

        let out = &self.output;
        let name = &outcome.candidate.name;
        let path = outcome.candidate.local_path.display().to_string();
        match &outcome.result {
            RunResult::Added => writeln!(
                self.out,
                "{} {} -> {}",
                emoji(out, "✅", "[ADDED]"),
                paint(out, name, Tone::Good),
                path
            ),
            RunResult::Skipped(reason) => writeln!(
                self.out,
                "{} {} -> {} ({})",
                emoji(out, "⏭️ ", "[SKIPPED]"),
                paint(out, name, Tone::Muted),
                path,
                reason
            ),
            RunResult::Failed(cause) => writeln!(
                self.out,
                "{} {} -> {}: {}",
                emoji(out, "❌", "[FAILED]"),
                paint(out, name, Tone::Bad),
                path,
                cause
            ),
            RunResult::Planned => writeln!(
                self.out,
                "{} {} -> {} ({})",
                emoji(out, "🔎", "[PLANNED]"),
                paint(out, name, Tone::Info),
                path,
                outcome.candidate.remote_url
            ),
        }
    }

    /// Print the summary and return the counts.
    pub fn finish(mut self) -> io::Result<RunSummary> {
        let summary = self.summary;
        if self.quiet {
            return Ok(summary);
        }

        let out = &self.output;
        if summary.total() == 0 {
            writeln!(
                self.out,
                "{} No example candidates found",
                emoji(out, "📭", "[INFO]")
            )?;
            return Ok(summary);
        }

        let mut line = format!(
            "Summary: {} added, {} skipped, {} failed",
            summary.added, summary.skipped, summary.failed
        );
        if summary.planned > 0 {
            line.push_str(&format!(", {} planned", summary.planned));
        }
        writeln!(self.out)?;
        writeln!(self.out, "{} {}", emoji(out, "📊", "[INFO]"), line)?;

        if summary.added > 0 {
            writeln!(
                self.out,
                "{} Submodules were added but not committed. Review and commit .gitmodules and the new paths.",
                emoji(out, "💡", "[NOTE]")
            )?;
        }
        Ok(summary)
    }
}

/// Report a complete list of outcomes and return the process exit code.
pub fn report<W: Write>(out: W, output: OutputConfig, outcomes: &[Outcome]) -> io::Result<i32> {
    let mut reporter = Reporter::new(out, output);
    for outcome in outcomes {
        reporter.outcome(outcome)?;
    }
    Ok(reporter.finish()?.exit_code())
}

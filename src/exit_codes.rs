//! Process exit codes.
//!
//! - `0`: every candidate was added, skipped or planned
//! - `1`: at least one candidate failed, or a fatal precondition aborted the run
//! - `2`: invalid command-line usage (emitted by `clap`)

/// The run completed without a failed candidate.
pub const SUCCESS: i32 = 0;

/// A candidate failed or the run was aborted before processing.
pub const FAILURE: i32 = 1;

/// Invalid command-line usage.
pub const USAGE: i32 = 2;

//! # Example Submodules CLI
//!
//! This is the binary entry point for the `example-submodules` command-line
//! tool. It parses arguments with `clap`, runs the registration engine from
//! the library crate, and turns the run summary into the process exit code.
//! Fatal errors propagate through `anyhow` and exit with status 1 before any
//! candidate is processed.

mod cli;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse();
    let code = cli.execute()?;
    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}

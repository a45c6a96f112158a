//! Shared test utilities for the CLI end-to-end tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_git_repo();
//!     fixture.command().arg("--help").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::git_available;
    pub use super::TestFixture;
}

/// Environment variables that would leak configuration into a test run.
const CONFIG_ENV_VARS: &[&str] = &[
    "EXAMPLE_SUBMODULES_ORG",
    "EXAMPLE_SUBMODULES_PREFIX",
    "EXAMPLE_SUBMODULES_HOST",
    "EXAMPLE_SUBMODULES_CONFIG",
    "RUST_LOG",
];

/// Whether a usable `git` binary is on the PATH.
///
/// Tests that need a real work tree return early when it is not.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Run git in `dir`, panicking with stderr on failure.
pub fn git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}

/// A temporary directory standing in for the parent repository.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Initialise a git repository in the fixture directory.
    pub fn with_git_repo(self) -> Self {
        git(self.path(), &["init", "-q"]);
        self
    }

    /// Add a `.example-submodules.yaml` settings file.
    #[allow(dead_code)]
    pub fn with_settings(self, content: &str) -> Self {
        self.with_file(".example-submodules.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Create an empty directory.
    #[allow(dead_code)]
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command running in this fixture's directory.
    ///
    /// Configuration variables from the outer environment are removed, colour
    /// is disabled, and git is kept from discovering repositories above the
    /// fixture.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("example-submodules");
        cmd.current_dir(self.path());
        for var in CONFIG_ENV_VARS {
            cmd.env_remove(var);
        }
        if let Some(parent) = self.path().parent() {
            cmd.env("GIT_CEILING_DIRECTORIES", parent);
        }
        cmd.arg("--color").arg("never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

//! Git access for the registration engine.
//!
//! Everything the engine needs from version control goes through the [`Vcs`]
//! trait: whether the root is a work tree, which submodule paths the
//! `.gitmodules` manifest already records, and the `git submodule add` call
//! itself. [`GitCli`] implements it with the system `git` binary, which picks
//! up SSH keys, credential helpers and `~/.gitconfig` without any help from us.

use std::path::{Component, Path, PathBuf};
use std::process::{Command, Output};

use regex::Regex;

use crate::error::{Error, Result};

/// Name of the submodule manifest in the repository root.
pub const MANIFEST_FILENAME: &str = ".gitmodules";

/// One `[submodule "<name>"]` section of the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub name: String,
    pub path: Option<PathBuf>,
    pub url: Option<String>,
}

/// Parsed view of the submodule manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Path equality against registered submodule paths, ignoring `.`
    /// components so `./ex-01` and `ex-01` name the same entry.
    pub fn contains_path(&self, path: &Path) -> bool {
        self.entries.iter().any(|entry| {
            entry
                .path
                .as_deref()
                .is_some_and(|registered| same_path(registered, path))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a manifest from `git config --null --get-regexp` output.
    ///
    /// Each record is `<key>\n<value>\0`. Keys other than
    /// `submodule.<name>.path` and `submodule.<name>.url` are ignored.
    pub fn from_config_output(output: &str) -> Result<Self> {
        let key_pattern = Regex::new(r"^submodule\.(.+)\.(path|url)$")?;
        let mut manifest = Manifest::default();

        for record in output.split('\0').filter(|r| !r.is_empty()) {
            let (key, value) = record.split_once('\n').unwrap_or((record, ""));
            let Some(caps) = key_pattern.captures(key) else {
                log::warn!("ignoring unexpected manifest key '{}'", key);
                continue;
            };
            let name = &caps[1];
            let position = match manifest.entries.iter().position(|e| e.name == name) {
                Some(position) => position,
                None => {
                    manifest.entries.push(ManifestEntry {
                        name: name.to_string(),
                        path: None,
                        url: None,
                    });
                    manifest.entries.len() - 1
                }
            };
            let entry = &mut manifest.entries[position];
            match &caps[2] {
                "path" => entry.path = Some(PathBuf::from(value)),
                _ => entry.url = Some(value.to_string()),
            }
        }

        Ok(manifest)
    }
}

fn same_path(a: &Path, b: &Path) -> bool {
    fn significant(path: &Path) -> impl Iterator<Item = Component<'_>> {
        path.components()
            .filter(|c| !matches!(c, Component::CurDir))
    }
    significant(a).eq(significant(b))
}

/// Operations the engine needs from the version-control tool.
pub trait Vcs {
    /// Whether the repository root is inside a git work tree.
    fn is_work_tree(&self) -> Result<bool>;

    /// Whether the repository root is the top level of that work tree.
    fn is_top_level(&self) -> Result<bool>;

    /// Current contents of the submodule manifest.
    fn manifest(&self) -> Result<Manifest>;

    /// Clone `remote_url` into `local_path` and record it in the manifest.
    fn submodule_add(&self, remote_url: &str, local_path: &Path) -> Result<()>;
}

/// [`Vcs`] backed by the system `git` command, run from `root`.
#[derive(Debug, Clone)]
pub struct GitCli {
    root: PathBuf,
}

impl GitCli {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn git(&self, args: &[&str]) -> std::io::Result<Output> {
        log::debug!("running git {} in {}", args.join(" "), self.root.display());
        Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
    }
}

impl Vcs for GitCli {
    fn is_work_tree(&self) -> Result<bool> {
        let output = self
            .git(&["rev-parse", "--is-inside-work-tree"])
            .map_err(|e| Error::Precondition {
                message: format!("unable to run git: {}", e),
            })?;
        Ok(output.status.success() && String::from_utf8_lossy(&output.stdout).trim() == "true")
    }

    fn is_top_level(&self) -> Result<bool> {
        let output = self
            .git(&["rev-parse", "--show-prefix"])
            .map_err(|e| Error::Precondition {
                message: format!("unable to run git: {}", e),
            })?;
        if !output.status.success() {
            return Err(Error::Precondition {
                message: format!(
                    "git rev-parse --show-prefix failed: {}",
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }
        // Empty prefix: we are at the top of the work tree.
        Ok(String::from_utf8_lossy(&output.stdout).trim().is_empty())
    }

    fn manifest(&self) -> Result<Manifest> {
        if !self.root.join(MANIFEST_FILENAME).is_file() {
            return Ok(Manifest::default());
        }

        let command = "config --file .gitmodules --get-regexp";
        let output = self
            .git(&[
                "config",
                "--file",
                MANIFEST_FILENAME,
                "--null",
                "--get-regexp",
                r"^submodule\..*\.(path|url)$",
            ])
            .map_err(|e| Error::GitCommand {
                command: command.to_string(),
                url: MANIFEST_FILENAME.to_string(),
                stderr: e.to_string(),
            })?;

        // Exit status 1 means no key matched.
        if output.status.code() == Some(1) {
            return Ok(Manifest::default());
        }
        if !output.status.success() {
            return Err(Error::GitCommand {
                command: command.to_string(),
                url: MANIFEST_FILENAME.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Manifest::from_config_output(&String::from_utf8_lossy(&output.stdout))
    }

    fn submodule_add(&self, remote_url: &str, local_path: &Path) -> Result<()> {
        let path = local_path.to_string_lossy().into_owned();
        let output = self
            .git(&["submodule", "add", "--", remote_url, path.as_str()])
            .map_err(|e| Error::GitCommand {
                command: "submodule add".to_string(),
                url: remote_url.to_string(),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::GitCommand {
                command: "submodule add".to_string(),
                url: remote_url.to_string(),
                stderr: describe_failure(stderr.trim()),
            });
        }

        Ok(())
    }
}

/// Add a hint to common `git submodule add` failures.
fn describe_failure(stderr: &str) -> String {
    let lowered = stderr.to_lowercase();
    if lowered.contains("not found") || lowered.contains("does not appear to be a git repository") {
        format!(
            "repository not found. Check that the remote exists and the example name is spelled correctly.\n{}",
            stderr
        )
    } else if stderr.contains("Authentication failed")
        || stderr.contains("Permission denied")
        || stderr.contains("Could not read from remote repository")
    {
        format!(
            "authentication failed. Make sure you have access to the repository \
             (SSH key loaded, credential helper or access token configured).\n{}",
            stderr
        )
    } else {
        stderr.to_string()
    }
}

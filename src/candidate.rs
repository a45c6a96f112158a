//! # Candidate Enumeration
//!
//! Produces the ordered list of examples a run will consider. Callers either
//! pass explicit names, which are kept in the order given (duplicates
//! included), or pass nothing, in which case the repository root is scanned
//! for directories following the `<prefix>-<name>` convention.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Error, Result};

/// One example under consideration for registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Short example identifier, e.g. `01_trimesh`.
    pub name: String,
    /// `<prefix>-<name>`
    pub derived_repo_name: String,
    pub remote_url: String,
    /// Path relative to the repository root; equal to `derived_repo_name`.
    pub local_path: PathBuf,
}

impl Candidate {
    /// Build a candidate by resolving `name` against `config`.
    pub fn resolve(config: &Config, name: &str) -> Self {
        let resolved = config.resolve(name);
        Self {
            name: name.to_string(),
            derived_repo_name: resolved.derived_repo_name,
            remote_url: resolved.remote_url,
            local_path: resolved.local_path,
        }
    }
}

/// Produce the candidates for a run.
///
/// Non-empty `explicit_names` map one-to-one onto candidates. Otherwise the
/// direct children of `root` are scanned and sorted by name.
pub fn enumerate(config: &Config, root: &Path, explicit_names: &[String]) -> Result<Vec<Candidate>> {
    if !explicit_names.is_empty() {
        return explicit_names
            .iter()
            .map(|raw| {
                let name = validate_name(raw)?;
                Ok(Candidate::resolve(config, name))
            })
            .collect();
    }

    let mut names = scan(root, &config.prefix)?;
    names.sort();
    log::debug!(
        "directory scan of {} found {} candidate(s)",
        root.display(),
        names.len()
    );
    Ok(names
        .iter()
        .map(|name| Candidate::resolve(config, name))
        .collect())
}

/// Names of the directory entries under `root` matching `<prefix>-<suffix>`.
fn scan(root: &Path, prefix: &str) -> Result<Vec<String>> {
    let marker = format!("{}-", prefix);
    let mut names = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        let entry = entry.map_err(std::io::Error::from)?;
        let Some(file_name) = entry.file_name().to_str() else {
            log::warn!("skipping non UTF-8 entry {}", entry.path().display());
            continue;
        };
        if let Some(suffix) = file_name.strip_prefix(&marker) {
            if !suffix.is_empty() {
                names.push(suffix.to_string());
            }
        }
    }

    Ok(names)
}

/// Reject names that cannot form a single path component.
fn validate_name(raw: &str) -> Result<&str> {
    let name = raw.trim();
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\'])
        || name.chars().any(char::is_whitespace);
    if invalid {
        return Err(Error::Configuration {
            message: format!("invalid example name '{}'", raw),
            hint: Some("names are single path components such as 01_trimesh".to_string()),
        });
    }
    Ok(name)
}

//! Property-based tests for name resolution.
//!
//! These tests use proptest to generate random configurations and example
//! names and verify that the resolver's invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::candidate::Candidate;
    use crate::config::Config;
    use proptest::prelude::*;
    use std::path::PathBuf;

    fn segment() -> impl Strategy<Value = String> {
        "[A-Za-z0-9_][A-Za-z0-9_.-]{0,15}"
    }

    proptest! {
        /// Property: resolve is deterministic (same input = same output)
        #[test]
        fn resolve_is_deterministic(org in segment(), prefix in segment(), name in segment()) {
            let config = Config::new(org, prefix);
            prop_assert_eq!(config.resolve(&name), config.resolve(&name));
        }

        /// Property: local path equals the derived repository name
        #[test]
        fn local_path_is_derived_name(org in segment(), prefix in segment(), name in segment()) {
            let config = Config::new(org, prefix.clone());
            let resolved = config.resolve(&name);
            prop_assert_eq!(&resolved.derived_repo_name, &format!("{}-{}", prefix, name));
            prop_assert_eq!(resolved.local_path, PathBuf::from(&resolved.derived_repo_name));
        }

        /// Property: the remote URL ends with the derived repository name
        #[test]
        fn remote_url_shape(org in segment(), prefix in segment(), name in segment()) {
            let config = Config::new(org.clone(), prefix);
            let resolved = config.resolve(&name);
            let expected_suffix = format!("/{}/{}.git", org, resolved.derived_repo_name);
            prop_assert!(resolved.remote_url.starts_with("https://github.com/"));
            prop_assert!(resolved.remote_url.ends_with(&expected_suffix));
        }

        /// Property: candidates built from the same name are equal
        #[test]
        fn candidate_is_pure(org in segment(), prefix in segment(), name in segment()) {
            let config = Config::new(org, prefix);
            prop_assert_eq!(Candidate::resolve(&config, &name), Candidate::resolve(&config, &name));
        }
    }
}

//! CLI argument parsing and command dispatch

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};

use example_submodules::config::{self, Config, Settings};
use example_submodules::error::Error;
use example_submodules::exit_codes;
use example_submodules::git::GitCli;
use example_submodules::output::OutputConfig;
use example_submodules::registration::{self, RunOptions};
use example_submodules::report::Reporter;

/// Register example repositories as git submodules of the current repository.
///
/// With no NAME arguments, every directory in the current directory named
/// `<prefix>-<name>` is considered. Examples whose path already exists or that
/// are already listed in .gitmodules are skipped. Changes are not committed.
#[derive(Parser, Debug)]
#[command(name = "example-submodules")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Example names to register, e.g. 01_trimesh (default: scan the current directory)
    #[arg(value_name = "NAME")]
    names: Vec<String>,

    /// Organization that owns the example repositories
    #[arg(long, value_name = "ORG", env = "EXAMPLE_SUBMODULES_ORG")]
    org: Option<String>,

    /// Prefix of derived repository names [default: vuer-example]
    #[arg(long, value_name = "PREFIX", env = "EXAMPLE_SUBMODULES_PREFIX")]
    prefix: Option<String>,

    /// Base URL of the hosting service [default: https://github.com]
    #[arg(long, value_name = "URL", env = "EXAMPLE_SUBMODULES_HOST")]
    host: Option<String>,

    /// Settings file (default: .example-submodules.yaml if present)
    #[arg(short, long, value_name = "PATH", env = "EXAMPLE_SUBMODULES_CONFIG")]
    config: Option<PathBuf>,

    /// Show what would be added without running git submodule add
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,

    /// Colorize output (always, never, auto)
    #[arg(
        long,
        value_name = "WHEN",
        default_value = "auto",
        value_parser = ["auto", "always", "never"]
    )]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

impl Cli {
    /// Execute the CLI command and return the process exit code
    pub fn execute(self) -> Result<i32> {
        init_logging(&self.log_level);

        if let Some(shell) = self.completions {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(shell, &mut cmd, name, &mut io::stdout());
            return Ok(exit_codes::SUCCESS);
        }

        let root = std::env::current_dir()?;
        let file_settings = config::load_settings(self.config.as_deref(), &root)?;
        let config = Config::from_settings(file_settings.merged_with(Settings {
            host: self.host,
            org: self.org,
            prefix: self.prefix,
        }));
        log::debug!("resolved configuration: {:?}", config);

        let vcs = GitCli::new(&root);
        let stdout = io::stdout();
        let mut reporter = Reporter::new(stdout.lock(), OutputConfig::from_env_and_flag(&self.color))
            .quiet(self.quiet);

        registration::run_with(
            &config,
            &self.names,
            &vcs,
            &root,
            RunOptions {
                dry_run: self.dry_run,
            },
            |outcome| reporter.outcome(outcome).map_err(Error::from),
        )?;

        Ok(reporter.finish()?.exit_code())
    }
}

/// Initialise `env_logger`; `RUST_LOG` takes precedence over `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_positional_names() {
        let cli = Cli::try_parse_from(["example-submodules", "b", "a", "a"]).unwrap();
        assert_eq!(cli.names, vec!["b", "a", "a"]);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_parses_config_flags() {
        let cli = Cli::try_parse_from([
            "example-submodules",
            "--org",
            "acme",
            "--prefix",
            "ex",
            "--host",
            "https://git.example.org",
            "-n",
            "01",
        ])
        .unwrap();
        assert_eq!(cli.org.as_deref(), Some("acme"));
        assert_eq!(cli.prefix.as_deref(), Some("ex"));
        assert_eq!(cli.host.as_deref(), Some("https://git.example.org"));
        assert!(cli.dry_run);
        assert_eq!(cli.names, vec!["01"]);
    }

    #[test]
    fn test_rejects_unknown_color() {
        assert!(Cli::try_parse_from(["example-submodules", "--color", "sometimes"]).is_err());
    }
}

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Overrides;

/// Bootstrap a GitHub repository with a Terraform backend on AWS and
/// GitHub Actions CI/CD by running the setup scripts from an interactive menu.
#[derive(Parser, Debug)]
#[command(name = "repo-bootstrap", version, about, long_about = None)]
pub struct Cli {
    /// Definitions file with NAME="VALUE" lines [default: scripts/0-variables.sh]
    #[arg(short, long, env = "REPO_BOOTSTRAP_DEFINITIONS")]
    pub definitions: Option<PathBuf>,

    /// Settings file (TOML)
    #[arg(short, long, env = "REPO_BOOTSTRAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print sensitive values (account ID, ARNs) instead of masking them
    #[arg(long)]
    pub show_values: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            definitions_file: self.definitions.clone(),
            show_values: self.show_values,
        }
    }

    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }

    /// Log filter: `rust_log` (the value of `RUST_LOG`) when set and
    /// non-empty, otherwise the level chosen with `-v`.
    pub fn env_filter(&self, rust_log: Option<&str>) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(self.log_level().into())
            .parse_lossy(rust_log.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "repo-bootstrap",
            "-d",
            "vars.sh",
            "--show-values",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.definitions, Some(PathBuf::from("vars.sh")));
        assert!(cli.show_values);
        assert_eq!(cli.log_level(), tracing::Level::DEBUG);

        let overrides = cli.overrides();
        assert!(overrides.show_values);
        assert_eq!(overrides.definitions_file, Some(PathBuf::from("vars.sh")));
    }

    #[test]
    fn test_rust_log_overrides_verbosity() {
        let quiet = Cli::try_parse_from(["repo-bootstrap"]).unwrap();
        assert_eq!(
            quiet.env_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );

        let verbose = Cli::try_parse_from(["repo-bootstrap", "-vv"]).unwrap();
        assert_eq!(
            verbose.env_filter(Some("error")).max_level_hint(),
            Some(LevelFilter::ERROR)
        );
    }

    #[test]
    fn test_verbosity_applies_without_rust_log() {
        let quiet = Cli::try_parse_from(["repo-bootstrap"]).unwrap();
        assert_eq!(
            quiet.env_filter(None).max_level_hint(),
            Some(LevelFilter::WARN)
        );
        assert_eq!(
            quiet.env_filter(Some("")).max_level_hint(),
            Some(LevelFilter::WARN)
        );

        let verbose = Cli::try_parse_from(["repo-bootstrap", "-v"]).unwrap();
        assert_eq!(
            verbose.env_filter(None).max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["repo-bootstrap", "7"]).is_err());
    }
}

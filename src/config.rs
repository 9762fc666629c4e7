use std::env;

use crate::cli::Cli;

pub const LOG_FILTER_ENV_VAR: &str = "DISH_CONFIGURATOR_LOG";
pub const JSON_OUTPUT_ENV_VAR: &str = "DISH_CONFIGURATOR_JSON";
const DEFAULT_LOG_FILTER: &str = "dish_configurator=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    OneShot,
    Script(std::path::PathBuf),
    Interactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_filter: String,
    pub json_output: bool,
    pub mode: RunMode,
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl AppConfig {
    /// Environment first (`.env` is expected to be loaded already), then
    /// command-line flags on top.
    pub fn from_env_and_cli(cli: &Cli) -> Self {
        Self::resolve(
            env::var(LOG_FILTER_ENV_VAR).ok(),
            env::var(JSON_OUTPUT_ENV_VAR).ok(),
            cli,
        )
    }

    fn resolve(log_filter: Option<String>, json_output: Option<String>, cli: &Cli) -> Self {
        let mode = if let Some(path) = &cli.script {
            RunMode::Script(path.clone())
        } else if cli.interactive {
            RunMode::Interactive
        } else {
            RunMode::OneShot
        };

        AppConfig {
            log_filter: log_filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            json_output: cli.json || json_output.as_deref().is_some_and(parse_flag),
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["dish-configurator"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::resolve(None, None, &cli(&[]));
        assert_eq!(config.log_filter, "dish_configurator=info");
        assert!(!config.json_output);
        assert_eq!(config.mode, RunMode::OneShot);
    }

    #[test]
    fn test_env_values_and_cli_override() {
        let config = AppConfig::resolve(Some("debug".into()), Some("TRUE".into()), &cli(&["-i"]));
        assert_eq!(config.log_filter, "debug");
        assert!(config.json_output);
        assert_eq!(config.mode, RunMode::Interactive);

        let config = AppConfig::resolve(None, Some("0".into()), &cli(&["--json", "--script", "dish.txt"]));
        assert!(config.json_output);
        assert_eq!(config.mode, RunMode::Script("dish.txt".into()));
    }
}

//! Command-line configuration for the dashboard binary.

use anyhow::Result;
use std::path::PathBuf;

use crate::dashboard::LoadSchedule;
use crate::notifier::SchemeSupport;

/// Runtime settings of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardConfig {
    /// JSON data set replacing the built-in sample data
    pub data_path: Option<PathBuf>,
    /// Preference file replacing the per-user default
    pub prefs_path: Option<PathBuf>,
    /// Skip the simulated loading delays
    pub instant: bool,
    /// Restrict system theme notifications to the legacy listener adapter
    pub legacy_scheme: bool,
}

impl DashboardConfig {
    pub fn load_schedule(&self) -> LoadSchedule {
        if self.instant {
            LoadSchedule::instant()
        } else {
            LoadSchedule::default()
        }
    }

    pub fn scheme_support(&self) -> SchemeSupport {
        if self.legacy_scheme {
            SchemeSupport::legacy_only()
        } else {
            SchemeSupport::modern()
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(DashboardConfig),
    Help,
}

/// Parses arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut config = DashboardConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                let Some(path) = args.next() else {
                    anyhow::bail!("--data requires a file path argument");
                };
                config.data_path = Some(PathBuf::from(path));
            }
            "--prefs" => {
                let Some(path) = args.next() else {
                    anyhow::bail!("--prefs requires a file path argument");
                };
                config.prefs_path = Some(PathBuf::from(path));
            }
            "--instant" => {
                config.instant = true;
            }
            "--legacy-scheme" => {
                config.legacy_scheme = true;
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ => {
                tracing::warn!(argument = %arg, "ignoring unknown argument");
            }
        }
    }

    Ok(Command::Run(config))
}

pub fn help_text() -> &'static str {
    concat!(
        "Garage dashboard\n",
        "Usage: garage-gui [OPTIONS]\n",
        "\n",
        "OPTIONS:\n",
        "  --data <FILE>          Load dashboard data from a JSON file\n",
        "  --prefs <FILE>         Store preferences in FILE instead of the config directory\n",
        "  --instant              Show every section without simulated loading delays\n",
        "  --legacy-scheme        Follow the system theme through legacy listeners only\n",
        "  -h, --help             Show this help message\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let command = parse_args(args(&[])).unwrap();
        assert_eq!(command, Command::Run(DashboardConfig::default()));
    }

    #[test]
    fn test_all_flags() {
        let command = parse_args(args(&[
            "--data", "data.json", "--prefs", "prefs.json", "--instant", "--legacy-scheme",
        ]))
        .unwrap();

        let Command::Run(config) = command else {
            panic!("expected run command");
        };
        assert_eq!(config.data_path, Some(PathBuf::from("data.json")));
        assert_eq!(config.prefs_path, Some(PathBuf::from("prefs.json")));
        assert_eq!(config.load_schedule(), LoadSchedule::instant());
        assert_eq!(config.scheme_support(), SchemeSupport::legacy_only());
    }

    #[test]
    fn test_missing_value_is_an_error() {
        let err = parse_args(args(&["--data"])).unwrap_err();
        assert!(err.to_string().contains("--data"));
    }

    #[test]
    fn test_help_and_unknown_arguments() {
        assert_eq!(parse_args(args(&["--verbose", "--help"])).unwrap(), Command::Help);
        assert!(help_text().contains("--instant"));
    }
}

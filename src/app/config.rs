use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{ArgAction, Parser};
use serde::Deserialize;
use tracing::warn;

use crate::data::KillSignal;
use crate::error::{KtopError, Result};

const MIN_REFRESH_MS: u64 = 100;
const DEFAULT_REFRESH_MS: u64 = 2000;
const DEFAULT_ROWS: usize = 15;

/// Command-line flags
#[derive(Debug, Default, Parser)]
#[command(name = "ktop", version, about = "Interactive terminal process monitor")]
pub struct Cli {
    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Auto-refresh interval in milliseconds (min: 100)
    #[arg(long, value_name = "MS")]
    pub interval_ms: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Signal sent by `kill`: kill | term
    #[arg(long, value_name = "SIGNAL", value_parser = parse_signal)]
    pub signal: Option<KillSignal>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_signal(value: &str) -> std::result::Result<KillSignal, String> {
    KillSignal::parse(value).ok_or_else(|| format!("unknown signal '{value}' (expected kill or term)"))
}

/// Runtime configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub refresh_interval: Duration,
    pub kill_signal: KillSignal,
    pub display: DisplaySettings,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Rows shown by `list` and each auto-refresh tick
    pub list_limit: usize,
    /// Rows shown by `top` without an argument
    pub top_default: usize,
    pub color: bool,
    pub show_legend: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            list_limit: DEFAULT_ROWS,
            top_default: DEFAULT_ROWS,
            color: true,
            show_legend: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::from_millis(DEFAULT_REFRESH_MS),
            kill_signal: KillSignal::default(),
            display: DisplaySettings::default(),
        }
    }
}

/// File-based configuration (TOML)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    general: GeneralConfig,
    display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct GeneralConfig {
    refresh_interval_ms: u64,
    kill_signal: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: DEFAULT_REFRESH_MS,
            kill_signal: "kill".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DisplayConfig {
    list_limit: usize,
    top_default: usize,
    color: bool,
    show_legend: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            list_limit: DEFAULT_ROWS,
            top_default: DEFAULT_ROWS,
            color: true,
            show_legend: true,
        }
    }
}

impl Config {
    /// Defaults, overlaid by the config file, overlaid by flags.
    pub fn load(cli: &Cli) -> Result<Self> {
        let file_config = match &cli.config {
            Some(path) => read_config_file(path)?,
            None => load_default_file(),
        };
        Self::resolve(file_config, cli)
    }

    fn resolve(file_config: FileConfig, cli: &Cli) -> Result<Self> {
        let file_signal = KillSignal::parse(&file_config.general.kill_signal).ok_or_else(|| {
            KtopError::config(format!(
                "unknown kill_signal '{}' (expected kill or term)",
                file_config.general.kill_signal
            ))
        })?;

        let refresh_ms = cli
            .interval_ms
            .unwrap_or(file_config.general.refresh_interval_ms);
        let display = &file_config.display;

        Ok(Self {
            refresh_interval: Duration::from_millis(normalize_refresh_ms(refresh_ms)),
            kill_signal: cli.signal.unwrap_or(file_signal),
            display: DisplaySettings {
                list_limit: normalize_rows(display.list_limit),
                top_default: normalize_rows(display.top_default),
                color: display.color && !cli.no_color,
                show_legend: display.show_legend,
            },
        })
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ktop").join("config.toml"))
}

fn load_default_file() -> FileConfig {
    let Some(path) = config_path() else {
        return FileConfig::default();
    };
    if !path.exists() {
        return FileConfig::default();
    }
    read_config_file(&path).unwrap_or_else(|err| {
        warn!(%err, "ignoring config file");
        FileConfig::default()
    })
}

fn read_config_file(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => KtopError::config_not_found(path.to_path_buf()),
        _ => KtopError::config_invalid(path.to_path_buf(), err.to_string()),
    })?;
    parse_file_config(&content).map_err(|err| match err {
        KtopError::Config { message } => KtopError::config_invalid(path.to_path_buf(), message),
        other => other,
    })
}

fn parse_file_config(content: &str) -> Result<FileConfig> {
    Ok(toml::from_str(content)?)
}

fn normalize_refresh_ms(value: u64) -> u64 {
    value.max(MIN_REFRESH_MS)
}

fn normalize_rows(value: usize) -> usize {
    if value == 0 { DEFAULT_ROWS } else { value }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn normalize_refresh_ms_clamps_to_min() {
        assert_eq!(normalize_refresh_ms(0), MIN_REFRESH_MS);
        assert_eq!(normalize_refresh_ms(MIN_REFRESH_MS), MIN_REFRESH_MS);
        assert_eq!(normalize_refresh_ms(MIN_REFRESH_MS + 5), MIN_REFRESH_MS + 5);
    }

    #[test]
    fn file_config_defaults() {
        let config = parse_file_config("").unwrap();
        assert_eq!(config.general.refresh_interval_ms, DEFAULT_REFRESH_MS);
        assert_eq!(config.display.list_limit, DEFAULT_ROWS);
        assert!(config.display.color);
    }

    #[test]
    fn file_config_partial() {
        let config = parse_file_config(
            r#"
            [display]
            top_default = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.general.refresh_interval_ms, DEFAULT_REFRESH_MS);
        assert_eq!(config.display.top_default, 5);
    }

    #[test]
    fn flags_override_file() {
        let file_config = parse_file_config(
            r#"
            [general]
            refresh_interval_ms = 5000
            kill_signal = "term"
            "#,
        )
        .unwrap();
        let cli = Cli {
            interval_ms: Some(20),
            no_color: true,
            ..Cli::default()
        };

        let config = Config::resolve(file_config, &cli).unwrap();
        assert_eq!(config.refresh_interval, Duration::from_millis(MIN_REFRESH_MS));
        assert_eq!(config.kill_signal, KillSignal::Term);
        assert!(!config.display.color);
    }

    #[test]
    fn zero_rows_fall_back_to_default() {
        let file_config = parse_file_config("[display]\nlist_limit = 0").unwrap();
        let config = Config::resolve(file_config, &Cli::default()).unwrap();
        assert_eq!(config.display.list_limit, DEFAULT_ROWS);
    }

    #[test]
    fn unknown_signal_in_file_is_rejected() {
        let file_config = parse_file_config("[general]\nkill_signal = \"hup\"").unwrap();
        let err = Config::resolve(file_config, &Cli::default()).unwrap_err();
        assert!(matches!(err, KtopError::Config { .. }));
    }

    #[test]
    fn explicit_config_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nshow_legend = false").unwrap();
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Cli::default()
        };

        let config = Config::load(&cli).unwrap();
        assert!(!config.display.show_legend);
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            config: Some(dir.path().join("absent.toml")),
            ..Cli::default()
        };
        assert!(matches!(
            Config::load(&cli),
            Err(KtopError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn broken_config_file_is_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display\ncolor = maybe").unwrap();
        let cli = Cli {
            config: Some(file.path().to_path_buf()),
            ..Cli::default()
        };
        assert!(matches!(
            Config::load(&cli),
            Err(KtopError::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from(["ktop", "--signal", "term", "-vv", "--interval-ms", "500"])
            .unwrap();
        assert_eq!(cli.signal, Some(KillSignal::Term));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.interval_ms, Some(500));
        assert!(Cli::try_parse_from(["ktop", "--signal", "hup"]).is_err());
    }
}

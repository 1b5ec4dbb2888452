/// Application configuration
use crate::error::{CliError, Result};
use sakura_playback::{PlaybackConfig, RepeatMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file read when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "sakura.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Real milliseconds per simulated second
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,

    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    #[serde(default)]
    pub shuffle: bool,

    #[serde(default)]
    pub repeat: RepeatMode,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Directory holding the account files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default = "default_level")]
    pub level: String,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicitly given file must exist; the default `sakura.toml` is
    /// optional. Environment variables override the file, e.g.
    /// `SAKURA_PLAYBACK__TICK_MILLIS=250`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with SAKURA_)
        settings = settings.add_source(
            config::Environment::with_prefix("SAKURA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.playback.volume) {
            return Err(CliError::Config(format!(
                "playback.volume must be between 0 and 1, got {}",
                self.playback.volume
            )));
        }

        if self.playback.tick_millis == 0 {
            return Err(CliError::Config(
                "playback.tick_millis must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Settings for the playback controller
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            volume: self.playback.volume,
            history_limit: self.playback.history_limit,
            shuffle: self.playback.shuffle,
            repeat: self.playback.repeat,
            tick_period: Duration::from_millis(self.playback.tick_millis),
        }
    }

    /// Default `EnvFilter` directives for the configured level
    pub fn log_directives(&self) -> String {
        let level = &self.logging.level;
        ["sakura_cli", "sakura_playback", "sakura_auth", "sakura_core"]
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

// Default values
fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        volume: default_volume(),
        tick_millis: default_tick_millis(),
        history_limit: default_history_limit(),
        shuffle: false,
        repeat: RepeatMode::Off,
    }
}

fn default_volume() -> f32 {
    0.7
}

fn default_tick_millis() -> u64 {
    1000
}

fn default_history_limit() -> usize {
    20
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        data_dir: default_data_dir(),
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_logging() -> LoggingSettings {
    LoggingSettings {
        level: default_level(),
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            playback: default_playback(),
            storage: default_storage(),
            logging: default_logging(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();

        let playback = config.playback_config();
        assert_eq!(playback.tick_period, Duration::from_secs(1));
        assert_eq!(playback.history_limit, 20);
        assert_eq!(playback.repeat, RepeatMode::Off);
        assert_eq!(config.storage.data_dir, PathBuf::from("./data"));
    }

    #[test]
    fn rejects_out_of_range_volume() {
        let mut config = AppConfig::default();
        config.playback.volume = 1.5;
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn rejects_zero_tick() {
        let mut config = AppConfig::default();
        config.playback.tick_millis = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("tick_millis"));
    }

    #[test]
    fn log_directives_cover_workspace_crates() {
        let mut config = AppConfig::default();
        config.logging.level = "debug".to_string();
        let directives = config.log_directives();
        assert!(directives.contains("sakura_playback=debug"));
        assert!(directives.contains("sakura_auth=debug"));
    }
}

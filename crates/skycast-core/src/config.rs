use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::clock::ClockFormat;
use crate::weather::{Condition, TimeOfDay};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkycastConfig {
    #[serde(default)]
    pub timers: TimersConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimersConfig {
    /// Clock ticker period.
    #[serde(default = "default_clock_interval_ms")]
    pub clock_interval_ms: u64,

    /// Phase cycler period.
    #[serde(default = "default_phase_interval_ms")]
    pub phase_interval_ms: u64,

    /// Redraw cadence for animations.
    #[serde(default = "default_render_tick_ms")]
    pub render_tick_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub clock_format: ClockFormat,

    #[serde(default = "default_star_count")]
    pub star_count: usize,
}

/// Initial values for the current conditions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "default_temperature")]
    pub temperature: i32,

    #[serde(default = "default_condition")]
    pub condition: Condition,

    #[serde(default = "default_time_of_day")]
    pub time_of_day: TimeOfDay,
}

fn default_clock_interval_ms() -> u64 {
    1000
}
fn default_phase_interval_ms() -> u64 {
    8000
}
fn default_render_tick_ms() -> u64 {
    100
}
fn default_star_count() -> usize {
    20
}
fn default_temperature() -> i32 {
    72
}
fn default_condition() -> Condition {
    Condition::Sunny
}
fn default_time_of_day() -> TimeOfDay {
    TimeOfDay::Day
}

impl Default for TimersConfig {
    fn default() -> Self {
        Self {
            clock_interval_ms: default_clock_interval_ms(),
            phase_interval_ms: default_phase_interval_ms(),
            render_tick_ms: default_render_tick_ms(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clock_format: ClockFormat::default(),
            star_count: default_star_count(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            condition: default_condition(),
            time_of_day: default_time_of_day(),
        }
    }
}

impl TimersConfig {
    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock_interval_ms.max(1))
    }

    pub fn phase_interval(&self) -> Duration {
        Duration::from_millis(self.phase_interval_ms.max(1))
    }

    pub fn render_tick(&self) -> Duration {
        Duration::from_millis(self.render_tick_ms.max(1))
    }
}

impl SkycastConfig {
    /// Load config from ~/.config/skycast/config.toml, falling back to
    /// defaults when the file is missing. Nothing is written back.
    pub fn load() -> crate::error::Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load config from an explicit path.
    pub fn load_from(path: &Path) -> crate::error::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(SkycastConfig::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: SkycastConfig = toml::from_str(&contents).map_err(|e| {
            crate::error::SkycastError::Config(format!("Failed to parse config: {e}"))
        })?;
        Ok(config)
    }

    /// Get the config file path.
    pub fn config_path() -> crate::error::Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            crate::error::SkycastError::Config("Could not determine config directory".into())
        })?;
        Ok(config_dir.join("skycast").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_widget() {
        let config = SkycastConfig::default();
        assert_eq!(config.timers.clock_interval(), Duration::from_secs(1));
        assert_eq!(config.timers.phase_interval(), Duration::from_secs(8));
        assert_eq!(config.display.clock_format, ClockFormat::TwelveHour);
        assert_eq!(config.display.star_count, 20);
        assert_eq!(config.seed.temperature, 72);
        assert_eq!(config.seed.condition, Condition::Sunny);
        assert_eq!(config.seed.time_of_day, TimeOfDay::Day);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = SkycastConfig::load_from(&path).unwrap();
        assert_eq!(config.timers.phase_interval_ms, 8000);
        assert!(!path.exists());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[timers]\nphase_interval_ms = 2000\n\n[display]\nclock_format = \"24h\"\n\n[seed]\ncondition = \"thunderstorm\"\ntime_of_day = \"dusk\""
        )
        .unwrap();

        let config = SkycastConfig::load_from(file.path()).unwrap();
        assert_eq!(config.timers.phase_interval_ms, 2000);
        assert_eq!(config.timers.clock_interval_ms, 1000);
        assert_eq!(config.display.clock_format, ClockFormat::TwentyFourHour);
        assert_eq!(config.seed.condition, Condition::Thunderstorm);
        assert_eq!(config.seed.time_of_day, TimeOfDay::Unrecognized);
        assert_eq!(config.seed.temperature, 72);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timers\nclock_interval_ms = ").unwrap();
        let err = SkycastConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, crate::error::SkycastError::Config(_)));
    }

    #[test]
    fn test_unreadable_file_is_io_error() {
        // A directory exists but cannot be read as a file.
        let dir = tempfile::tempdir().unwrap();
        let err = SkycastConfig::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, crate::error::SkycastError::Io(_)));
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let timers = TimersConfig {
            clock_interval_ms: 0,
            ..TimersConfig::default()
        };
        assert_eq!(timers.clock_interval(), Duration::from_millis(1));
    }
}

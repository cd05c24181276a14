//! Configuration loading for the engine binary.
//!
//! The canonical configuration lives in `tamagotchi-config.yaml` at the
//! project root. Every section is optional; missing sections and fields fall
//! back to defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tamagotchi_pet::PetConfig;

/// Environment variable overriding `storage.data_dir`.
pub const ENV_DATA_DIR: &str = "TAMAGOTCHI_DATA_DIR";

/// Environment variable overriding `tick.interval_ms`.
pub const ENV_TICK_INTERVAL_MS: &str = "TAMAGOTCHI_TICK_INTERVAL_MS";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override could not be parsed.
    #[error("invalid value {value:?} for {name}")]
    InvalidEnv {
        /// The environment variable.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level engine configuration. Mirrors `tamagotchi-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EngineConfig {
    /// Simulation tunables.
    #[serde(default)]
    pub pet: PetConfig,

    /// Decay timer settings.
    #[serde(default)]
    pub tick: TickConfig,

    /// Snapshot storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load configuration from a YAML file, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or
    /// [`ConfigError::InvalidEnv`] if an override is malformed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Parse configuration from a YAML string. No environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply overrides looked up by variable name.
    ///
    /// - `TAMAGOTCHI_DATA_DIR` overrides `storage.data_dir`
    /// - `TAMAGOTCHI_TICK_INTERVAL_MS` overrides `tick.interval_ms`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if the interval is not an
    /// unsigned integer.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            self.storage.data_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup(ENV_TICK_INTERVAL_MS) {
            self.tick.interval_ms = raw.trim().parse().map_err(|_parse| ConfigError::InvalidEnv {
                name: ENV_TICK_INTERVAL_MS,
                value: raw.clone(),
            })?;
        }
        Ok(())
    }
}

/// Decay timer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TickConfig {
    /// Milliseconds between decay ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub interval_ms: u64,
}

impl TickConfig {
    /// The tick period. Never zero.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_tick_interval_ms(),
        }
    }
}

/// Snapshot storage configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the snapshot file.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is unset (trace, debug, info, warn,
    /// error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const fn default_tick_interval_ms() -> u64 {
    60_000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".tamagotchi")
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = EngineConfig::parse("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.tick.interval_ms, 60_000);
        assert_eq!(config.storage.data_dir, PathBuf::from(".tamagotchi"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = "
tick:
  interval_ms: 5000
pet:
  max_elapsed_secs: 600
  decay:
    thirst_per_hour: 2.0
";
        let config = EngineConfig::parse(yaml).unwrap();
        assert_eq!(config.tick.interval_ms, 5000);
        assert_eq!(config.pet.max_elapsed_secs, 600);
        assert!((config.pet.decay.thirst_per_hour - 2.0).abs() < f64::EPSILON);
        assert!((config.pet.decay.hunger_per_hour - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.pet.soil_cap, 3);
        assert_eq!(config.storage, StorageConfig::default());
    }

    #[test]
    fn single_food_field_override_parses() {
        let yaml = "
pet:
  care:
    snack:
      hunger: 12.0
";
        let config = EngineConfig::parse(yaml).unwrap();
        let snack = config.pet.care.snack;
        assert!((snack.hunger - 12.0).abs() < f64::EPSILON);
        assert!((snack.happiness - 8.0).abs() < f64::EPSILON);
        assert!((snack.health + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_yaml_is_rejected() {
        assert!(matches!(
            EngineConfig::parse("tick: [unclosed"),
            Err(ConfigError::Yaml { .. })
        ));
    }

    #[test]
    fn overrides_apply() {
        let mut config = EngineConfig::default();
        config
            .apply_overrides(|name| match name {
                ENV_DATA_DIR => Some("/tmp/pets".to_owned()),
                ENV_TICK_INTERVAL_MS => Some("250".to_owned()),
                _ => None,
            })
            .unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/pets"));
        assert_eq!(config.tick.interval_ms, 250);
    }

    #[test]
    fn malformed_interval_override_is_an_error() {
        let mut config = EngineConfig::default();
        let result = config.apply_overrides(|name| {
            (name == ENV_TICK_INTERVAL_MS).then(|| "soon".to_owned())
        });
        assert!(matches!(result, Err(ConfigError::InvalidEnv { .. })));
    }

    #[test]
    fn zero_interval_is_floored() {
        let tick = TickConfig { interval_ms: 0 };
        assert_eq!(tick.interval(), Duration::from_millis(1));
    }

    #[test]
    fn shipped_config_parses() {
        let yaml = include_str!("../../../tamagotchi-config.yaml");
        let config = EngineConfig::parse(yaml).unwrap();
        assert_eq!(config.pet, PetConfig::default());
    }
}

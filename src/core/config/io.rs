use crate::core::config::data::{path_display, Config, ConfigKey};
use directories::ProjectDirs;
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Errors that can occur when reading, changing or writing configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    Read {
        /// Path to the configuration file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the configuration file as valid TOML.
    Parse {
        /// Path to the configuration file with invalid TOML.
        path: PathBuf,
        /// The TOML deserialization error.
        source: toml::de::Error,
    },

    /// Failed to write the configuration file.
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize the configuration as TOML.
    Serialize(toml::ser::Error),

    /// No platform configuration directory could be determined.
    NoConfigDir,

    /// `set`/`unset` was given a key that does not exist.
    UnknownKey(String),

    /// `set` was given a value the key does not accept.
    InvalidValue { key: ConfigKey, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(
                    f,
                    "Failed to read config at {}: {}",
                    path_display(path),
                    source
                )
            }
            ConfigError::Parse { path, source } => {
                write!(
                    f,
                    "Failed to parse config at {}: {}",
                    path_display(path),
                    source
                )
            }
            ConfigError::Write { path, source } => {
                write!(
                    f,
                    "Failed to write config at {}: {}",
                    path_display(path),
                    source
                )
            }
            ConfigError::Serialize(source) => write!(f, "Failed to serialize config: {source}"),
            ConfigError::NoConfigDir => f.write_str("Failed to determine config directory"),
            ConfigError::UnknownKey(key) => {
                let known: Vec<&str> = ConfigKey::ALL.iter().map(|k| k.as_str()).collect();
                write!(
                    f,
                    "Unknown config key: {key} (known keys: {})",
                    known.join(", ")
                )
            }
            ConfigError::InvalidValue { key, reason } => {
                write!(f, "Invalid value for {key}: {reason}")
            }
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Write { source, .. } => Some(source),
            ConfigError::Serialize(source) => Some(source),
            _ => None,
        }
    }
}

impl Config {
    /// Load the config at the platform default location.
    pub fn load() -> Result<Config, ConfigError> {
        Self::load_from_path(&Self::get_config_path()?)
    }

    /// Save the config to the platform default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to_path(&Self::get_config_path()?)
    }

    /// Load the config at `config_path`, or defaults when the file is missing.
    pub fn load_from_path(config_path: &Path) -> Result<Config, ConfigError> {
        if !config_path.exists() {
            debug!(path = %path_display(config_path), "no config file, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })?;
        debug!(path = %path_display(config_path), "loaded config");
        Ok(config)
    }

    /// Write atomically: the old file is only replaced once the new one is complete.
    pub fn save_to_path(&self, config_path: &Path) -> Result<(), ConfigError> {
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: config_path.to_path_buf(),
            source,
        };

        let parent = config_path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty());

        if let Some(dir) = parent {
            fs::create_dir_all(dir).map_err(write_err)?;
        }

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        let mut temp_file = match parent {
            Some(dir) => NamedTempFile::new_in(dir),
            None => NamedTempFile::new(),
        }
        .map_err(write_err)?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(write_err)?;
        temp_file.as_file_mut().sync_all().map_err(write_err)?;
        temp_file
            .persist(config_path)
            .map_err(|err| write_err(err.error))?;
        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf, ConfigError> {
        let proj_dirs =
            ProjectDirs::from("org", "chatline", "chatline").ok_or(ConfigError::NoConfigDir)?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::config::io::ConfigError;
use crate::utils::url::{normalize_base_url, validate_endpoint};

/// Endpoint used when neither the flag, the environment nor the config names one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";

/// Environment variable that overrides the configured endpoint.
pub const ENDPOINT_ENV_VAR: &str = "CHATLINE_ENDPOINT";

pub const DEFAULT_USER_LABEL: &str = "You";
pub const DEFAULT_AGENT_LABEL: &str = "Agent";

pub const THEMES: [&str; 2] = ["dark", "light"];

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the chat service; `/api/chat` is appended to it
    pub endpoint: Option<String>,
    /// Label shown in front of the user's messages
    pub user_label: Option<String>,
    /// Label shown in front of the agent's messages
    pub agent_label: Option<String>,
    /// UI theme name ("dark" or "light")
    pub theme: Option<String>,
}

/// Keys accepted by `chatline set` / `chatline unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Endpoint,
    UserLabel,
    AgentLabel,
    Theme,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] = [
        ConfigKey::Endpoint,
        ConfigKey::UserLabel,
        ConfigKey::AgentLabel,
        ConfigKey::Theme,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::Endpoint => "endpoint",
            ConfigKey::UserLabel => "user-label",
            ConfigKey::AgentLabel => "agent-label",
            ConfigKey::Theme => "theme",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownKey(value.to_string()))
    }
}

/// Get a user-friendly display string for a path, using `~` for the home
/// directory on Unix-like systems.
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl Config {
    pub fn user_label(&self) -> &str {
        non_empty(self.user_label.as_deref()).unwrap_or(DEFAULT_USER_LABEL)
    }

    pub fn agent_label(&self) -> &str {
        non_empty(self.agent_label.as_deref()).unwrap_or(DEFAULT_AGENT_LABEL)
    }

    pub fn theme_name(&self) -> &str {
        non_empty(self.theme.as_deref()).unwrap_or("dark")
    }

    /// Pick the endpoint: explicit flag, then environment, then config, then default.
    pub fn resolve_endpoint(&self, flag: Option<&str>, env: Option<&str>) -> String {
        let chosen = non_empty(flag)
            .or_else(|| non_empty(env))
            .or_else(|| non_empty(self.endpoint.as_deref()))
            .unwrap_or(DEFAULT_ENDPOINT);
        normalize_base_url(chosen)
    }

    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        match key {
            ConfigKey::Endpoint => self.endpoint.as_deref(),
            ConfigKey::UserLabel => self.user_label.as_deref(),
            ConfigKey::AgentLabel => self.agent_label.as_deref(),
            ConfigKey::Theme => self.theme.as_deref(),
        }
    }

    /// Validate and store `value` under `key`.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ConfigError::InvalidValue {
                key,
                reason: "value must not be empty".to_string(),
            });
        }

        match key {
            ConfigKey::Endpoint => {
                validate_endpoint(value)
                    .map_err(|reason| ConfigError::InvalidValue { key, reason })?;
                self.endpoint = Some(normalize_base_url(value));
            }
            ConfigKey::UserLabel => self.user_label = Some(value.to_string()),
            ConfigKey::AgentLabel => self.agent_label = Some(value.to_string()),
            ConfigKey::Theme => {
                let theme = value.to_ascii_lowercase();
                if !THEMES.contains(&theme.as_str()) {
                    return Err(ConfigError::InvalidValue {
                        key,
                        reason: format!("expected one of: {}", THEMES.join(", ")),
                    });
                }
                self.theme = Some(theme);
            }
        }
        Ok(())
    }

    pub fn unset(&mut self, key: ConfigKey) {
        match key {
            ConfigKey::Endpoint => self.endpoint = None,
            ConfigKey::UserLabel => self.user_label = None,
            ConfigKey::AgentLabel => self.agent_label = None,
            ConfigKey::Theme => self.theme = None,
        }
    }
}

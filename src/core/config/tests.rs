use super::data::{path_display, Config, ConfigKey, DEFAULT_ENDPOINT};
use super::io::ConfigError;
use tempfile::TempDir;

#[test]
fn test_load_nonexistent_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nonexistent_config.toml");

    let config = Config::load_from_path(&config_path).expect("Failed to load config");

    assert_eq!(config, Config::default());
}

#[test]
fn test_config_persistence_lifecycle() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config
        .set(ConfigKey::Endpoint, "https://chat.example.com/")
        .expect("endpoint should be accepted");
    config
        .set(ConfigKey::AgentLabel, "Tutor")
        .expect("label should be accepted");
    config.save_to_path(&config_path).expect("save failed");

    let loaded = Config::load_from_path(&config_path).expect("load failed");
    assert_eq!(loaded.endpoint.as_deref(), Some("https://chat.example.com"));
    assert_eq!(loaded.agent_label(), "Tutor");
    assert_eq!(loaded.user_label(), "You");

    let mut loaded = loaded;
    loaded.unset(ConfigKey::Endpoint);
    loaded.save_to_path(&config_path).expect("second save failed");

    let reloaded = Config::load_from_path(&config_path).expect("reload failed");
    assert_eq!(reloaded.endpoint, None);
    assert_eq!(reloaded.agent_label.as_deref(), Some("Tutor"));
}

#[test]
fn test_invalid_toml_reports_parse_error_with_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "endpoint = [unclosed").expect("write failed");

    let err = Config::load_from_path(&config_path).expect_err("parse should fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().starts_with("Failed to parse config at "));
}

#[test]
fn test_endpoint_precedence() {
    let config = Config {
        endpoint: Some("http://from-config:1".to_string()),
        ..Default::default()
    };

    assert_eq!(
        config.resolve_endpoint(Some("http://from-flag:3/"), Some("http://from-env:2")),
        "http://from-flag:3"
    );
    assert_eq!(
        config.resolve_endpoint(None, Some("http://from-env:2")),
        "http://from-env:2"
    );
    assert_eq!(
        config.resolve_endpoint(Some("  "), Some("")),
        "http://from-config:1"
    );
    assert_eq!(
        Config::default().resolve_endpoint(None, None),
        DEFAULT_ENDPOINT
    );
}

#[test]
fn test_set_rejects_invalid_values() {
    let mut config = Config::default();

    let err = config
        .set(ConfigKey::Endpoint, "localhost:8000")
        .expect_err("scheme is required");
    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            key: ConfigKey::Endpoint,
            ..
        }
    ));

    assert!(config.set(ConfigKey::Theme, "neon").is_err());
    assert!(config.set(ConfigKey::UserLabel, "   ").is_err());
    assert_eq!(config, Config::default());

    config.set(ConfigKey::Theme, "LIGHT").expect("theme accepted");
    assert_eq!(config.theme_name(), "light");
}

#[test]
fn test_config_key_parsing() {
    assert_eq!("endpoint".parse::<ConfigKey>().unwrap(), ConfigKey::Endpoint);
    assert_eq!(
        "agent_label".parse::<ConfigKey>().unwrap(),
        ConfigKey::AgentLabel
    );
    assert_eq!(
        "User-Label".parse::<ConfigKey>().unwrap(),
        ConfigKey::UserLabel
    );

    let err = "default-model".parse::<ConfigKey>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unknown config key: default-model (known keys: endpoint, user-label, agent-label, theme)"
    );
}

#[test]
fn test_summary_lines_mark_unset_values() {
    let config = Config {
        endpoint: Some("http://localhost:8000".to_string()),
        ..Default::default()
    };
    assert_eq!(
        config.summary_lines(),
        vec![
            "  endpoint: http://localhost:8000",
            "  user-label: (unset)",
            "  agent-label: (unset)",
            "  theme: (unset)",
        ]
    );
}

#[cfg(unix)]
#[test]
fn test_path_display_abbreviates_home() {
    if let Some(home) = std::env::var_os("HOME") {
        let path = std::path::PathBuf::from(home).join(".config/chatline/config.toml");
        assert_eq!(path_display(&path), "~/.config/chatline/config.toml");
    }
}

use buddyterm::config::Config;
use buddyterm::icons::IconTheme;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.api.base_url, "http://localhost:8000/api");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.ui.default_view, "feed");
    assert!(config.ui.mouse_enabled);
    assert!(config.session.remember);
    assert!(config.display.relative_timestamps);
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid sidebar width should fail
    config.ui.sidebar_width = 10;
    assert!(config.validate().is_err());

    // Reset and test invalid timeout
    config.ui.sidebar_width = 24;
    config.api.timeout_secs = 0;
    assert!(config.validate().is_err());

    // Reset and test invalid base URL
    config.api.timeout_secs = 30;
    config.api.base_url = "localhost:8000".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid default view
    config.api.base_url = "http://localhost:8000/api".to_string();
    config.ui.default_view = "timeline".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_view = \"feed\""));
    assert!(toml_str.contains("base_url = \"http://localhost:8000/api\""));
    assert!(toml_str.contains("remember = true"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[api]
base_url = "https://social.example.com/api"

[display]
icon_theme = "emoji"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.api.base_url, "https://social.example.com/api");
    assert_eq!(config.display.icon_theme, IconTheme::Emoji);
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.api.timeout_secs, 30); // default value
    assert_eq!(config.ui.default_view, "feed"); // default value
    assert!(config.session.remember); // default value
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let empty_toml = "";
    let config: Config = toml::from_str(empty_toml).unwrap();
    let default_config = Config::default();

    assert_eq!(config.api.base_url, default_config.api.base_url);
    assert_eq!(config.ui.default_view, default_config.ui.default_view);
    assert_eq!(config.ui.sidebar_width, default_config.ui.sidebar_width);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

use flagschema::config::{Config, ConfigError, Defaults, LoggingConfig};
use tempfile::TempDir;

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.defaults.schema, "l,p#,d*");
    assert_eq!(config.logging.level, "warn");
    assert!(config.logging.file.is_none());
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("flagschema/config.toml"));
}

#[test]
fn test_validation_passes_for_default() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validation_fails_bad_schema() {
    let config = Config {
        defaults: Defaults {
            schema: "l,9".to_string(),
        },
        logging: LoggingConfig::default(),
    };

    match config.validate().unwrap_err() {
        ConfigError::InvalidSchema { source } => {
            assert!(source.to_string().contains("Bad character: 9"));
        }
        other => panic!("Expected InvalidSchema, got {:?}", other),
    }
}

#[test]
fn test_validation_fails_blank_level() {
    let config = Config {
        defaults: Defaults::default(),
        logging: LoggingConfig {
            level: "  ".to_string(),
            file: None,
        },
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"[defaults]
schema = "v,n#"

[logging]
level = "debug"
file = "/tmp/flagschema.log"
"#,
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config.defaults.schema, "v,n#");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(
        config.logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/flagschema.log"))
    );
}

#[test]
fn test_missing_sections_use_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "").unwrap();

    let config = Config::load_from(&config_path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_error_names_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "[defaults\nschema = 1").unwrap();

    let err = Config::load_from(&config_path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_read_error_for_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
}

//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::InterceptorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<InterceptorConfig, ConfigError> {
    let config: InterceptorConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<InterceptorConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config = parse_config(
            r#"
            [alerts]
            app_name = "boatalApp"
            "#,
        )
        .unwrap();

        assert_eq!(config.alerts.app_name, "boatalApp");
        assert_eq!(config.client.timeout_secs, 30);
        assert_eq!(config.observability.log_level, "info");
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[alerts\napp_name = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_display() {
        let err = parse_config(
            r#"
            [client]
            timeout_secs = 0
            "#,
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Validation failed: client.timeout_secs: must be greater than 0"
        );
    }

    #[test]
    fn test_validation_errors_joined() {
        let err = parse_config(
            r#"
            [alerts]
            app_name = ""

            [client]
            timeout_secs = 0
            "#,
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Validation failed: alerts.app_name: must not be empty, client.timeout_secs: must be greater than 0"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("does-not-exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "alert_interceptor_config_{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[observability]\nlog_level = \"debug\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.observability.log_level, "debug");

        fs::remove_file(&path).unwrap_or_default();
    }
}

//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable selecting the listening port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {name}: {value:?}")]
    Env { name: &'static str, value: String },

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

/// Parse a TOML document into a configuration without validating it.
pub fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read and parse a TOML configuration file.
pub fn read_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Override the listener port from a raw `PORT` value, if one is set.
pub fn apply_port_override(
    config: &mut ServiceConfig,
    raw: Option<&str>,
) -> Result<(), ConfigError> {
    let Some(raw) = raw else {
        return Ok(());
    };
    config.listener.port = raw.trim().parse().map_err(|_| ConfigError::Env {
        name: PORT_ENV,
        value: raw.to_string(),
    })?;
    Ok(())
}

/// Build the effective configuration: defaults, then the optional file,
/// then the `PORT` environment variable, then an explicit port (CLI flag).
/// The result is validated.
pub fn load_config(
    path: Option<&Path>,
    port: Option<u16>,
) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => ServiceConfig::default(),
    };

    let env_port = std::env::var(PORT_ENV).ok();
    apply_port_override(&mut config, env_port.as_deref())?;
    if let Some(port) = port {
        config.listener.port = port;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_override() {
        let mut config = ServiceConfig::default();
        apply_port_override(&mut config, Some("8123")).unwrap();
        assert_eq!(config.listener.port, 8123);
    }

    #[test]
    fn test_unset_port_keeps_default() {
        let mut config = ServiceConfig::default();
        apply_port_override(&mut config, None).unwrap();
        assert_eq!(config.listener.port, 6000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut config = ServiceConfig::default();
        let err = apply_port_override(&mut config, Some("http")).unwrap_err();
        assert!(matches!(err, ConfigError::Env { name: "PORT", .. }));
        assert_eq!(err.to_string(), "Invalid value for PORT: \"http\"");
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[listener\nport = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = read_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validation_error_message() {
        let err = ConfigError::Validation(vec![
            ValidationError::ZeroPort,
            ValidationError::ZeroTimeout,
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: listener.port must be non-zero, \
             limits.request_timeout_secs must be greater than zero"
        );
    }
}

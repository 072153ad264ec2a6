//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Parse configuration from TOML text without validating it.
///
/// Callers that apply overrides validate the merged result themselves.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(content).map_err(ConfigError::Parse)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load an optional config file, apply command-line overrides, then validate.
///
/// Overrides are applied before validation so a flag can replace a bad
/// value in the file.
pub fn load_with_overrides(
    path: Option<&Path>,
    data: Option<PathBuf>,
    bind: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
            parse_config(&content)?
        }
        None => AppConfig::default(),
    };

    if let Some(data) = data {
        config.data.materials_path = data;
    }
    if let Some(bind) = bind {
        config.listener.bind_address = bind;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[listener]\nbind_address = \"0.0.0.0:8000\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8000");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("no/such/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[listener\nbind_address = ").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[timeouts]\nrequest_secs = 0").unwrap();

        let err = load_config(file.path()).unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_no_file_uses_defaults() {
        let config = load_with_overrides(None, None, None).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:5000");
    }

    #[test]
    fn test_flag_overrides_file_value() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[listener]\nbind_address = \"0.0.0.0:8000\"\n[data]\nmaterials_path = \"a.json\""
        )
        .unwrap();

        let config = load_with_overrides(
            Some(file.path()),
            Some(PathBuf::from("b.json")),
            Some("127.0.0.1:6000".into()),
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:6000");
        assert_eq!(config.data.materials_path, PathBuf::from("b.json"));
    }

    #[test]
    fn test_flag_fixes_invalid_file_value() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[listener]\nbind_address = \"not-an-addr\"\n[data]\nmaterials_path = \"\""
        )
        .unwrap();

        // The file alone is rejected
        assert!(matches!(
            load_config(file.path()),
            Err(ConfigError::Validation(_))
        ));

        let config = load_with_overrides(
            Some(file.path()),
            Some(PathBuf::from("materials.json")),
            Some("127.0.0.1:0".into()),
        )
        .unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:0");
        assert_eq!(config.data.materials_path, PathBuf::from("materials.json"));
    }

    #[test]
    fn test_bad_flag_value_rejected() {
        let err = load_with_overrides(None, None, Some("localhost".into())).unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(
                errors,
                vec![ValidationError::InvalidBindAddress("localhost".into())]
            ),
            other => panic!("expected validation error, got {other}"),
        }
    }
}

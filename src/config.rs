use crate::logger::Logger;
use crate::middle_code;
use crate::{log_info, log_warning};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Middle code used when the config file yields nothing usable.
pub const FALLBACK_MIDDLE_CODE: &str = "0537";

/// Sample codes written into a freshly created config file
/// (Jining, Beijing, Shanghai, Shenzhen).
const SAMPLE_MIDDLE_CODES: [&str; 4] = ["0537", "0100", "0210", "0755"];

/// Configuration file error type
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: String,
        source: std::io::Error,
    },
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Failed to access {}: {}", path, source)
            }
            ConfigError::Parse { path, source } => {
                write!(
                    f,
                    "Failed to parse {} (check commas and quotes): {}",
                    path, source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "middleCodes")]
    pub middle_codes: Vec<String>,
}

impl Config {
    fn sample() -> Self {
        Config {
            middle_codes: SAMPLE_MIDDLE_CODES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Loads the middle-code config. A missing file is created with sample
/// content and returned as-is; an existing file is parsed, invalid entries
/// are dropped with a warning, and an empty result falls back to a single
/// default code.
pub fn load_or_create(path: &Path, logger: &Logger) -> Result<Config, ConfigError> {
    if !path.exists() {
        log_info!(logger, "{} not found, creating it...", path.display());
        let config = Config::sample();
        let json = serde_json::to_string_pretty(&config).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            source: e,
        })?;
        fs::write(path, json).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        log_info!(
            logger,
            "Created {} with sample middle codes: {:?}. Edit it to change the middleCodes list (4-digit numbers only).",
            path.display(),
            config.middle_codes
        );
        return Ok(config);
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut config: Config = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;

    // Lenient validation: drop bad entries, keep the rest.
    config.middle_codes.retain(|code| {
        if middle_code::is_valid(code) {
            true
        } else {
            log_warning!(
                logger,
                "Invalid middle code {:?} in {} (must be a 4-digit number), skipped",
                code,
                path.display()
            );
            false
        }
    });

    if config.middle_codes.is_empty() {
        log_warning!(
            logger,
            "No usable middle codes in {}, falling back to [{}]",
            path.display(),
            FALLBACK_MIDDLE_CODE
        );
        config.middle_codes = vec![FALLBACK_MIDDLE_CODE.to_string()];
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_created_with_sample_codes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let logger = Logger::new();

        let config = load_or_create(&path, &logger).unwrap();
        assert_eq!(config.middle_codes, vec!["0537", "0100", "0210", "0755"]);
        assert!(path.exists());

        // The file on disk round-trips to the same values.
        let reread = load_or_create(&path, &logger).unwrap();
        assert_eq!(reread.middle_codes, config.middle_codes);
    }

    #[test]
    fn created_file_uses_the_camel_case_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        load_or_create(&path, &Logger::new()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"middleCodes\""));
        assert!(content.contains('\n'), "expected indented JSON");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{\"middleCodes\": [\"0537\",]}").unwrap();

        match load_or_create(&path, &Logger::new()) {
            Err(ConfigError::Parse { .. }) => {}
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_entries_are_dropped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{\"middleCodes\": [\"0537\", \"53\", \"05a7\"]}").unwrap();

        let config = load_or_create(&path, &Logger::new()).unwrap();
        assert_eq!(config.middle_codes, vec!["0537"]);
    }

    #[test]
    fn empty_or_all_invalid_lists_fall_back_to_the_default_code() {
        let dir = tempdir().unwrap();
        let logger = Logger::new();

        let empty = dir.path().join("empty.json");
        fs::write(&empty, "{\"middleCodes\": []}").unwrap();
        let config = load_or_create(&empty, &logger).unwrap();
        assert_eq!(config.middle_codes, vec![FALLBACK_MIDDLE_CODE]);

        let invalid = dir.path().join("invalid.json");
        fs::write(&invalid, "{\"middleCodes\": [\"bad\", \"12\"]}").unwrap();
        let config = load_or_create(&invalid, &logger).unwrap();
        assert_eq!(config.middle_codes, vec![FALLBACK_MIDDLE_CODE]);
    }
}

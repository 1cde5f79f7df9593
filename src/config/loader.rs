//! Configuration file loading.
//!
//! Values that are missing or unparsable fall back to their defaults; only
//! a missing or syntactically broken file is an error.

use std::fs;
use std::path::Path;

use ini::Ini;

use crate::config::schema::DoorConfig;
use crate::error::{DoorError, Result};

/// Config file used when none is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "config.ini";

/// Load and parse the config file at `path`.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the INI syntax is invalid.
pub fn load_config(path: &Path) -> Result<DoorConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DoorError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DoorError::Io(e)
        }
    })?;

    let config = parse_config(&content, path)?;
    tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Parse INI content into a [`DoorConfig`].
///
/// # Arguments
///
/// * `content` - The INI text
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<DoorConfig> {
    let ini = Ini::load_from_str(content).map_err(|e| DoorError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })?;

    let defaults = DoorConfig::default();
    let Some(settings) = ini.section(Some(DoorConfig::SECTION)) else {
        tracing::warn!(
            "No [{}] section in {}, using defaults",
            DoorConfig::SECTION,
            source_path.display()
        );
        return Ok(defaults);
    };

    let int = |key: &str, default: i64| {
        settings
            .get(key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    };
    let flag = |key: &str, default: bool| settings.get(key).and_then(parse_bool).unwrap_or(default);

    Ok(DoorConfig {
        admin_security_level: int("AdminSecurityLevel", defaults.admin_security_level),
        wwivnet: flag("WWIVnet", defaults.wwivnet),
        ftn: flag("FTN", defaults.ftn),
    })
}

/// Parse an INI boolean, ignoring case.
///
/// Accepts `1 t true yes y on` and `0 f false no n off`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "t" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "f" | "false" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> DoorConfig {
        parse_config(content, Path::new("config.ini")).unwrap()
    }

    #[test]
    fn parses_all_settings() {
        let config = parse(
            "[Settings]\n\
             AdminSecurityLevel = 100\n\
             WWIVnet = true\n\
             FTN = yes\n",
        );
        assert_eq!(config.admin_security_level, 100);
        assert!(config.wwivnet);
        assert!(config.ftn);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = parse("[Settings]\nWWIVnet = on\n");
        assert_eq!(config.admin_security_level, 255);
        assert!(config.wwivnet);
        assert!(!config.ftn);
    }

    #[test]
    fn missing_section_uses_defaults() {
        let config = parse("[Other]\nAdminSecurityLevel = 10\n");
        assert_eq!(config, DoorConfig::default());
    }

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(parse(""), DoorConfig::default());
    }

    #[test]
    fn unparsable_values_use_defaults() {
        let config = parse(
            "[Settings]\n\
             AdminSecurityLevel = lots\n\
             WWIVnet = maybe\n",
        );
        assert_eq!(config.admin_security_level, 255);
        assert!(!config.wwivnet);
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        for v in ["1", "t", "TRUE", "Yes", "y", "ON"] {
            assert_eq!(parse_bool(v), Some(true), "{}", v);
        }
        for v in ["0", "F", "false", "NO", "n", "Off"] {
            assert_eq!(parse_bool(v), Some(false), "{}", v);
        }
        assert_eq!(parse_bool("2"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn load_config_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.ini");
        fs::write(&path, "[Settings]\nAdminSecurityLevel = 90\nFTN = 1\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.admin_security_level, 90);
        assert!(config.ftn);
    }

    #[test]
    fn load_config_missing_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_config(&temp.path().join("config.ini")).unwrap_err();
        assert!(matches!(err, DoorError::ConfigNotFound { .. }));
    }

    #[test]
    fn malformed_ini_is_parse_error() {
        let err = parse_config("[Settings\nFTN = 1\n", Path::new("config.ini")).unwrap_err();
        assert!(matches!(err, DoorError::ConfigParseError { .. }));
    }
}

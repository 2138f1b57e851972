//! Environment variable handling for configuration overrides.
//!
//! Recognized variables:
//! - `LINKCHAIN_MAX_HOPS`: positive integer
//! - `LINKCHAIN_FOLLOW_DIR_LINKS`: boolean
//! - `LINKCHAIN_OUTPUT_FORMAT`: `table` or `json`

use std::env;

use clap::ValueEnum;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::report::OutputFormat;

/// Environment variable overriding `max_hops`.
pub const ENV_MAX_HOPS: &str = "LINKCHAIN_MAX_HOPS";

/// Environment variable overriding `follow_dir_links`.
pub const ENV_FOLLOW_DIR_LINKS: &str = "LINKCHAIN_FOLLOW_DIR_LINKS";

/// Environment variable overriding `output_format`.
pub const ENV_OUTPUT_FORMAT: &str = "LINKCHAIN_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use linkchain::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `LINKCHAIN_*` overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(ENV_MAX_HOPS) {
            config.max_hops = Some(val.trim().parse().map_err(|_| Error::Validation {
                field: ENV_MAX_HOPS.into(),
                message: format!("Must be a positive integer, got '{val}'"),
            })?);
        }

        if let Ok(val) = env::var(ENV_FOLLOW_DIR_LINKS) {
            config.follow_dir_links = Some(Self::parse_bool(ENV_FOLLOW_DIR_LINKS, &val)?);
        }

        if let Ok(val) = env::var(ENV_OUTPUT_FORMAT) {
            config.output_format = Some(Self::parse_format(ENV_OUTPUT_FORMAT, &val)?);
        }

        Ok(())
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    fn parse_format(field: &str, s: &str) -> Result<OutputFormat> {
        <OutputFormat as ValueEnum>::from_str(s, true).map_err(|e| Error::Validation {
            field: field.into(),
            message: format!("Invalid output format '{s}': {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_true_variants() {
        for value in ["true", "TRUE", "1", "yes", "On"] {
            assert!(EnvironmentConfig::parse_bool("test", value).unwrap());
        }
    }

    #[test]
    fn test_parse_bool_false_variants() {
        for value in ["false", "FALSE", "0", "no", "off"] {
            assert!(!EnvironmentConfig::parse_bool("test", value).unwrap());
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        assert!(EnvironmentConfig::parse_bool("test", "maybe").is_err());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(
            EnvironmentConfig::parse_format("test", "JSON").unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            EnvironmentConfig::parse_format("test", "table").unwrap(),
            OutputFormat::Table
        );
        assert_eq!(
            EnvironmentConfig::parse_format("test", "Table").unwrap(),
            OutputFormat::Table
        );

        let err = EnvironmentConfig::parse_format("test", "xml").unwrap_err();
        assert!(err.to_string().contains("xml"));
    }
}

//! Receipt CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                     | Default | Meaning                          |
//! |------------------------------|---------|----------------------------------|
//! | `SALESTAX_INPUT`             | unset   | Orders file; unset = sample orders |
//! | `SALESTAX_OUTPUT`            | `text`  | `text` or `json`                 |
//! | `SALESTAX_ECHO_INPUT`        | `true`  | Print the INPUT section first    |
//! | `SALESTAX_DECIMAL_SEPARATOR` | `.`     | Single character                 |

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use salestax_core::NumberFormat;

/// How receipts are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain receipt text, one line per item plus totals.
    #[default]
    Text,
    /// Pretty-printed JSON array of receipts.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(()),
        }
    }
}

/// Receipt CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Orders file (blank-line separated orders)
    pub input: Option<PathBuf>,

    /// Output mode
    pub output: OutputFormat,

    /// Print the orders before the receipts
    pub echo_input: bool,

    /// Number formatting for every printed amount
    pub number_format: NumberFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output = match lookup("SALESTAX_OUTPUT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SALESTAX_OUTPUT".to_string()))?,
            None => OutputFormat::default(),
        };

        let echo_input = match lookup("SALESTAX_ECHO_INPUT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SALESTAX_ECHO_INPUT".to_string()))?,
            None => true,
        };

        let decimal_separator = match lookup("SALESTAX_DECIMAL_SEPARATOR") {
            Some(raw) => single_char(&raw).ok_or_else(|| {
                ConfigError::InvalidValue("SALESTAX_DECIMAL_SEPARATOR".to_string())
            })?,
            None => '.',
        };

        let config = CliConfig {
            input: lookup("SALESTAX_INPUT")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
            output,
            echo_input,
            number_format: NumberFormat {
                decimal_separator,
                ..NumberFormat::default()
            },
        };

        // A digit separator would make amounts unreadable
        if config.number_format.decimal_separator.is_ascii_digit() {
            return Err(ConfigError::InvalidValue(
                "SALESTAX_DECIMAL_SEPARATOR".to_string(),
            ));
        }

        Ok(config)
    }
}

fn single_char(raw: &str) -> Option<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert!(config.input.is_none());
        assert_eq!(config.output, OutputFormat::Text);
        assert!(config.echo_input);
        assert_eq!(config.number_format, NumberFormat::default());
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("SALESTAX_INPUT", "orders.txt"),
            ("SALESTAX_OUTPUT", "JSON"),
            ("SALESTAX_ECHO_INPUT", "false"),
            ("SALESTAX_DECIMAL_SEPARATOR", ","),
        ])
        .unwrap();

        assert_eq!(config.input, Some(PathBuf::from("orders.txt")));
        assert_eq!(config.output, OutputFormat::Json);
        assert!(!config.echo_input);
        assert_eq!(config.number_format.decimal_separator, ',');
    }

    #[test]
    fn test_invalid_values() {
        assert!(load(&[("SALESTAX_OUTPUT", "xml")]).is_err());
        assert!(load(&[("SALESTAX_ECHO_INPUT", "maybe")]).is_err());
        assert!(load(&[("SALESTAX_DECIMAL_SEPARATOR", ".,")]).is_err());
        assert!(load(&[("SALESTAX_DECIMAL_SEPARATOR", "5")]).is_err());
    }

    #[test]
    fn test_blank_input_means_sample_orders() {
        assert!(load(&[("SALESTAX_INPUT", "  ")]).unwrap().input.is_none());
    }
}

// Fri Jan 16 2026 - Alex

use crate::codec::{TextDecoding, MAX_WIDTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Settings shared by every struct built from a handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructConfig {
    /// Start offset used when a struct is created without one.
    pub default_offset: u64,
    pub text_decoding: TextDecoding,
    /// Widest integer or length prefix accepted, in bytes. At most 8.
    pub max_int_width: usize,
}

impl Default for StructConfig {
    fn default() -> Self {
        Self {
            default_offset: 0,
            text_decoding: TextDecoding::Strict,
            max_int_width: MAX_WIDTH,
        }
    }
}

impl StructConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_offset(mut self, offset: u64) -> Self {
        self.default_offset = offset;
        self
    }

    pub fn with_text_decoding(mut self, decoding: TextDecoding) -> Self {
        self.text_decoding = decoding;
        self
    }

    pub fn with_max_int_width(mut self, width: usize) -> Self {
        self.max_int_width = width;
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_int_width == 0 || self.max_int_width > MAX_WIDTH {
            return Err(ConfigError::Invalid(format!(
                "max_int_width must be between 1 and {}",
                MAX_WIDTH
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StructConfig::default();
        assert_eq!(config.default_offset, 0);
        assert_eq!(config.text_decoding, TextDecoding::Strict);
        assert_eq!(config.max_int_width, 8);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = StructConfig::from_json(r#"{"text_decoding": "lossy"}"#).unwrap();
        assert_eq!(config.text_decoding, TextDecoding::Lossy);
        assert_eq!(config.max_int_width, 8);
    }

    #[test]
    fn test_rejects_bad_width() {
        assert!(matches!(
            StructConfig::from_json(r#"{"max_int_width": 9}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(StructConfig::new().with_max_int_width(0).validate().is_err());
    }
}

//! Corrector configuration.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellfixError};
use crate::spelling::candidates::{DEFAULT_ALPHABET, DEFAULT_BOUNDARY};
use crate::spelling::loader::DataFiles;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Letters tried for insertions and substitutions. Input words must
    /// consist of these letters only.
    pub alphabet: String,
    /// Preceding-character marker for edits at the start of a word.
    pub boundary: char,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            alphabet: DEFAULT_ALPHABET.to_string(),
            boundary: DEFAULT_BOUNDARY,
        }
    }
}

impl CorrectorConfig {
    /// Check that the alphabet is usable.
    pub fn validate(&self) -> Result<()> {
        if self.alphabet.is_empty() {
            return Err(SpellfixError::invalid_config("alphabet is empty"));
        }

        let mut seen = HashSet::new();
        for c in self.alphabet.chars() {
            if c.to_lowercase().ne(std::iter::once(c)) {
                return Err(SpellfixError::invalid_config(format!(
                    "alphabet letter {c:?} is not lowercase"
                )));
            }
            if !seen.insert(c) {
                return Err(SpellfixError::invalid_config(format!(
                    "alphabet letter {c:?} is repeated"
                )));
            }
        }

        if seen.contains(&self.boundary) {
            return Err(SpellfixError::invalid_config(format!(
                "boundary marker {:?} is also an alphabet letter",
                self.boundary
            )));
        }

        Ok(())
    }
}

/// On-disk JSON configuration: corrector settings plus optional data paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Corrector settings.
    pub corrector: CorrectorConfig,
    /// Data files; when absent the caller supplies a data directory.
    pub data: Option<DataFiles>,
}

impl ConfigFile {
    /// Read and validate a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConfigFile = serde_json::from_str(&content)?;
        config.corrector.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = CorrectorConfig::default();
        assert_eq!(config.alphabet.len(), 26);
        assert_eq!(config.boundary, '#');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_alphabets() {
        let cases = [
            CorrectorConfig {
                alphabet: String::new(),
                ..Default::default()
            },
            CorrectorConfig {
                alphabet: "abA".to_string(),
                ..Default::default()
            },
            CorrectorConfig {
                alphabet: "aba".to_string(),
                ..Default::default()
            },
            CorrectorConfig {
                alphabet: "ab#".to_string(),
                ..Default::default()
            },
        ];

        for config in cases {
            assert!(
                matches!(config.validate(), Err(SpellfixError::InvalidConfig(_))),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_load_config_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(
            file.path(),
            r#"{"corrector": {"alphabet": "abcäöü"}, "data": null}"#,
        )
        .unwrap();

        let config = ConfigFile::load(file.path()).unwrap();
        assert_eq!(config.corrector.alphabet, "abcäöü");
        assert_eq!(config.corrector.boundary, '#');
        assert!(config.data.is_none());
    }

    #[test]
    fn test_config_file_round_trips_data_paths() {
        let config = ConfigFile {
            corrector: CorrectorConfig::default(),
            data: Some(DataFiles::in_dir("data")),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ConfigFile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}

//! Engine configuration

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::evaluator::Evaluator;
use crate::core::parser::Parser;
use crate::core::NonFinitePolicy;

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// File is not valid YAML for this schema
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Calculator engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// What `=` does with Infinity/NaN results
    pub non_finite: NonFinitePolicy,
    /// Nesting limit for parentheses and unary signs
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            non_finite: NonFinitePolicy::PassThrough,
            max_depth: Parser::DEFAULT_MAX_DEPTH,
        }
    }
}

impl EngineConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the non-finite policy
    #[must_use]
    pub const fn with_non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }

    /// Set the nesting limit
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses a YAML document; absent fields keep their defaults
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Loads a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Renders the configuration as YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Builds the evaluator this configuration describes
    #[must_use]
    pub fn evaluator(&self) -> Evaluator {
        Evaluator::with_policy(self.non_finite).with_max_depth(self.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::new();
        assert_eq!(config.non_finite, NonFinitePolicy::PassThrough);
        assert_eq!(config.max_depth, Parser::DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::new()
            .with_non_finite(NonFinitePolicy::Reject)
            .with_max_depth(8);
        assert_eq!(config.non_finite, NonFinitePolicy::Reject);
        assert_eq!(config.max_depth, 8);
        assert_eq!(config.evaluator().policy(), NonFinitePolicy::Reject);
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = EngineConfig::from_yaml("non_finite: reject\n").unwrap();
        assert_eq!(config.non_finite, NonFinitePolicy::Reject);
        assert_eq!(config.max_depth, Parser::DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn test_from_yaml_empty_mapping() {
        let config = EngineConfig::from_yaml("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_from_yaml_invalid_policy() {
        let err = EngineConfig::from_yaml("non_finite: explode\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Invalid config"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = EngineConfig::new().with_max_depth(12);
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("pass-through"));
        assert_eq!(EngineConfig::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "non_finite: reject").unwrap();
        writeln!(file, "max_depth: 3").unwrap();
        let config = EngineConfig::load(file.path()).unwrap();
        assert_eq!(config.non_finite, NonFinitePolicy::Reject);
        assert_eq!(config.max_depth, 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EngineConfig::load(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AnalysisError, Language};

/// Environment variable pointing at a JSON [`AnalysisConfig`] file.
pub const CONFIG_ENV_VAR: &str = "EXTRA_ANALYSIS_CONFIG";

/// Configuration for a stemming filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub language: Language,
    /// Lowercase tokens before stemming, like a lowercase filter placed ahead
    /// of the stemmer in an analyzer chain.
    #[serde(default)]
    pub lowercase: bool,
    /// Batches at least this long are stemmed on the rayon pool.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel_threshold() -> usize {
    4096
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            lowercase: false,
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl AnalysisConfig {
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        info!(path = %path.display(), language = %config.language, "loaded analysis config");
        Ok(config)
    }

    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<(), AnalysisError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn from_env_or_default() -> Result<Self, AnalysisError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_path(path),
            Err(_) => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("analysis.json");
        let config = AnalysisConfig {
            language: Language::SerbianCroatian,
            lowercase: true,
            parallel_threshold: 16,
        };
        config.to_path(&path).unwrap();
        assert_eq!(AnalysisConfig::from_path(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AnalysisConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AnalysisConfig::default());

        let config: AnalysisConfig =
            serde_json::from_str(r#"{"language": "serbian_croatian"}"#).unwrap();
        assert_eq!(config.language, Language::SerbianCroatian);
        assert!(!config.lowercase);
        assert_eq!(config.parallel_threshold, 4096);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        let err = AnalysisConfig::from_path(&path).unwrap_err();
        assert!(matches!(err, AnalysisError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = AnalysisConfig::from_path(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, AnalysisError::Io(_)));
    }
}

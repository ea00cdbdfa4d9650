//! Configuration structures for the analysis pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, ResumexError};

/// Main configuration for the resumex pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumexConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Classification model configuration.
    pub models: ModelConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum number of education sentences to keep.
    pub education_limit: usize,

    /// Number of characters of text echoed back in the result.
    pub preview_chars: usize,

    /// Skills recognized in addition to the built-in vocabulary.
    pub extra_skills: Vec<String>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            education_limit: 5,
            preview_chars: 500,
            extra_skills: Vec::new(),
        }
    }
}

/// Model artifact locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Directory containing the model artifacts.
    pub model_dir: PathBuf,

    /// TF-IDF vectorizer file name.
    pub vectorizer: String,

    /// Logistic regression classifier file name.
    pub classifier: String,

    /// Label encoder file name.
    pub label_encoder: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            vectorizer: "vectorizer.json".to_string(),
            classifier: "classifier.json".to_string(),
            label_encoder: "label_encoder.json".to_string(),
        }
    }
}

impl ResumexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ResumexError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ResumexError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get full path to a model artifact.
    pub fn model_path(&self, artifact: &str) -> PathBuf {
        self.models.model_dir.join(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: ResumexConfig =
            serde_json::from_str(r#"{"extraction": {"extra_skills": ["terraform"]}}"#).unwrap();

        assert_eq!(config.extraction.education_limit, 5);
        assert_eq!(config.extraction.preview_chars, 500);
        assert_eq!(config.extraction.extra_skills, vec!["terraform".to_string()]);
        assert_eq!(config.models, ModelConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ResumexConfig::default();
        config.models.model_dir = PathBuf::from("/opt/resumex/models");
        config.save(&path).unwrap();

        let loaded = ResumexConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.model_path("classifier.json"),
            PathBuf::from("/opt/resumex/models/classifier.json")
        );
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = ResumexConfig::from_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, ResumexError::Io(_)));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"extraction\": {\"education_limit\": \"five\"}}").unwrap();
        let broken = ResumexConfig::from_file(&path).unwrap_err();
        assert!(matches!(broken, ResumexError::Config(_)));
        assert!(broken.to_string().contains("broken.json"));
    }
}

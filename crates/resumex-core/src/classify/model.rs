//! Loading the persisted vectorizer, classifier and label encoder.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::linear::{LogisticRegression, LogisticRegressionArtifact};
use super::vectorizer::TfidfVectorizer;
use super::{Classification, DocumentClassifier, Result};
use crate::error::ModelError;
use crate::models::config::ModelConfig;

/// Maps encoded class ids back to human labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    pub fn inverse_transform(&self, class: usize) -> Option<&str> {
        self.classes.get(class).map(String::as_str)
    }
}

/// TF-IDF + logistic regression document classifier.
#[derive(Debug, Clone)]
pub struct TfidfClassifier {
    vectorizer: TfidfVectorizer,
    classifier: LogisticRegression,
    labels: LabelEncoder,
}

impl TfidfClassifier {
    /// Assemble a classifier, checking the parts agree.
    pub fn new(
        vectorizer: TfidfVectorizer,
        classifier: LogisticRegression,
        labels: LabelEncoder,
    ) -> Result<Self> {
        vectorizer.validate()?;

        if vectorizer.n_features() != classifier.n_features() {
            return Err(ModelError::Inconsistent(format!(
                "vectorizer produces {} features, classifier expects {}",
                vectorizer.n_features(),
                classifier.n_features()
            )));
        }

        if let Some(class) = classifier
            .classes()
            .iter()
            .find(|class| labels.inverse_transform(**class).is_none())
        {
            return Err(ModelError::Inconsistent(format!(
                "class {} has no label ({} labels)",
                class,
                labels.classes.len()
            )));
        }

        Ok(Self {
            vectorizer,
            classifier,
            labels,
        })
    }

    /// Load the three artifacts named by the model configuration.
    pub fn from_dir(config: &ModelConfig) -> Result<Self> {
        let dir = &config.model_dir;

        let vectorizer: TfidfVectorizer = read_artifact(&dir.join(&config.vectorizer))?;
        let classifier: LogisticRegressionArtifact = read_artifact(&dir.join(&config.classifier))?;
        let labels: LabelEncoder = read_artifact(&dir.join(&config.label_encoder))?;

        let model = Self::new(vectorizer, classifier.try_into()?, labels)?;
        info!(
            "Loaded classification model from {} ({} labels)",
            dir.display(),
            model.labels.classes.len()
        );
        Ok(model)
    }

    /// Build from artifact JSON documents.
    pub fn from_json(vectorizer: &str, classifier: &str, labels: &str) -> Result<Self> {
        let vectorizer: TfidfVectorizer = parse_artifact("vectorizer", vectorizer)?;
        let classifier: LogisticRegressionArtifact = parse_artifact("classifier", classifier)?;
        let labels: LabelEncoder = parse_artifact("label encoder", labels)?;

        Self::new(vectorizer, classifier.try_into()?, labels)
    }
}

impl DocumentClassifier for TfidfClassifier {
    fn classify(&self, text: &str) -> Result<Classification> {
        let features = self.vectorizer.transform(text);
        let (class, confidence) = self
            .classifier
            .predict(&features)
            .ok_or_else(|| ModelError::Inconsistent("classifier produced no scores".to_string()))?;

        // Labels were checked against every class at construction
        let label = self
            .labels
            .inverse_transform(class)
            .ok_or_else(|| ModelError::Inconsistent(format!("class {} has no label", class)))?;

        debug!(
            "Classified document as {} (confidence {:.3}, {} active features)",
            label,
            confidence,
            features.len()
        );

        Ok(Classification {
            label: label.to_string(),
            confidence,
        })
    }

    fn labels(&self) -> Vec<String> {
        self.labels.classes.clone()
    }
}

/// Whether all three artifacts exist.
pub fn model_exists(config: &ModelConfig) -> bool {
    [&config.vectorizer, &config.classifier, &config.label_encoder]
        .iter()
        .all(|name| config.model_dir.join(name).is_file())
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.is_file() {
        return Err(ModelError::MissingArtifact(path.display().to_string()));
    }

    let content = fs::read_to_string(path).map_err(|e| ModelError::Malformed {
        artifact: path.display().to_string(),
        reason: e.to_string(),
    })?;

    parse_artifact(&path.display().to_string(), &content)
}

fn parse_artifact<T: DeserializeOwned>(artifact: &str, content: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|e| ModelError::Malformed {
        artifact: artifact.to_string(),
        reason: e.to_string(),
    })
}

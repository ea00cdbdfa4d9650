//! Job-role classification.

mod linear;
mod model;
mod vectorizer;

pub use linear::{LogisticRegression, LogisticRegressionArtifact};
pub use model::{model_exists, LabelEncoder, TfidfClassifier};
pub use vectorizer::{Norm, SparseVector, TfidfVectorizer};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Result type for classification operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Predicted category with its probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    /// Probability of `label` (0.0 - 1.0).
    pub confidence: f64,
}

/// Trait for document classifiers.
///
/// Implementations are loaded once and shared read-only between analyses.
pub trait DocumentClassifier: Send + Sync {
    /// Classify a whole document.
    fn classify(&self, text: &str) -> Result<Classification>;

    /// Every label the classifier can produce.
    fn labels(&self) -> Vec<String>;
}

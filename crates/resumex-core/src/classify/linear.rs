//! Logistic regression over sparse TF-IDF features.

use ndarray::{Array1, Array2};
use serde::Deserialize;

use super::vectorizer::SparseVector;
use crate::error::ModelError;

/// Serialized form of a fitted classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticRegressionArtifact {
    /// One row per class (one row total for a binary model).
    pub coef: Vec<Vec<f64>>,
    pub intercept: Vec<f64>,
    /// Encoded class ids in probability order.
    pub classes: Vec<usize>,
}

/// A fitted logistic regression classifier.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    coef: Array2<f64>,
    intercept: Array1<f64>,
    classes: Vec<usize>,
}

impl TryFrom<LogisticRegressionArtifact> for LogisticRegression {
    type Error = ModelError;

    fn try_from(artifact: LogisticRegressionArtifact) -> Result<Self, Self::Error> {
        let rows = artifact.coef.len();
        let cols = artifact.coef.first().map(Vec::len).unwrap_or(0);

        if rows == 0 || cols == 0 {
            return Err(ModelError::Inconsistent("classifier has no coefficients".to_string()));
        }
        if artifact.coef.iter().any(|row| row.len() != cols) {
            return Err(ModelError::Inconsistent("coefficient rows differ in length".to_string()));
        }
        if artifact.intercept.len() != rows {
            return Err(ModelError::Inconsistent(format!(
                "{} coefficient rows but {} intercepts",
                rows,
                artifact.intercept.len()
            )));
        }

        let expected_classes = if rows == 1 { 2 } else { rows };
        if artifact.classes.len() != expected_classes {
            return Err(ModelError::Inconsistent(format!(
                "{} coefficient rows require {} classes, found {}",
                rows,
                expected_classes,
                artifact.classes.len()
            )));
        }

        let flat: Vec<f64> = artifact.coef.into_iter().flatten().collect();
        let coef = Array2::from_shape_vec((rows, cols), flat)
            .map_err(|e| ModelError::Inconsistent(e.to_string()))?;

        Ok(Self {
            coef,
            intercept: Array1::from(artifact.intercept),
            classes: artifact.classes,
        })
    }
}

impl LogisticRegression {
    /// Number of input features.
    pub fn n_features(&self) -> usize {
        self.coef.ncols()
    }

    /// Encoded class ids in probability order.
    pub fn classes(&self) -> &[usize] {
        &self.classes
    }

    /// Raw scores, one per coefficient row.
    pub fn decision_function(&self, features: &SparseVector) -> Array1<f64> {
        let mut scores = self.intercept.clone();
        for &(column, weight) in features {
            if column < self.coef.ncols() {
                scores.scaled_add(weight, &self.coef.column(column));
            }
        }
        scores
    }

    /// Class probabilities aligned with [`LogisticRegression::classes`].
    pub fn predict_proba(&self, features: &SparseVector) -> Vec<f64> {
        let scores = self.decision_function(features);

        if scores.len() == 1 {
            let positive = sigmoid(scores[0]);
            return vec![1.0 - positive, positive];
        }

        softmax(scores.as_slice().unwrap_or_default())
    }

    /// Most probable class id and its probability.
    pub fn predict(&self, features: &SparseVector) -> Option<(usize, f64)> {
        self.predict_proba(features)
            .into_iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .and_then(|(index, probability)| {
                self.classes.get(index).map(|class| (*class, probability))
            })
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}

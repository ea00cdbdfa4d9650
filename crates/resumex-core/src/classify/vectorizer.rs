//! TF-IDF text vectorizer.

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

lazy_static! {
    // Two or more word characters
    static ref TOKEN: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

/// Sparse feature vector as `(column, weight)` pairs sorted by column.
pub type SparseVector = Vec<(usize, f64)>;

/// Row normalization applied after weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

/// A fitted TF-IDF vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term to column index.
    vocabulary: HashMap<String, usize>,

    /// Inverse document frequency per column.
    idf: Vec<f64>,

    /// Smallest and largest n-gram length.
    #[serde(default = "default_ngram_range")]
    ngram_range: (usize, usize),

    #[serde(default = "default_lowercase")]
    lowercase: bool,

    /// Tokens dropped before n-grams are built.
    #[serde(default)]
    stop_words: HashSet<String>,

    /// Use `1 + ln(tf)` instead of raw counts.
    #[serde(default)]
    sublinear_tf: bool,

    #[serde(default = "default_norm")]
    norm: Option<Norm>,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_lowercase() -> bool {
    true
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

impl TfidfVectorizer {
    /// Check internal consistency after deserialization.
    pub fn validate(&self) -> Result<(), ModelError> {
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ModelError::Inconsistent(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }

        if self.idf.len() != self.vocabulary.len() {
            return Err(ModelError::Inconsistent(format!(
                "vectorizer has {} terms but {} idf weights",
                self.vocabulary.len(),
                self.idf.len()
            )));
        }

        if let Some((term, index)) = self
            .vocabulary
            .iter()
            .find(|(_, index)| **index >= self.idf.len())
        {
            return Err(ModelError::Inconsistent(format!(
                "term {:?} maps to column {} outside {} columns",
                term,
                index,
                self.idf.len()
            )));
        }

        Ok(())
    }

    /// Number of feature columns.
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Terms (n-grams) of a document, before vocabulary lookup.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let tokens: Vec<&str> = TOKEN
            .find_iter(&text)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(*token))
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut terms = Vec::new();
        for n in min_n.max(1)..=max_n.min(tokens.len()) {
            terms.extend(tokens.windows(n).map(|window| window.join(" ")));
        }
        terms
    }

    /// Weighted, normalized feature vector of a document.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in self.analyze(text) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut features: SparseVector = counts
            .into_iter()
            .map(|(index, count)| {
                let tf = if self.sublinear_tf { 1.0 + count.ln() } else { count };
                (index, tf * self.idf[index])
            })
            .collect();
        features.sort_by_key(|(index, _)| *index);

        let norm = match self.norm {
            Some(Norm::L2) => features.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
            Some(Norm::L1) => features.iter().map(|(_, w)| w.abs()).sum::<f64>(),
            None => 1.0,
        };
        if norm > 0.0 {
            for (_, weight) in &mut features {
                *weight /= norm;
            }
        }

        features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn vectorizer(extra: serde_json::Value) -> TfidfVectorizer {
        let mut value = json!({
            "vocabulary": {"python": 0, "django": 1, "python django": 2, "nurse": 3},
            "idf": [1.0, 2.0, 3.0, 1.5],
        });
        if let (Some(base), Some(extra)) = (value.as_object_mut(), extra.as_object()) {
            base.extend(extra.clone());
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_defaults() {
        let v = vectorizer(json!({}));
        assert_eq!(v.ngram_range, (1, 1));
        assert!(v.lowercase);
        assert_eq!(v.norm, Some(Norm::L2));
        assert!(v.validate().is_ok());
    }

    #[test]
    fn test_analyze_with_bigrams_and_stop_words() {
        let v = vectorizer(json!({"ngram_range": [1, 2], "stop_words": ["and"]}));
        assert_eq!(
            v.analyze("Python and Django, a"),
            vec!["python", "django", "python django"]
        );
    }

    #[test]
    fn test_transform_l2_normalized() {
        let v = vectorizer(json!({}));
        let features = v.transform("python python django unknown");

        // raw weights: python 2*1.0, django 1*2.0
        let expected = 2.0 / 8.0_f64.sqrt();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].0, 0);
        assert!((features[0].1 - expected).abs() < 1e-12);
        assert!((features[1].1 - expected).abs() < 1e-12);

        let norm: f64 = features.iter().map(|(_, w)| w * w).sum();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_without_norm_sublinear() {
        let v = vectorizer(json!({"norm": null, "sublinear_tf": true}));
        let features = v.transform("nurse nurse");
        assert_eq!(features.len(), 1);
        assert!((features[0].1 - (1.0 + 2.0_f64.ln()) * 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_empty_document() {
        let v = vectorizer(json!({}));
        assert!(v.transform("").is_empty());
        assert!(v.transform("nothing relevant").is_empty());
    }

    #[test]
    fn test_validate_rejects_mismatch() {
        let v = vectorizer(json!({"idf": [1.0]}));
        assert!(matches!(v.validate(), Err(ModelError::Inconsistent(_))));

        let v = vectorizer(json!({"ngram_range": [2, 1]}));
        assert!(v.validate().is_err());
    }
}

//! Structured resume analysis output.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Structured candidate data extracted from one resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Candidate name, if one could be resolved.
    pub name: Option<String>,

    /// First email address found.
    pub email: Option<String>,

    /// First phone number found.
    pub phone: Option<String>,

    /// Canonical (upper-cased) skill tokens.
    pub skills: BTreeSet<String>,

    /// Sentences mentioning education, in document order.
    pub education: Vec<String>,

    /// Total experience in years, one decimal place.
    pub experience_years: f64,

    /// Seniority tier derived from `experience_years`.
    pub experience_level: SeniorityTier,

    /// Predicted job-role category.
    pub classification: String,

    /// Probability of the predicted category (0.0 - 1.0).
    pub confidence: f64,

    /// Leading characters of the analyzed text.
    pub raw_text: String,
}

/// Seniority tier of a candidate.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SeniorityTier {
    #[default]
    Junior,
    Mid,
    Senior,
}

impl SeniorityTier {
    /// Tier for a number of years of experience.
    ///
    /// Each tier includes its lower bound: 2.0 is `Mid`, 5.0 is `Senior`.
    pub fn from_years(years: f64) -> Self {
        if years < 2.0 {
            SeniorityTier::Junior
        } else if years < 5.0 {
            SeniorityTier::Mid
        } else {
            SeniorityTier::Senior
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeniorityTier::Junior => "Junior",
            SeniorityTier::Mid => "Mid",
            SeniorityTier::Senior => "Senior",
        }
    }
}

impl fmt::Display for SeniorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(SeniorityTier::from_years(0.0), SeniorityTier::Junior);
        assert_eq!(SeniorityTier::from_years(1.9), SeniorityTier::Junior);
        assert_eq!(SeniorityTier::from_years(2.0), SeniorityTier::Mid);
        assert_eq!(SeniorityTier::from_years(4.9), SeniorityTier::Mid);
        assert_eq!(SeniorityTier::from_years(5.0), SeniorityTier::Senior);
        assert_eq!(SeniorityTier::from_years(17.5), SeniorityTier::Senior);
        assert_eq!(SeniorityTier::default(), SeniorityTier::from_years(0.0));
    }

    #[test]
    fn test_serialized_shape() {
        let result = AnalysisResult {
            name: None,
            email: Some("jane@example.com".to_string()),
            phone: None,
            skills: ["RUST".to_string(), "GO".to_string()].into_iter().collect(),
            education: vec!["BSc Computer Science, Example University".to_string()],
            experience_years: 3.2,
            experience_level: SeniorityTier::Mid,
            classification: "Software Engineer".to_string(),
            confidence: 0.81,
            raw_text: "Jane".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["name"], serde_json::Value::Null);
        assert_eq!(json["skills"], serde_json::json!(["GO", "RUST"]));
        assert_eq!(json["experience_level"], "Mid");
        assert_eq!(json["experience_years"], 3.2);
    }
}

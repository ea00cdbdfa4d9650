//! Pipeline orchestrator: runs every extractor over one document.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::classify::DocumentClassifier;
use crate::error::AnalysisError;
use crate::models::analysis::{AnalysisResult, SeniorityTier};
use crate::models::config::ExtractionConfig;
use crate::pdf::{PdfExtractor, PdfProcessor};

use super::rules::{
    contact::{extract_email, extract_phone},
    dates::CalendarPoint,
    EducationExtractor, EntityRecognizer, ExperienceAggregator, ExperienceEstimate, NameResolver,
    SkillExtractor,
};
use super::{ResumeInput, Result};

/// Resume analyzer holding the shared classifier and extractor settings.
///
/// Cheap to clone; the classifier is shared, never copied.
#[derive(Clone)]
pub struct ResumeAnalyzer {
    classifier: Arc<dyn DocumentClassifier>,
    names: NameResolver,
    skills: SkillExtractor,
    education: EducationExtractor,
    experience: ExperienceAggregator,
    preview_chars: usize,
}

impl ResumeAnalyzer {
    /// Create an analyzer with default extraction settings.
    pub fn new(classifier: Arc<dyn DocumentClassifier>) -> Self {
        Self::from_config(classifier, &ExtractionConfig::default())
    }

    /// Create an analyzer from extraction configuration.
    pub fn from_config(classifier: Arc<dyn DocumentClassifier>, config: &ExtractionConfig) -> Self {
        Self {
            classifier,
            names: NameResolver::default(),
            skills: SkillExtractor::new().with_extra_skills(&config.extra_skills),
            education: EducationExtractor::new().with_limit(config.education_limit),
            experience: ExperienceAggregator::new(),
            preview_chars: config.preview_chars,
        }
    }

    /// Use a named-entity recognizer for candidate names.
    pub fn with_recognizer(mut self, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        self.names = NameResolver::new(recognizer);
        self
    }

    /// Freeze the month "present" resolves to.
    pub fn with_now(mut self, now: CalendarPoint) -> Self {
        self.experience = self.experience.with_now(now);
        self
    }

    /// Labels the classifier can predict.
    pub fn labels(&self) -> Vec<String> {
        self.classifier.labels()
    }

    /// Decode and analyze one input.
    pub fn analyze(&self, input: &ResumeInput) -> Result<AnalysisResult> {
        debug!("Analyzing {}", input.describe());

        match input {
            ResumeInput::Pdf { bytes, .. } => {
                let text = decode_pdf(bytes)?;
                self.analyze_text(&text)
            }
            ResumeInput::Text(text) => self.analyze_text(text),
        }
    }

    /// Analyze plain resume text.
    pub fn analyze_text(&self, text: &str) -> Result<AnalysisResult> {
        let start = Instant::now();

        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyText);
        }

        info!("Analyzing resume from {} characters of text", text.len());

        let estimate = self.estimate_experience(text);
        let classification = self.classifier.classify(text)?;

        let result = AnalysisResult {
            name: self.names.resolve(text),
            email: extract_email(text),
            phone: extract_phone(text),
            skills: self.skills.extract(text),
            education: self.education.extract(text),
            experience_years: estimate.years,
            experience_level: SeniorityTier::from_years(estimate.years),
            classification: classification.label,
            confidence: classification.confidence,
            raw_text: text.chars().take(self.preview_chars).collect(),
        };

        info!(
            "Analysis complete: {} ({:.3}), {} years, {} skills in {}ms",
            result.classification,
            result.confidence,
            result.experience_years,
            result.skills.len(),
            start.elapsed().as_millis()
        );

        Ok(result)
    }

    /// Experience estimate with its derivation method and periods.
    pub fn estimate_experience(&self, text: &str) -> ExperienceEstimate {
        let estimate = self.experience.aggregate(text);
        debug!(
            "Experience {} years via {:?} ({} periods)",
            estimate.years,
            estimate.method,
            estimate.periods.len()
        );
        estimate
    }
}

fn decode_pdf(bytes: &[u8]) -> Result<String> {
    let mut extractor = PdfExtractor::new();
    extractor.load(bytes)?;
    debug!("Decoding PDF with {} pages", extractor.page_count());
    Ok(extractor.extract_text()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classification;
    use crate::error::ModelError;
    use crate::resume::rules::name::Entity;
    use pretty_assertions::assert_eq;

    struct FixedClassifier;

    impl DocumentClassifier for FixedClassifier {
        fn classify(&self, _text: &str) -> std::result::Result<Classification, ModelError> {
            Ok(Classification {
                label: "Data Science".to_string(),
                confidence: 0.87,
            })
        }

        fn labels(&self) -> Vec<String> {
            vec!["Data Science".to_string()]
        }
    }

    struct BrokenClassifier;

    impl DocumentClassifier for BrokenClassifier {
        fn classify(&self, _text: &str) -> std::result::Result<Classification, ModelError> {
            Err(ModelError::Inconsistent("no scores".to_string()))
        }

        fn labels(&self) -> Vec<String> {
            Vec::new()
        }
    }

    const RESUME: &str = "Jane Q Doe
jane.doe@example.com | +1 (555) 123-4567
Data Scientist, Acme Jan 2020 - Present
Built models with Python, pandas and scikit-learn.
Master of Science in Statistics, State University.
";

    fn analyzer() -> ResumeAnalyzer {
        ResumeAnalyzer::new(Arc::new(FixedClassifier))
            .with_now(CalendarPoint::new(2023, 3).unwrap())
    }

    #[test]
    fn test_full_analysis() {
        let result = analyzer().analyze_text(RESUME).unwrap();

        assert_eq!(result.name.as_deref(), Some("Jane Q Doe"));
        assert_eq!(result.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(result.phone.as_deref(), Some("+1 (555) 123-4567"));
        assert!(result.skills.contains("PYTHON"));
        assert!(result.skills.contains("PANDAS"));
        assert!(result.skills.contains("SCIKIT-LEARN"));
        assert_eq!(
            result.education,
            vec!["master of science in statistics, state university."]
        );
        assert_eq!(result.experience_years, 3.2);
        assert_eq!(result.experience_level, SeniorityTier::Mid);
        assert_eq!(result.classification, "Data Science");
        assert_eq!(result.confidence, 0.87);
        assert_eq!(result.raw_text, RESUME);
    }

    #[test]
    fn test_empty_text_is_rejected() {
        for text in ["", "   \n\t "] {
            let err = analyzer().analyze_text(text).unwrap_err();
            assert!(matches!(err, AnalysisError::EmptyText));
            assert!(err.is_client_error());
        }
    }

    #[test]
    fn test_misses_still_produce_result() {
        let result = analyzer().analyze_text("a b c d e f").unwrap();
        assert_eq!(result.name, None);
        assert_eq!(result.email, None);
        assert!(result.skills.is_empty());
        assert!(result.education.is_empty());
        assert_eq!(result.experience_years, 0.0);
        assert_eq!(result.experience_level, SeniorityTier::Junior);
    }

    #[test]
    fn test_preview_is_truncated_by_chars() {
        let config = ExtractionConfig {
            preview_chars: 3,
            ..ExtractionConfig::default()
        };
        let analyzer = ResumeAnalyzer::from_config(Arc::new(FixedClassifier), &config);
        let result = analyzer.analyze_text("Zoë Łukasz").unwrap();
        assert_eq!(result.raw_text, "Zoë");
    }

    #[test]
    fn test_recognizer_overrides_first_line() {
        let recognizer = |text: &str| {
            let start = text.find("Ada").unwrap_or(0);
            vec![Entity::person(start..start + 12)]
        };
        let result = analyzer()
            .with_recognizer(Arc::new(recognizer))
            .analyze_text("Curriculum Vitae\nAda Lovelace, analyst")
            .unwrap();
        assert_eq!(result.name.as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_classifier_failure_is_server_error() {
        let err = ResumeAnalyzer::new(Arc::new(BrokenClassifier))
            .analyze_text(RESUME)
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Model(_)));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_text_input_analysis() {
        let input = ResumeInput::Text(RESUME.to_string());
        let result = analyzer().analyze(&input).unwrap();
        assert_eq!(result.experience_years, 3.2);
    }

    #[test]
    fn test_invalid_pdf_is_client_error() {
        let input = ResumeInput::Pdf {
            filename: "cv.pdf".to_string(),
            bytes: b"not a pdf".to_vec(),
        };
        let err = analyzer().analyze(&input).unwrap_err();
        assert!(matches!(err, AnalysisError::Pdf(_)));
        assert!(err.is_client_error());
    }

    fn blank_pdf() -> Vec<u8> {
        use lopdf::{dictionary, Document, Object, Stream};

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {},
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_pdf_without_text_is_rejected() {
        let input = ResumeInput::Pdf {
            filename: "blank.pdf".to_string(),
            bytes: blank_pdf(),
        };
        let err = analyzer().analyze(&input).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyText));
        assert!(err.is_client_error());
    }
}

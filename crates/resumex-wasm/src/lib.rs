//! WASM bindings for resume analysis.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.

use std::sync::Arc;

use wasm_bindgen::prelude::*;

use resumex_core::resume::rules::{self, CalendarPoint, ExperienceAggregator};
use resumex_core::{ResumeInput, SeniorityTier, TfidfClassifier};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// First email address in the text.
#[wasm_bindgen]
pub fn extract_email(text: &str) -> Option<String> {
    rules::extract_email(text)
}

/// First phone number in the text.
#[wasm_bindgen]
pub fn extract_phone(text: &str) -> Option<String> {
    rules::extract_phone(text)
}

/// Upper-cased skills found in the text, sorted.
#[wasm_bindgen]
pub fn extract_skills(text: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&rules::extract_skills(text))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Years of experience, with "present" resolved against the current month.
#[wasm_bindgen]
pub fn estimate_experience(text: &str) -> f64 {
    ExperienceAggregator::new().aggregate(text).years
}

/// Years of experience with "present" fixed to the given month.
#[wasm_bindgen]
pub fn estimate_experience_at(text: &str, year: i32, month: u32) -> Result<f64, JsValue> {
    let now = CalendarPoint::new(year, month)
        .ok_or_else(|| JsValue::from_str(&format!("invalid month: {}", month)))?;
    Ok(ExperienceAggregator::new().with_now(now).aggregate(text).years)
}

/// Seniority tier ("Junior", "Mid" or "Senior") for a number of years.
#[wasm_bindgen]
pub fn experience_level(years: f64) -> String {
    SeniorityTier::from_years(years).to_string()
}

/// Resume analyzer class for browser use.
///
/// Built once from the three model artifacts and reused for every document.
#[wasm_bindgen]
pub struct ResumeAnalyzer {
    inner: resumex_core::ResumeAnalyzer,
}

#[wasm_bindgen]
impl ResumeAnalyzer {
    /// Create an analyzer from the vectorizer, classifier and label encoder JSON.
    #[wasm_bindgen(constructor)]
    pub fn new(vectorizer: &str, classifier: &str, labels: &str) -> Result<ResumeAnalyzer, JsValue> {
        let model = TfidfClassifier::from_json(vectorizer, classifier, labels)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            inner: resumex_core::ResumeAnalyzer::new(Arc::new(model)),
        })
    }

    /// Fix the month "present" resolves to.
    #[wasm_bindgen]
    pub fn set_now(&mut self, year: i32, month: u32) -> Result<(), JsValue> {
        let now = CalendarPoint::new(year, month)
            .ok_or_else(|| JsValue::from_str(&format!("invalid month: {}", month)))?;
        self.inner = self.inner.clone().with_now(now);
        Ok(())
    }

    /// Analyze plain resume text.
    #[wasm_bindgen]
    pub fn analyze_text(&self, text: &str) -> Result<JsValue, JsValue> {
        let input = ResumeInput::from_parts(None, Some(text.to_string()))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.analyze(&input)
    }

    /// Analyze an uploaded PDF.
    #[wasm_bindgen]
    pub fn analyze_pdf(&self, filename: &str, bytes: &[u8]) -> Result<JsValue, JsValue> {
        let input = ResumeInput::from_parts(Some((filename.to_string(), bytes.to_vec())), None)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.analyze(&input)
    }

    /// Labels the classifier can predict.
    #[wasm_bindgen]
    pub fn labels(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.labels())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl ResumeAnalyzer {
    fn analyze(&self, input: &ResumeInput) -> Result<JsValue, JsValue> {
        let result = self
            .inner
            .analyze(input)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

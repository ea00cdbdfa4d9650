//! Email and phone extraction.

use super::FieldExtractor;
use super::patterns::{EMAIL, PHONE};

/// Email address extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailExtractor;

impl FieldExtractor for EmailExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        EMAIL.find(text).map(|m| m.as_str().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        EMAIL.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }
}

/// Phone number extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneExtractor;

impl FieldExtractor for PhoneExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        PHONE.find(text).map(|m| m.as_str().trim().to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PHONE
            .find_iter(text)
            .map(|m| m.as_str().trim().to_string())
            .collect()
    }
}

/// First email address in the text.
pub fn extract_email(text: &str) -> Option<String> {
    EmailExtractor.extract(text)
}

/// First phone number in the text.
pub fn extract_phone(text: &str) -> Option<String> {
    PhoneExtractor.extract(text)
}

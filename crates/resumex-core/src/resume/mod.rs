//! Resume analysis module.

mod analyzer;
pub mod rules;

pub use analyzer::ResumeAnalyzer;

use std::path::Path;

use crate::error::AnalysisError;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// A document submitted for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeInput {
    /// An uploaded PDF.
    Pdf { filename: String, bytes: Vec<u8> },
    /// Plain resume text.
    Text(String),
}

impl ResumeInput {
    /// Build an input from an optional upload and optional text.
    ///
    /// A file wins over text. Files must carry a `.pdf` extension, and empty
    /// text counts as no text at all.
    pub fn from_parts(file: Option<(String, Vec<u8>)>, text: Option<String>) -> Result<Self> {
        if let Some((filename, bytes)) = file {
            if !is_pdf_name(&filename) {
                return Err(AnalysisError::UnsupportedFileType(filename));
            }
            return Ok(ResumeInput::Pdf { filename, bytes });
        }

        match text {
            Some(text) if !text.is_empty() => Ok(ResumeInput::Text(text)),
            _ => Err(AnalysisError::NoInput),
        }
    }

    /// Short description for log lines.
    pub fn describe(&self) -> String {
        match self {
            ResumeInput::Pdf { filename, bytes } => format!("{} ({} bytes)", filename, bytes.len()),
            ResumeInput::Text(text) => format!("text ({} chars)", text.chars().count()),
        }
    }
}

fn is_pdf_name(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

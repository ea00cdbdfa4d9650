//! Error types for the resumex-core library.

use thiserror::Error;

/// Main error type for the resumex library.
#[derive(Error, Debug)]
pub enum ResumexError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Classification model error.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// Resume analysis error.
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to loading and running the classification model.
#[derive(Error, Debug)]
pub enum ModelError {
    /// An artifact file is missing from the model directory.
    #[error("model artifact not found: {0}")]
    MissingArtifact(String),

    /// An artifact could not be read or deserialized.
    #[error("malformed artifact {artifact}: {reason}")]
    Malformed { artifact: String, reason: String },

    /// Artifacts loaded but disagree with each other.
    #[error("inconsistent model: {0}")]
    Inconsistent(String),
}

/// Errors raised while analyzing a single resume.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Neither a file nor text was supplied.
    #[error("either a file or text must be provided")]
    NoInput,

    /// A file was supplied that is not a PDF.
    #[error("only PDF files are supported for file upload, got {0}")]
    UnsupportedFileType(String),

    /// The supplied or decoded text is empty after trimming.
    #[error("could not extract text from resume")]
    EmptyText,

    /// The PDF could not be decoded.
    #[error("failed to parse PDF: {0}")]
    Pdf(#[from] PdfError),

    /// The classifier failed.
    #[error("classification failed: {0}")]
    Model(#[from] ModelError),
}

impl AnalysisError {
    /// Whether the caller is at fault (bad or missing input) rather than the service.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, AnalysisError::Model(_))
    }
}

/// Result type for the resumex library.
pub type Result<T> = std::result::Result<T, ResumexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        assert!(AnalysisError::NoInput.is_client_error());
        assert!(AnalysisError::EmptyText.is_client_error());
        assert!(AnalysisError::UnsupportedFileType("cv.docx".into()).is_client_error());
        assert!(AnalysisError::Pdf(PdfError::NoPages).is_client_error());
        assert!(!AnalysisError::Model(ModelError::MissingArtifact("x".into())).is_client_error());
    }
}

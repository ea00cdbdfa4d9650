//! Core library for resume analysis.
//!
//! This crate provides:
//! - PDF processing (text extraction)
//! - Rule-based field extraction (contact details, skills, education, name)
//! - Experience estimation from date ranges and stated years
//! - Job-role classification with a TF-IDF + logistic regression model

pub mod error;
pub mod models;
pub mod pdf;
pub mod classify;
pub mod resume;

pub use error::{ResumexError, Result};
pub use models::analysis::{AnalysisResult, SeniorityTier};
pub use models::config::ResumexConfig;
pub use pdf::{PdfProcessor, PdfExtractor};
pub use classify::{Classification, DocumentClassifier, TfidfClassifier};
pub use resume::{ResumeAnalyzer, ResumeInput};

//! Rule-based field extractors for resumes.

pub mod contact;
pub mod dates;
pub mod education;
pub mod experience;
pub mod name;
pub mod patterns;
pub mod skills;

pub use contact::{extract_email, extract_phone, EmailExtractor, PhoneExtractor};
pub use dates::{interpret, CalendarPoint, DateResolution};
pub use education::{extract_education, EducationExtractor};
pub use experience::{ExperienceAggregator, ExperienceEstimate, ExperienceMethod, Period, PeriodEnd};
pub use name::{Entity, EntityLabel, EntityRecognizer, NameResolver, NoopRecognizer};
pub use skills::{extract_skills, SkillExtractor};

/// Trait for single-valued field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

//! Candidate name resolution.

use std::ops::Range;
use std::sync::Arc;

use tracing::trace;

/// Label attached to a recognized entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
    Organization,
    Location,
    Other(String),
}

/// A labeled span of the input text (byte offsets).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub span: Range<usize>,
    pub label: EntityLabel,
}

impl Entity {
    pub fn new(span: Range<usize>, label: EntityLabel) -> Self {
        Self { span, label }
    }

    pub fn person(span: Range<usize>) -> Self {
        Self::new(span, EntityLabel::Person)
    }
}

/// Named-entity recognition backend.
pub trait EntityRecognizer: Send + Sync {
    /// Labeled entities in document order.
    fn find_person_entities(&self, text: &str) -> Vec<Entity>;
}

/// Recognizer that never finds anything, leaving only the first-line heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecognizer;

impl EntityRecognizer for NoopRecognizer {
    fn find_person_entities(&self, _text: &str) -> Vec<Entity> {
        Vec::new()
    }
}

impl<F> EntityRecognizer for F
where
    F: Fn(&str) -> Vec<Entity> + Send + Sync,
{
    fn find_person_entities(&self, text: &str) -> Vec<Entity> {
        self(text)
    }
}

/// Longest person entity accepted as a name, in whitespace tokens.
const MAX_ENTITY_TOKENS: usize = 4;

/// Accepted token counts for a first-line name.
const FIRST_LINE_TOKENS: std::ops::RangeInclusive<usize> = 2..=4;

/// Resolves the candidate name from entities, then from the first line.
#[derive(Clone)]
pub struct NameResolver {
    recognizer: Arc<dyn EntityRecognizer>,
}

impl NameResolver {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }

    pub fn resolve(&self, text: &str) -> Option<String> {
        let entities = self.recognizer.find_person_entities(text);

        for entity in entities.iter().filter(|e| e.label == EntityLabel::Person) {
            let Some(surface) = text.get(entity.span.clone()) else {
                trace!("Skipping entity with invalid span {:?}", entity.span);
                continue;
            };

            let tokens = surface.split_whitespace().count();
            if (1..=MAX_ENTITY_TOKENS).contains(&tokens) {
                return Some(surface.trim().to_string());
            }
        }

        first_line_name(text)
    }
}

impl Default for NameResolver {
    fn default() -> Self {
        Self::new(Arc::new(NoopRecognizer))
    }
}

/// The first non-empty line, if it has two to four tokens.
pub fn first_line_name(text: &str) -> Option<String> {
    let line = text.trim().lines().next()?.trim();
    FIRST_LINE_TOKENS
        .contains(&line.split_whitespace().count())
        .then(|| line.to_string())
}

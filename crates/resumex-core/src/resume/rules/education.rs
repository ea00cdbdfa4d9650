//! Education sentence extraction.

/// Keywords marking a sentence as an education mention (matched as lower-case substrings).
pub const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor", "master", "phd", "associate", "bs", "ms", "ba", "ma",
    "b.sc", "m.sc", "b.a", "m.a", "degree", "university", "college",
];

/// Collects sentences that mention education.
#[derive(Debug, Clone, Copy)]
pub struct EducationExtractor {
    limit: usize,
}

impl EducationExtractor {
    /// Create an extractor keeping at most five sentences.
    pub fn new() -> Self {
        Self { limit: 5 }
    }

    /// Set the maximum number of sentences kept.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Matching sentences in document order, trimmed and lower-cased, up to the limit.
    pub fn extract(&self, text: &str) -> Vec<String> {
        split_sentences(text)
            .into_iter()
            .filter(|sentence| mentions_education(sentence))
            .take(self.limit)
            .map(str::to_lowercase)
            .collect()
    }
}

impl Default for EducationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a sentence contains an education keyword (case-insensitive).
pub fn mentions_education(sentence: &str) -> bool {
    let lowered = sentence.to_lowercase();
    EDUCATION_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Split text into trimmed, non-empty sentences.
///
/// Line breaks always end a sentence. Within a line, `.`, `!` or `?` ends a
/// sentence when followed by whitespace and an upper-case letter or digit,
/// unless the word before it is an abbreviation ("B.Sc.", "J.").
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();

    for line in text.lines() {
        let mut start = 0;

        for (i, c) in line.char_indices() {
            if !matches!(c, '.' | '!' | '?') {
                continue;
            }

            let end = i + c.len_utf8();
            let rest = &line[end..];
            let next = rest.trim_start();
            let starts_sentence = next.len() < rest.len()
                && next
                    .chars()
                    .next()
                    .is_some_and(|n| n.is_uppercase() || n.is_ascii_digit());

            if starts_sentence && !(c == '.' && is_abbreviation(&line[start..i])) {
                push_trimmed(&mut sentences, &line[start..end]);
                start = end;
            }
        }

        push_trimmed(&mut sentences, &line[start..]);
    }

    sentences
}

fn is_abbreviation(before_dot: &str) -> bool {
    let word = before_dot
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or_default();
    word.chars().count() == 1 || word.contains('.')
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}

/// Education sentences with the default limit.
pub fn extract_education(text: &str) -> Vec<String> {
    EducationExtractor::new().extract(text)
}

//! Skill keyword matching against a closed vocabulary.

use std::collections::{BTreeSet, HashSet};

/// Built-in skill vocabulary (lower case).
pub const SKILL_VOCABULARY: &[&str] = &[
    // Languages
    "python", "java", "c++", "c#", "javascript", "typescript", "go", "rust", "ruby", "php",
    // Machine learning and data
    "tensorflow", "pytorch", "keras", "scikit-learn", "pandas", "numpy", "matplotlib", "seaborn",
    // DevOps and cloud
    "docker", "kubernetes", "jenkins", "gitlab", "github", "aws", "azure", "gcp",
    // Front end
    "react", "vue", "angular", "next.js", "svelte", "ember",
    // Back end
    "node", "express", "django", "flask", "spring", "fastapi", "laravel",
    // Databases
    "sql", "postgresql", "mysql", "mongodb", "redis", "elasticsearch",
    // Tools and practices
    "git", "linux", "bash", "shell", "html", "css", "sass", "webpack",
    "graphql", "rest", "microservices", "oop", "functional", "agile", "scrum",
];

/// Matches resume tokens against the skill vocabulary.
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    vocabulary: HashSet<String>,
}

impl SkillExtractor {
    /// Create an extractor over the built-in vocabulary.
    pub fn new() -> Self {
        Self {
            vocabulary: SKILL_VOCABULARY.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add skills to the vocabulary.
    pub fn with_extra_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.vocabulary.extend(
            skills
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty()),
        );
        self
    }

    /// Whether a token (any case) is a known skill.
    pub fn is_skill(&self, token: &str) -> bool {
        self.vocabulary.contains(&token.to_lowercase())
    }

    /// Upper-cased vocabulary hits in the text.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();
        tokenize(&lowered)
            .filter(|token| self.vocabulary.contains(*token))
            .map(|token| token.to_uppercase())
            .collect()
    }
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Word-level tokens that keep skill punctuation ("c++", "c#", "next.js", "scikit-learn").
///
/// Dots and hyphens are kept inside tokens but stripped from either end.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#' | '.' | '-')))
        .map(|token| token.trim_matches(|c: char| c == '.' || c == '-'))
        .filter(|token| !token.is_empty())
}

/// Skills from the built-in vocabulary.
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    SkillExtractor::new().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_and_deduplicated() {
        assert_eq!(extract_skills("Python and python, also PYTHON."), set(&["PYTHON"]));
    }

    #[test]
    fn test_punctuated_skills() {
        let text = "Skills: C++, C#, Next.js, scikit-learn; Docker/Kubernetes.";
        assert_eq!(
            extract_skills(text),
            set(&["C#", "C++", "DOCKER", "KUBERNETES", "NEXT.JS", "SCIKIT-LEARN"])
        );
    }

    #[test]
    fn test_whole_tokens_only() {
        assert_eq!(extract_skills("Going to Django meetups"), set(&["DJANGO"]));
        assert_eq!(extract_skills("javascripting"), BTreeSet::new());
    }

    #[test]
    fn test_idempotent() {
        let text = "Rust, Go, SQL and Redis";
        assert_eq!(extract_skills(text), extract_skills(text));
        assert_eq!(extract_skills(text), set(&["GO", "REDIS", "RUST", "SQL"]));
    }

    #[test]
    fn test_extra_skills() {
        let extractor = SkillExtractor::new().with_extra_skills(["Terraform", "  "]);
        assert!(extractor.is_skill("TERRAFORM"));
        assert_eq!(extractor.extract("terraform and ansible"), set(&["TERRAFORM"]));
    }

    #[test]
    fn test_tokenize() {
        let tokens: Vec<&str> = tokenize("node.js, --flag c++.").collect();
        assert_eq!(tokens, vec!["node.js", "flag", "c++"]);
    }
}

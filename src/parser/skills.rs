//! Technical-skill extraction against a fixed vocabulary

use regex::Regex;

/// Technology terms scanned for by default. Output order follows this list,
/// not order of appearance in the text.
pub const DEFAULT_TECH_SKILLS: [&str; 18] = [
    "javascript",
    "typescript",
    "python",
    "java",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "mongodb",
    "sql",
    "aws",
    "docker",
    "kubernetes",
    "ci/cd",
    "git",
    "agile",
    "scrum",
];

pub struct SkillExtractor {
    matchers: Vec<(String, Regex)>,
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillExtractor {
    pub fn new() -> Self {
        Self::with_custom_skills(Vec::new())
    }

    /// Create an extractor with extra vocabulary terms appended after the
    /// built-in list
    pub fn with_custom_skills(additional_skills: Vec<String>) -> Self {
        let mut vocabulary: Vec<String> = DEFAULT_TECH_SKILLS
            .iter()
            .map(|s| s.to_string())
            .collect();

        for skill in additional_skills {
            let skill = skill.to_lowercase();
            if !vocabulary.contains(&skill) {
                vocabulary.push(skill);
            }
        }

        let matchers = vocabulary
            .into_iter()
            .map(|term| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(&term));
                let matcher = Regex::new(&pattern).expect("Invalid skill regex");
                (term, matcher)
            })
            .collect();

        Self { matchers }
    }

    /// Vocabulary terms found in the text as case-insensitive whole words,
    /// each at most once
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.matchers
            .iter()
            .filter(|(_, matcher)| matcher.is_match(text))
            .map(|(term, _)| term.clone())
            .collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.matchers.len()
    }
}

//! Education history extraction

use crate::parser::resume::Education;
use regex::Regex;

/// Degree keywords scanned for, in priority order. When a sentence mentions
/// several, the earliest entry in this list wins.
pub const DEGREE_KEYWORDS: [&str; 9] = [
    "Bachelor's",
    "Master's",
    "PhD",
    "BSc",
    "MSc",
    "MBA",
    "Bachelor of",
    "Master of",
    "Doctor of",
];

pub struct EducationExtractor {
    institution_regex: Regex,
    year_regex: Regex,
}

impl Default for EducationExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EducationExtractor {
    pub fn new() -> Self {
        // Institution is the run of capitalized words after the preposition.
        let institution_regex =
            Regex::new(r"(?:from|at)\s+([A-Z][A-Za-z&]*(?:\s+[A-Z][A-Za-z&]*)*)")
                .expect("Invalid institution regex");

        let year_regex = Regex::new(r"\b(?:19|20)\d{2}\b").expect("Invalid year regex");

        Self {
            institution_regex,
            year_regex,
        }
    }

    /// One record per sentence mentioning a degree keyword. Sentences are
    /// independent, so repeated mentions produce repeated records.
    pub fn extract(&self, sentences: &[String]) -> Vec<Education> {
        let mut education = Vec::new();

        for sentence in sentences {
            let degree = match DEGREE_KEYWORDS.iter().find(|&&d| sentence.contains(d)) {
                Some(degree) => degree.to_string(),
                None => continue,
            };

            let institution = self
                .institution_regex
                .captures(sentence)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();

            let year = self.year_regex.find(sentence).map(|m| m.as_str().to_string());

            education.push(Education {
                degree,
                institution,
                year,
            });
        }

        education
    }
}

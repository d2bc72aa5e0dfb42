//! Soft-skill detection and culture-fit scoring

use regex::Regex;

/// Soft-skill phrases scanned for, in output order
pub const DEFAULT_SOFT_SKILLS: [&str; 8] = [
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
    "adaptability",
    "creativity",
    "time management",
    "collaboration",
];

/// Result of the soft-skill pass
#[derive(Debug, Clone, PartialEq)]
pub struct SoftSkillAnalysis {
    /// Matched vocabulary phrases, in vocabulary order
    pub skills: Vec<String>,
    /// Culture-fit estimate, 0-100
    pub score: u8,
}

pub struct SoftSkillAnalyzer {
    matchers: Vec<(String, Regex)>,
    team_regex: Regex,
    growth_regex: Regex,
    leadership_regex: Regex,
}

impl Default for SoftSkillAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftSkillAnalyzer {
    pub fn new() -> Self {
        let matchers = DEFAULT_SOFT_SKILLS
            .iter()
            .map(|&phrase| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(phrase));
                let matcher = Regex::new(&pattern).expect("Invalid soft skill regex");
                (phrase.to_string(), matcher)
            })
            .collect();

        let team_regex = Regex::new(r"(?i)\b(?:team|collaborate|together|we|group)\b")
            .expect("Invalid team language regex");
        let growth_regex = Regex::new(r"(?i)\b(?:learn|grow|improve|develop|challenge)\b")
            .expect("Invalid growth language regex");
        let leadership_regex = Regex::new(r"(?i)\b(?:lead|initiate|organize|manage|coordinate)\b")
            .expect("Invalid leadership language regex");

        Self {
            matchers,
            team_regex,
            growth_regex,
            leadership_regex,
        }
    }

    /// Match the vocabulary and derive the culture-fit score
    pub fn analyze(&self, text: &str) -> SoftSkillAnalysis {
        let skills: Vec<String> = self
            .matchers
            .iter()
            .filter(|(_, matcher)| matcher.is_match(text))
            .map(|(phrase, _)| phrase.clone())
            .collect();

        let base = (skills.len() as f64 / self.matchers.len() as f64 * 100.0).round() as u32;
        let score = (base + self.contextual_bonus(text)).min(100) as u8;

        SoftSkillAnalysis { skills, score }
    }

    /// Independent, additive bonuses for team, growth and leadership language
    fn contextual_bonus(&self, text: &str) -> u32 {
        let mut bonus = 0;

        if self.team_regex.is_match(text) {
            bonus += 10;
        }
        if self.growth_regex.is_match(text) {
            bonus += 10;
        }
        if self.leadership_regex.is_match(text) {
            bonus += 10;
        }

        bonus
    }
}

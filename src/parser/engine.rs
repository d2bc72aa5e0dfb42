//! Resume assembler
//!
//! Runs every field extractor over the input text and merges their results
//! into one record. Parsing never fails: fields with no match come back
//! empty, and the same text always produces the same record.

use crate::parser::contact::ContactExtractor;
use crate::parser::education::EducationExtractor;
use crate::parser::experience::ExperienceExtractor;
use crate::parser::names::{CapitalizedBigramRecognizer, NameRecognizer};
use crate::parser::resume::{ParsedResume, PersonalInfo};
use crate::parser::skills::SkillExtractor;
use crate::parser::soft_skills::SoftSkillAnalyzer;
use crate::parser::text_processor::TextProcessor;

pub struct ResumeParser {
    text_processor: TextProcessor,
    contact: ContactExtractor,
    skills: SkillExtractor,
    experience: ExperienceExtractor,
    education: EducationExtractor,
    soft_skills: SoftSkillAnalyzer,
    names: Box<dyn NameRecognizer>,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser {
    pub fn new() -> Self {
        Self::with_custom_skills(Vec::new())
    }

    /// Build a parser whose technical vocabulary extends the built-in list
    pub fn with_custom_skills(additional_skills: Vec<String>) -> Self {
        Self {
            text_processor: TextProcessor::new(),
            contact: ContactExtractor::new(),
            skills: SkillExtractor::with_custom_skills(additional_skills),
            experience: ExperienceExtractor::new(),
            education: EducationExtractor::new(),
            soft_skills: SoftSkillAnalyzer::new(),
            names: Box::new(CapitalizedBigramRecognizer),
        }
    }

    /// Swap in a different name-recognition capability
    pub fn with_name_recognizer(mut self, names: Box<dyn NameRecognizer>) -> Self {
        self.names = names;
        self
    }

    /// Parse raw resume text into a structured record.
    ///
    /// Pure and synchronous; the extractors are independent and share no
    /// state, so one parser may serve concurrent callers.
    pub fn parse(&self, text: &str) -> ParsedResume {
        let contact = self.contact.extract(text);
        let skills = self.skills.extract(text);
        let experience = self.experience.extract(text);

        let sentences = self.text_processor.split_sentences(text);
        let education = self.education.extract(&sentences);

        let analysis = self.soft_skills.analyze(text);

        let name = self
            .names
            .recognize(text)
            .into_iter()
            .next()
            .unwrap_or_default();

        ParsedResume {
            personal_info: PersonalInfo {
                name,
                email: contact.email,
                phone: contact.phone,
                location: contact.location,
            },
            skills,
            experience,
            education,
            soft_skills: analysis.skills,
            culture_fit_score: analysis.score,
        }
    }
}

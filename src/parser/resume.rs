//! Structured candidate record produced by the parsing pipeline

use serde::{Deserialize, Serialize};

/// Candidate facts recovered from one resume document.
///
/// Every field is present for every input; extractors that find nothing
/// contribute an empty string, empty list or zero, never a missing field.
/// Serialized as camelCase to match the candidate-display contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    pub personal_info: PersonalInfo,

    /// Matched technical-skill terms, in vocabulary order
    pub skills: Vec<String>,

    pub experience: Experience,

    /// One entry per degree-bearing sentence, in document order.
    /// Repeated mentions across sentences produce repeated entries.
    pub education: Vec<Education>,

    /// Matched soft-skill phrases, in vocabulary order
    pub soft_skills: Vec<String>,

    /// Culture-fit estimate, 0-100
    pub culture_fit_score: u8,
}

/// Identity and contact details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    /// First recognized person name, or empty
    pub name: String,

    /// First email address found, or empty
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Work history summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    /// Years from the first "N years of experience" statement, or 0
    pub years: u32,

    /// Employer phrases as written, not deduplicated
    pub companies: Vec<String>,

    /// Title phrases, deduplicated in order of first occurrence
    pub roles: Vec<String>,
}

/// A single degree mention
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,

    /// Capitalized-word run after "from"/"at", or empty
    pub institution: String,

    /// First 19xx/20xx token in the sentence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

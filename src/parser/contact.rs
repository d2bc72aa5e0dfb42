//! Contact information extraction

use regex::Regex;

/// Contact details recovered from raw text
#[derive(Debug, Clone, PartialEq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
}

pub struct ContactExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    location_regex: Regex,
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactExtractor {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Invalid email regex");

        let phone_regex = Regex::new(r"(?:\+\d{1,2}\s?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}")
            .expect("Invalid phone regex");

        // The trailing group consumes the terminator; the captured phrase is
        // the same as with a lookahead.
        let location_regex =
            Regex::new(r"(?:in|from|at)\s+([A-Z][A-Za-z\s,]+)(?:[.,]|\s+(?:area|region))")
                .expect("Invalid location regex");

        Self {
            email_regex,
            phone_regex,
            location_regex,
        }
    }

    /// Take the first email, phone number and location phrase in the text
    pub fn extract(&self, text: &str) -> ContactInfo {
        let email = self
            .email_regex
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let phone = self.phone_regex.find(text).map(|m| m.as_str().to_string());

        // Also fires on company or person phrases after the same prepositions;
        // that overlap is a known limitation of the heuristic.
        let location = self
            .location_regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string());

        ContactInfo {
            email,
            phone,
            location,
        }
    }
}

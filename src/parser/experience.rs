//! Work experience extraction

use crate::parser::resume::Experience;
use regex::Regex;

pub struct ExperienceExtractor {
    years_regex: Regex,
    company_regex: Regex,
    role_regex: Regex,
}

impl Default for ExperienceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperienceExtractor {
    pub fn new() -> Self {
        let years_regex =
            Regex::new(r"(?i)(\d+)[\s-]*years? of experience").expect("Invalid years regex");

        // Consuming terminator in place of a lookahead; group 1 is unchanged.
        let company_regex =
            Regex::new(r"(?:at|with)\s+([A-Z][A-Za-z\s&]+)(?:[.,]|\s+(?:from|as|in))")
                .expect("Invalid company regex");

        let role_regex = Regex::new(
            r"(?:Senior|Lead|Principal|Software|Developer|Engineer|Architect|Manager)[A-Za-z\s]+",
        )
        .expect("Invalid role regex");

        Self {
            years_regex,
            company_regex,
            role_regex,
        }
    }

    /// Pull years, employers and titles out of raw text
    pub fn extract(&self, text: &str) -> Experience {
        // Only the first years-of-experience statement counts.
        let years = self
            .years_regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);

        let companies = self
            .company_regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect();

        let mut roles: Vec<String> = Vec::new();
        for m in self.role_regex.find_iter(text) {
            let role = m.as_str().to_string();
            if !roles.contains(&role) {
                roles.push(role);
            }
        }

        Experience {
            years,
            companies,
            roles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_years_statement_wins() {
        let extractor = ExperienceExtractor::new();
        let experience =
            extractor.extract("8 years of experience overall, 3 years of experience with Go.");

        assert_eq!(experience.years, 8);
    }

    #[test]
    fn test_years_default_to_zero() {
        let extractor = ExperienceExtractor::new();
        let experience = extractor.extract("A career spanning several startups.");

        assert_eq!(experience.years, 0);
    }

    #[test]
    fn test_hyphenated_years_phrase() {
        let extractor = ExperienceExtractor::new();
        let experience = extractor.extract("12-years of experience in backend work.");

        assert_eq!(experience.years, 12);
    }

    #[test]
    fn test_company_preposition_is_stripped() {
        let extractor = ExperienceExtractor::new();
        let experience = extractor.extract("Shipped payments at Acme Corp. Led infra with Initech.");

        assert_eq!(experience.companies, vec!["Acme Corp", "Initech"]);
    }

    #[test]
    fn test_repeated_companies_are_kept() {
        let extractor = ExperienceExtractor::new();
        let experience = extractor.extract("Interned at Initech. Returned at Initech.");

        assert_eq!(experience.companies, vec!["Initech", "Initech"]);
    }

    #[test]
    fn test_roles_deduplicate_preserving_first_occurrence() {
        let extractor = ExperienceExtractor::new();
        let experience = extractor.extract("Senior Developer. Lead Architect. Senior Developer.");

        assert_eq!(
            experience.roles,
            vec!["Senior Developer", "Lead Architect"]
        );
    }

    #[test]
    fn test_role_match_extends_through_adjoining_words() {
        let extractor = ExperienceExtractor::new();
        let experience = extractor.extract("Worked as Senior Engineer at Acme Corp. Hired in 2019.");

        assert!(experience
            .roles
            .iter()
            .any(|r| r.contains("Senior Engineer")));
    }
}

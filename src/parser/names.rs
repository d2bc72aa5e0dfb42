//! Person-name recognition

use unicode_segmentation::UnicodeSegmentation;

/// Pluggable name-recognition capability.
///
/// Implementations return candidate person names in document order; the
/// assembler takes the first. Backed by a heuristic here, but anything that
/// can tag names in text (an NLP entity tagger, a hosted service) fits.
pub trait NameRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<String>;
}

/// Treats every pair of adjacent capitalized words as a name candidate.
///
/// Deliberately naive: "Senior Engineer" qualifies just as much as
/// "Jane Doe". Resumes usually open with the candidate's name, so taking
/// the first candidate works out in practice.
pub struct CapitalizedBigramRecognizer;

impl CapitalizedBigramRecognizer {
    fn is_name_word(word: &str) -> bool {
        let mut chars = word.chars();
        match chars.next() {
            Some(first) if first.is_uppercase() => chars.all(|c| c.is_lowercase()),
            _ => false,
        }
    }
}

impl NameRecognizer for CapitalizedBigramRecognizer {
    fn recognize(&self, text: &str) -> Vec<String> {
        let words: Vec<&str> = text.unicode_words().collect();

        words
            .windows(2)
            .filter(|pair| Self::is_name_word(pair[0]) && Self::is_name_word(pair[1]))
            .map(|pair| format!("{} {}", pair[0], pair[1]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_candidate_is_the_leading_bigram() {
        let recognizer = CapitalizedBigramRecognizer;
        let names = recognizer.recognize("Jane Doe jane.doe@example.com, formerly at Acme Corp");

        assert_eq!(names.first().map(String::as_str), Some("Jane Doe"));
    }

    #[test]
    fn test_lowercase_text_yields_no_candidates() {
        let recognizer = CapitalizedBigramRecognizer;

        assert!(recognizer.recognize("no names in this text").is_empty());
        assert!(recognizer.recognize("").is_empty());
    }

    #[test]
    fn test_acronyms_are_not_name_words() {
        let recognizer = CapitalizedBigramRecognizer;
        let names = recognizer.recognize("MBA MSC then Mary Smith");

        assert_eq!(names, vec!["Mary Smith"]);
    }

    #[test]
    fn test_candidates_preserve_document_order() {
        let recognizer = CapitalizedBigramRecognizer;
        let names = recognizer.recognize("John Park worked with Dana Reed");

        assert_eq!(names, vec!["John Park", "Dana Reed"]);
    }
}

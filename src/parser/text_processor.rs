//! Sentence and word segmentation for the extraction pipeline

use unicode_segmentation::UnicodeSegmentation;

pub struct TextProcessor;

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Split text into sentences
    pub fn split_sentences(&self, text: &str) -> Vec<String> {
        text.unicode_sentences()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Tokenize text into words, preserving case
    pub fn words(&self, text: &str) -> Vec<String> {
        text.unicode_words().map(|w| w.to_string()).collect()
    }
}

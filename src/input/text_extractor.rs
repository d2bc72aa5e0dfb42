//! Text extraction from uploaded file formats
//!
//! The parsing pipeline only ever sees plain text; everything here exists to
//! reduce a document on disk to that text. Conversion failures stay in this
//! layer and are reported per file.

use crate::error::{Result, ResumeScreenerError};
use crate::input::file_detector::FileType;
use pulldown_cmark::{html, Parser};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeScreenerError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeScreenerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .await
            .map_err(ResumeScreenerError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path)
            .await
            .map_err(ResumeScreenerError::Io)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Ok(self.html_to_text(&html_output))
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> String {
        let text = html
            .replace("<br>", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'");

        let re = regex::Regex::new(r"<[^>]*>").expect("Invalid tag regex");
        let clean_text = re.replace_all(&text, "");

        let lines: Vec<String> = clean_text
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}

/// Convert one document to plain text, routing on its extension
pub async fn extract_from_path(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ResumeScreenerError::InvalidInput(format!(
            "File does not exist: {}",
            path.display()
        )));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| {
            ResumeScreenerError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;

    match FileType::from_extension(extension) {
        FileType::Pdf => PdfExtractor.extract(path).await,
        FileType::Text => PlainTextExtractor.extract(path).await,
        FileType::Markdown => MarkdownExtractor.extract(path).await,
        FileType::Unknown => Err(ResumeScreenerError::UnsupportedFormat(format!(
            "Unsupported file type for: {}",
            path.display()
        ))),
    }
}

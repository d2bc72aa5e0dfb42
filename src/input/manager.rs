//! Input manager for single documents and upload batches

use crate::error::Result;
use crate::input::text_extractor::extract_from_path;
use crate::output::report::CandidateOutcome;
use crate::parser::ResumeParser;
use indicatif::ProgressBar;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Routes a document through the matching text extractor
pub struct InputManager;

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        info!("Extracting text from: {}", path.display());
        extract_from_path(path).await
    }
}

/// Parses a batch of uploaded documents.
///
/// One independent task per document, results collected in input order. A
/// document that cannot be converted to text becomes a failed outcome and
/// the rest of the batch is unaffected.
pub struct BatchProcessor {
    parser: Arc<ResumeParser>,
}

impl BatchProcessor {
    pub fn new(parser: ResumeParser) -> Self {
        Self {
            parser: Arc::new(parser),
        }
    }

    pub async fn process(&self, paths: &[PathBuf]) -> Vec<CandidateOutcome> {
        let progress = ProgressBar::new(paths.len() as u64);

        let handles: Vec<_> = paths
            .iter()
            .map(|path| {
                let parser = Arc::clone(&self.parser);
                let path = path.clone();
                tokio::spawn(async move {
                    let manager = InputManager::new();
                    match manager.extract_text(&path).await {
                        Ok(text) => CandidateOutcome::parsed(&path, parser.parse(&text)),
                        Err(e) => {
                            warn!("Skipping {}: {}", path.display(), e);
                            CandidateOutcome::failed(&path, e.to_string())
                        }
                    }
                })
            })
            .collect();

        let mut outcomes = Vec::with_capacity(handles.len());
        for (handle, path) in handles.into_iter().zip(paths) {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => CandidateOutcome::failed(path, format!("Parse task failed: {}", e)),
            };
            progress.inc(1);
            outcomes.push(outcome);
        }
        progress.finish_and_clear();

        outcomes
    }
}

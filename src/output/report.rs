//! Screening report structures

use crate::parser::ParsedResume;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result of one screening run over a batch of documents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningReport {
    /// Report generation info
    pub metadata: ReportMetadata,

    /// Per-document outcomes, in upload order
    pub candidates: Vec<CandidateOutcome>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub screener_version: String,
    pub document_count: usize,
    pub parsed_count: usize,
    pub failed_count: usize,
    pub processing_time_ms: u64,
}

/// Outcome for a single document. A conversion failure is recorded here
/// instead of aborting the batch; successfully parsed siblings render
/// regardless.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateOutcome {
    pub file: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<ParsedResume>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CandidateOutcome {
    pub fn parsed(path: &Path, resume: ParsedResume) -> Self {
        Self {
            file: path.display().to_string(),
            resume: Some(resume),
            error: None,
        }
    }

    pub fn failed(path: &Path, error: String) -> Self {
        Self {
            file: path.display().to_string(),
            resume: None,
            error: Some(error),
        }
    }

    pub fn is_parsed(&self) -> bool {
        self.resume.is_some()
    }
}

impl ScreeningReport {
    pub fn new(candidates: Vec<CandidateOutcome>, processing_time_ms: u64) -> Self {
        let parsed_count = candidates.iter().filter(|c| c.is_parsed()).count();

        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                screener_version: env!("CARGO_PKG_VERSION").to_string(),
                document_count: candidates.len(),
                parsed_count,
                failed_count: candidates.len() - parsed_count,
                processing_time_ms,
            },
            candidates,
        }
    }
}

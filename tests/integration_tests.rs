//! Integration tests for the resume screener

use resume_screener::input::manager::{BatchProcessor, InputManager};
use resume_screener::output::report::ScreeningReport;
use resume_screener::parser::ResumeParser;
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("React"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_fixture_parses_end_to_end() {
    let manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let parser = ResumeParser::new();
    let resume = parser.parse(&text);

    assert_eq!(resume.personal_info.name, "John Doe");
    assert_eq!(resume.personal_info.email, "john.doe@techmail.com");
    assert_eq!(resume.personal_info.phone.as_deref(), Some("(415) 555-0123"));

    assert_eq!(
        resume.skills,
        vec!["javascript", "typescript", "react", "node.js", "aws", "docker"]
    );

    assert_eq!(resume.experience.years, 7);
    assert!(resume.experience.companies.iter().any(|c| c == "Initech"));
    assert!(resume
        .experience
        .roles
        .iter()
        .any(|r| r.contains("Software Engineer")));

    assert_eq!(resume.education.len(), 1);
    assert_eq!(resume.education[0].degree, "Bachelor's");
    assert_eq!(resume.education[0].institution, "State University");
    assert_eq!(resume.education[0].year.as_deref(), Some("2012"));

    assert_eq!(resume.culture_fit_score, 58);
}

#[tokio::test]
async fn test_markdown_fixture_parses() {
    let manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    let parser = ResumeParser::new();
    let resume = parser.parse(&text);

    assert_eq!(resume.personal_info.email, "john.doe@techmail.com");
    assert!(resume.skills.contains(&"react".to_string()));
    assert!(resume.skills.contains(&"node.js".to_string()));
    assert_eq!(resume.experience.years, 7);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.xyz");
    std::fs::write(&path, "some content").unwrap();

    let manager = InputManager::new();
    let result = manager.extract_text(&path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/nonexistent.txt"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_batch_preserves_order_and_isolates_failures() {
    let dir = tempfile::tempdir().unwrap();

    let good = dir.path().join("good.txt");
    std::fs::write(
        &good,
        "Jane Doe jane@example.com. 5 years of experience. Strong communication skills.",
    )
    .unwrap();

    let unsupported = dir.path().join("scan.docx");
    std::fs::write(&unsupported, "binary-ish content").unwrap();

    let missing = dir.path().join("missing.txt");

    let processor = BatchProcessor::new(ResumeParser::new());
    let outcomes = processor
        .process(&[good.clone(), unsupported.clone(), missing.clone(), good.clone()])
        .await;

    assert_eq!(outcomes.len(), 4);
    assert!(outcomes[0].is_parsed());
    assert!(!outcomes[1].is_parsed());
    assert!(outcomes[1].error.is_some());
    assert!(!outcomes[2].is_parsed());
    // A failed sibling must not affect the other documents in the batch.
    assert!(outcomes[3].is_parsed());

    let resume = outcomes[0].resume.as_ref().unwrap();
    assert_eq!(resume.personal_info.email, "jane@example.com");
    assert_eq!(resume.experience.years, 5);
}

#[tokio::test]
async fn test_batch_report_round_trips_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.txt");
    std::fs::write(&good, "Jane Doe jane@example.com").unwrap();
    let missing = dir.path().join("missing.txt");

    let processor = BatchProcessor::new(ResumeParser::new());
    let outcomes = processor.process(&[good, missing]).await;
    let report = ScreeningReport::new(outcomes, 3);

    assert_eq!(report.metadata.document_count, 2);
    assert_eq!(report.metadata.parsed_count, 1);
    assert_eq!(report.metadata.failed_count, 1);

    let json = serde_json::to_string(&report).unwrap();
    let restored: ScreeningReport = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.candidates.len(), 2);
    assert!(restored.candidates[0].is_parsed());
    assert!(!restored.candidates[1].is_parsed());
}

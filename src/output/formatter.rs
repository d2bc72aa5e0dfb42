//! Output formatters for screening reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{CandidateOutcome, ScreeningReport};
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering screening reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and per-candidate cards
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Coordinates the individual formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_fit_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            50..=59 => ("BELOW AVG", Color::Red),
            _ => ("POOR", Color::BrightRed),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_candidate(&self, outcome: &CandidateOutcome) -> String {
        let mut output = String::new();
        output.push_str(&self.format_header(&outcome.file, 2));

        let resume = match &outcome.resume {
            Some(resume) => resume,
            None => {
                let message = outcome.error.as_deref().unwrap_or("unknown error");
                output.push_str(&format!(
                    "  ✗ {}\n",
                    self.colorize(message, Color::Red)
                ));
                return output;
            }
        };

        let name = if resume.personal_info.name.is_empty() {
            "(name not found)"
        } else {
            &resume.personal_info.name
        };
        output.push_str(&format!(
            "  {} <{}>\n",
            self.colorize(name, Color::White),
            resume.personal_info.email
        ));

        if let Some(phone) = &resume.personal_info.phone {
            output.push_str(&format!("  Phone: {}\n", phone));
        }
        if let Some(location) = &resume.personal_info.location {
            output.push_str(&format!("  Location: {}\n", location));
        }

        output.push_str(&format!(
            "  Culture fit: {}% {}\n",
            resume.culture_fit_score,
            self.format_fit_badge(resume.culture_fit_score)
        ));

        if !resume.skills.is_empty() {
            output.push_str(&format!(
                "  Technical skills: {}\n",
                self.colorize(&resume.skills.join(", "), Color::Cyan)
            ));
        }
        if !resume.soft_skills.is_empty() {
            output.push_str(&format!(
                "  Soft skills: {}\n",
                self.colorize(&resume.soft_skills.join(", "), Color::Green)
            ));
        }

        output.push_str(&format!(
            "  Experience: {} years\n",
            resume.experience.years
        ));
        for role in &resume.experience.roles {
            output.push_str(&format!("    • {}\n", role.trim()));
        }
        if self.detailed && !resume.experience.companies.is_empty() {
            output.push_str(&format!(
                "  Companies: {}\n",
                resume.experience.companies.join(", ")
            ));
        }

        for entry in &resume.education {
            let year = entry
                .year
                .as_ref()
                .map(|y| format!(" ({})", y))
                .unwrap_or_default();
            output.push_str(&format!(
                "  Education: {} - {}{}\n",
                entry.degree, entry.institution, year
            ));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("CANDIDATE SCREENING REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Documents: {} ({} parsed, {} failed) | {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.document_count,
            report.metadata.parsed_count,
            report.metadata.failed_count,
            report.metadata.processing_time_ms
        ));

        for outcome in &report.candidates {
            output.push_str(&self.format_candidate(outcome));
        }

        output.push_str(&format!(
            "\nGenerated by Resume Screener v{}\n",
            report.metadata.screener_version
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Candidate Screening Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Documents:** {} ({} parsed, {} failed)\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.document_count,
                report.metadata.parsed_count,
                report.metadata.failed_count
            ));
        }

        for outcome in &report.candidates {
            output.push_str(&format!("## `{}`\n\n", outcome.file));

            let resume = match &outcome.resume {
                Some(resume) => resume,
                None => {
                    output.push_str(&format!(
                        "⚠️ Failed: {}\n\n",
                        outcome.error.as_deref().unwrap_or("unknown error")
                    ));
                    continue;
                }
            };

            output.push_str(&format!(
                "**{}** <{}>\n\n",
                if resume.personal_info.name.is_empty() {
                    "(name not found)"
                } else {
                    &resume.personal_info.name
                },
                resume.personal_info.email
            ));

            output.push_str("| Field | Value |\n");
            output.push_str("|-------|-------|\n");
            if let Some(phone) = &resume.personal_info.phone {
                output.push_str(&format!("| Phone | {} |\n", phone));
            }
            if let Some(location) = &resume.personal_info.location {
                output.push_str(&format!("| Location | {} |\n", location));
            }
            output.push_str(&format!(
                "| Culture fit | {}% |\n",
                resume.culture_fit_score
            ));
            output.push_str(&format!(
                "| Technical skills | {} |\n",
                resume.skills.join(", ")
            ));
            output.push_str(&format!(
                "| Soft skills | {} |\n",
                resume.soft_skills.join(", ")
            ));
            output.push_str(&format!(
                "| Experience | {} years |\n\n",
                resume.experience.years
            ));

            if !resume.education.is_empty() {
                output.push_str("### Education\n\n");
                for entry in &resume.education {
                    let year = entry
                        .year
                        .as_ref()
                        .map(|y| format!(" ({})", y))
                        .unwrap_or_default();
                    output.push_str(&format!("- {} - {}{}\n", entry.degree, entry.institution, year));
                }
                output.push('\n');
            }
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Resume Screener v{}*\n",
                report.metadata.screener_version
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &ScreeningReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    match format {
        OutputFormat::Console => format!("{}_screening.txt", base_name),
        OutputFormat::Json => format!("{}_screening.json", base_name),
        OutputFormat::Markdown => format!("{}_screening.md", base_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ResumeParser;

    fn sample_report() -> ScreeningReport {
        let parser = ResumeParser::new();
        let text = "Jane Doe jane.doe@example.com. 5 years of experience as Senior Engineer at Acme Corp. Strong communication skills.";
        ScreeningReport::new(
            vec![
                CandidateOutcome::parsed(Path::new("jane.txt"), parser.parse(text)),
                CandidateOutcome::failed(Path::new("broken.xyz"), "Unsupported file".to_string()),
            ],
            7,
        )
    }

    #[test]
    fn test_console_format_shows_candidates_and_failures() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.contains("Jane Doe"));
        assert!(output.contains("jane.doe@example.com"));
        assert!(output.contains("Culture fit:"));
        assert!(output.contains("broken.xyz"));
        assert!(output.contains("Unsupported file"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&sample_report()).unwrap();

        let parsed: ScreeningReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.metadata.document_count, 2);
        assert_eq!(parsed.candidates.len(), 2);
        assert!(parsed.candidates[0].is_parsed());
        assert!(!parsed.candidates[1].is_parsed());
    }

    #[test]
    fn test_markdown_format_has_per_file_sections() {
        let formatter = MarkdownFormatter::new(true);
        let output = formatter.format_report(&sample_report()).unwrap();

        assert!(output.starts_with("# Candidate Screening Report"));
        assert!(output.contains("## `jane.txt`"));
        assert!(output.contains("## `broken.xyz`"));
        assert!(output.contains("| Culture fit |"));
    }

    #[test]
    fn test_suggested_filenames() {
        assert_eq!(
            suggest_filename(&OutputFormat::Json, "resumes/jane.pdf"),
            "jane_screening.json"
        );
        assert_eq!(
            suggest_filename(&OutputFormat::Markdown, "jane.txt"),
            "jane_screening.md"
        );
    }
}

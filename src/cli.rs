//! CLI interface for the resume screener

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Heuristic resume parsing and candidate screening tool")]
#[command(
    long_about = "Extract structured candidate facts (contact info, technical skills, experience, education, culture fit) from resume files"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse resume files into structured candidate records
    Parse {
        /// Resume files to parse (PDF, TXT, MD)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format: console, json, markdown (defaults to the
        /// configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Include company lists in the console output
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert!(parse_output_format("console").is_ok());
        assert!(parse_output_format("MD").is_ok());
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_extension_validation() {
        assert!(validate_file_extension(Path::new("resume.pdf"), &["pdf", "txt"]).is_ok());
        assert!(validate_file_extension(Path::new("resume.TXT"), &["pdf", "txt"]).is_ok());
        assert!(validate_file_extension(Path::new("resume.docx"), &["pdf", "txt"]).is_err());
        assert!(validate_file_extension(Path::new("resume"), &["pdf", "txt"]).is_err());
    }
}

//! Resume screener: heuristic resume parsing and candidate screening tool

use clap::Parser;
use log::{error, info};
use resume_screener::cli::{self, Cli, Commands, ConfigAction};
use resume_screener::config::Config;
use resume_screener::error::{Result, ResumeScreenerError};
use resume_screener::input::file_detector::SUPPORTED_EXTENSIONS;
use resume_screener::input::manager::BatchProcessor;
use resume_screener::output::formatter::{save_report_to_file, ReportGenerator};
use resume_screener::output::report::ScreeningReport;
use resume_screener::parser::ResumeParser;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Parse {
            files,
            output,
            save,
            detailed,
        } => {
            for file in &files {
                cli::validate_file_extension(file, SUPPORTED_EXTENSIONS).map_err(|e| {
                    ResumeScreenerError::InvalidInput(format!("{}: {}", file.display(), e))
                })?;
            }

            let output_format = match &output {
                Some(format) => {
                    cli::parse_output_format(format).map_err(ResumeScreenerError::InvalidInput)?
                }
                None => config.output.format.clone(),
            };

            info!("Screening {} resume file(s)", files.len());

            let parser = ResumeParser::with_custom_skills(config.parsing.additional_skills.clone());
            let processor = BatchProcessor::new(parser);

            let started = Instant::now();
            let outcomes = processor.process(&files).await;
            let report = ScreeningReport::new(outcomes, started.elapsed().as_millis() as u64);

            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            if report.metadata.failed_count > 0 {
                info!(
                    "{} of {} document(s) could not be converted to text",
                    report.metadata.failed_count, report.metadata.document_count
                );
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current Configuration\n");
                println!(
                    "Additional skills: {}",
                    if config.parsing.additional_skills.is_empty() {
                        "(none)".to_string()
                    } else {
                        config.parsing.additional_skills.join(", ")
                    }
                );
                println!("Output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Color output: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

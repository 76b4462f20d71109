mod analyze;
mod cli;
mod config;
mod error;
mod input;
mod logging;
mod report;
mod types;

use crate::error::ScorerError;
use crate::report::OutputFormat;
use crate::types::config::ScorerConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn input_paths(
    cfg: &ScorerConfig,
    resume: Option<PathBuf>,
    job: Option<PathBuf>,
) -> (PathBuf, PathBuf) {
    (
        resume.unwrap_or_else(|| PathBuf::from(&cfg.input.resume)),
        job.unwrap_or_else(|| PathBuf::from(&cfg.input.job_description)),
    )
}

fn run() -> Result<i32, ScorerError> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    info!(version = env!("CARGO_PKG_VERSION"), "ats-scorer starting");

    let cfg = config::load_config(&cli.config_dir)?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let (resume_path, job_path) = input_paths(&cfg, cmd.resume, cmd.job);
            let min_score = cmd.min_score.or(cfg.report.min_score);
            if let Some(min_score) = min_score {
                if !(0.0..=100.0).contains(&min_score) {
                    return Err(ScorerError::InputValidation(format!(
                        "--min-score must be between 0 and 100 (found {min_score})"
                    )));
                }
            }

            let documents = input::read_documents(&resume_path, &job_path)?;
            let score_report = analyze::analyze(&documents.resume, &documents.job_description);
            if score_report.keywords.total == 0 {
                if cmd.strict {
                    return Err(ScorerError::InputValidation(format!(
                        "job description contains no keywords: {}",
                        job_path.display()
                    )));
                }
                warn!(path = %job_path.display(), "job description contains no keywords");
            }
            if score_report.has_blocking() {
                warn!("report contains blocking findings; run `lint` for details");
            }
            let output_format = match cmd.format {
                Some(cli::ReportFormat::Text) => OutputFormat::Text,
                Some(cli::ReportFormat::Md) => OutputFormat::Md,
                Some(cli::ReportFormat::Json) => OutputFormat::Json,
                None => OutputFormat::from(cfg.report.format),
            };
            let rendered = report::render(&score_report, output_format, cfg.report.precision)?;
            println!("{rendered}");

            match min_score {
                Some(min_score) if score_report.result.total_score < min_score => {
                    eprintln!(
                        "score {:.2}% is below the minimum of {:.2}%",
                        score_report.result.total_score, min_score
                    );
                    Ok(exit_code::BLOCKING)
                }
                _ => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Prompt => {
            println!("ATS Resume Scorer");
            println!(
                "Current Working Directory: {}",
                std::env::current_dir()?.display()
            );

            let stdin = std::io::stdin();
            let mut reader = stdin.lock();
            let mut writer = std::io::stdout();
            let resume_path =
                input::prompt_path(&mut reader, &mut writer, "resume", &cfg.input.resume)?;
            let job_path = input::prompt_path(
                &mut reader,
                &mut writer,
                "job description",
                &cfg.input.job_description,
            )?;

            let documents = input::read_documents(&resume_path, &job_path)?;
            let score_report = analyze::analyze(&documents.resume, &documents.job_description);
            let rendered =
                report::render(&score_report, OutputFormat::Text, cfg.report.precision)?;
            println!("\n{rendered}");
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Lint(cmd) => {
            let (resume_path, job_path) = input_paths(&cfg, cmd.resume, cmd.job);
            let documents = input::read_documents(&resume_path, &job_path)?;
            let findings =
                analyze::lint::lint_findings(&documents.resume, &documents.job_description);

            if findings.is_empty() {
                println!("lint: no findings");
                return Ok(exit_code::SUCCESS);
            }

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }

            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Keywords(cmd) => {
            let job_path = cmd
                .job
                .unwrap_or_else(|| PathBuf::from(&cfg.input.job_description));
            let job_description = input::read_job_description(&job_path)?;
            let keywords = analyze::keywords::extract_keywords(&job_description);

            println!("keywords: {}", keywords.len());
            for keyword in &keywords {
                println!("- {keyword}");
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ats-scorer",
    version,
    about = "Score a resume against a job description like an applicant tracking system"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding ats.toml and .ats/local.toml
    #[arg(long, global = true, default_value = ".")]
    pub config_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a resume file against a job description file
    Score(ScoreCommand),
    /// Ask for both file paths interactively, then score
    Prompt,
    /// List findings that lower the score
    Lint(LintCommand),
    /// Print the keywords extracted from a job description
    Keywords(KeywordsCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Md,
    Json,
}

#[derive(Args)]
pub struct ScoreCommand {
    #[arg(long)]
    pub resume: Option<PathBuf>,
    #[arg(long)]
    pub job: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Exit with code 2 when the total score is below this percentage
    #[arg(long)]
    pub min_score: Option<f64>,
    /// Reject job descriptions that yield no keywords
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct LintCommand {
    #[arg(long)]
    pub resume: Option<PathBuf>,
    #[arg(long)]
    pub job: Option<PathBuf>,
}

#[derive(Args)]
pub struct KeywordsCommand {
    #[arg(long)]
    pub job: Option<PathBuf>,
}

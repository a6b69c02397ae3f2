use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::recommend;

#[derive(Parser)]
#[command(
    name = "seo-audit",
    version,
    about = "Weighted-checklist SEO audit: grade a page against a weighted criteria catalog and export a scored report"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a completed responses file and render the audit report
    Score(ScoreCommand),
    /// Answer every criterion at the prompt, then score and report
    Interactive(InteractiveCommand),
    /// Write a responses-file skeleton to fill in and score later
    Template(TemplateCommand),
    /// Show the criteria catalog with weights
    Catalog(CatalogCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Md,
    Json,
    Text,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum CatalogFormat {
    Md,
    Json,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Responses file with a judgment for every criterion
    #[arg(long)]
    pub responses: PathBuf,

    /// Catalog file replacing the built-in criteria catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Request an LLM recommendation narrative for the report
    #[arg(long)]
    pub recommend: bool,

    /// API key for the recommendation endpoint (falls back to OPENAI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, default_value = recommend::DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, default_value = recommend::DEFAULT_BASE_URL)]
    pub base_url: String,
}

#[derive(Args)]
pub struct InteractiveCommand {
    /// Catalog file replacing the built-in criteria catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Page URL or label recorded in the report
    #[arg(long)]
    pub subject: Option<String>,

    /// Also write the collected judgments as a responses file
    #[arg(long)]
    pub save_responses: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Request an LLM recommendation narrative for the report
    #[arg(long)]
    pub recommend: bool,

    /// API key for the recommendation endpoint (falls back to OPENAI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    #[arg(long, default_value = recommend::DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, default_value = recommend::DEFAULT_BASE_URL)]
    pub base_url: String,
}

#[derive(Args)]
pub struct TemplateCommand {
    /// Catalog file replacing the built-in criteria catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Write the skeleton here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct CatalogCommand {
    /// Catalog file replacing the built-in criteria catalog
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: CatalogFormat,

    /// Include each criterion's guidance text
    #[arg(long)]
    pub guidance: bool,
}

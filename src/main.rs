mod catalog;
mod cli;
mod collect;
mod error;
mod recommend;
mod report;
mod scoring;
mod telemetry;
mod template;
mod types;

use crate::error::AuditError;
use clap::Parser;
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const DEGRADED: i32 = 1;
    pub const INCOMPLETE: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, AuditError> {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet);
    match cli.command {
        cli::Commands::Score(cmd) => run_score(cmd),
        cli::Commands::Interactive(cmd) => run_interactive(cmd),
        cli::Commands::Template(cmd) => run_template(cmd),
        cli::Commands::Catalog(cmd) => run_catalog(cmd),
    }
}

fn run_score(cmd: cli::ScoreCommand) -> Result<i32, AuditError> {
    let catalog = catalog::load(cmd.catalog.as_deref())?;
    let file = collect::load(&cmd.responses, &catalog)?;

    let scorecard = match scoring::score_catalog(&catalog, &file.judgments) {
        Ok(scorecard) => scorecard,
        Err(AuditError::IncompleteResponses(missing)) => {
            eprintln!("responses file is missing {} judgment(s):", missing.len());
            for path in &missing {
                eprintln!("  - {path}");
            }
            return Ok(exit_code::INCOMPLETE);
        }
        Err(e) => return Err(e),
    };

    let narrative = if cmd.recommend {
        let config = recommend::RecommendConfig {
            api_key: recommend::resolve_api_key(cmd.api_key, false),
            model: cmd.model,
            base_url: cmd.base_url,
        };
        recommend::generate(&config, &catalog, &file.judgments)
    } else {
        recommend::Narrative::Skipped
    };

    let rank = scoring::rank::estimate_rank(scorecard.overall);
    let document = report::assemble(
        &catalog,
        &file.judgments,
        &scorecard,
        rank,
        &narrative,
        file.audit.subject,
    );
    let output_format = match cmd.format {
        cli::ReportFormat::Md => report::OutputFormat::Md,
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Text => report::OutputFormat::Text,
    };
    let rendered = report::render(&document, output_format)?;
    emit(&rendered, cmd.output.as_deref(), "report")?;

    if matches!(narrative, recommend::Narrative::Unavailable(_)) {
        Ok(exit_code::DEGRADED)
    } else {
        Ok(exit_code::SUCCESS)
    }
}

fn run_interactive(cmd: cli::InteractiveCommand) -> Result<i32, AuditError> {
    let catalog = catalog::load(cmd.catalog.as_deref())?;
    let judgments = collect::interactive::collect(&catalog)?;

    if let Some(path) = &cmd.save_responses {
        let file = collect::ResponsesFile {
            audit: collect::AuditMeta {
                subject: cmd.subject.clone(),
            },
            judgments: judgments.clone(),
        };
        collect::save(path, &file)?;
        println!("responses written to {}", path.display());
    }

    // The prompt loop answers every criterion, so scoring cannot come back
    // incomplete here.
    let scorecard = scoring::score_catalog(&catalog, &judgments)?;

    let narrative = if cmd.recommend {
        let config = recommend::RecommendConfig {
            api_key: recommend::resolve_api_key(cmd.api_key, true),
            model: cmd.model,
            base_url: cmd.base_url,
        };
        recommend::generate(&config, &catalog, &judgments)
    } else {
        recommend::Narrative::Skipped
    };

    let rank = scoring::rank::estimate_rank(scorecard.overall);
    let document = report::assemble(
        &catalog,
        &judgments,
        &scorecard,
        rank,
        &narrative,
        cmd.subject,
    );
    let output_format = match cmd.format {
        cli::ReportFormat::Md => report::OutputFormat::Md,
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Text => report::OutputFormat::Text,
    };
    let rendered = report::render(&document, output_format)?;
    emit(&rendered, cmd.output.as_deref(), "report")?;

    if matches!(narrative, recommend::Narrative::Unavailable(_)) {
        Ok(exit_code::DEGRADED)
    } else {
        Ok(exit_code::SUCCESS)
    }
}

fn run_template(cmd: cli::TemplateCommand) -> Result<i32, AuditError> {
    let catalog = catalog::load(cmd.catalog.as_deref())?;
    let skeleton = template::responses_template(&catalog);
    emit(&skeleton, cmd.output.as_deref(), "template")?;
    Ok(exit_code::SUCCESS)
}

fn run_catalog(cmd: cli::CatalogCommand) -> Result<i32, AuditError> {
    let catalog = catalog::load(cmd.catalog.as_deref())?;
    let document = catalog::overview(&catalog, cmd.guidance);
    let output_format = match cmd.format {
        cli::CatalogFormat::Md => report::OutputFormat::Md,
        cli::CatalogFormat::Json => report::OutputFormat::Json,
    };
    let rendered = report::render(&document, output_format)?;
    println!("{rendered}");
    Ok(exit_code::SUCCESS)
}

fn emit(content: &str, output: Option<&Path>, label: &str) -> Result<(), AuditError> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            println!("{} written to {}", label, path.display());
        }
        None => println!("{content}"),
    }
    Ok(())
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

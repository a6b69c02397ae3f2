pub mod json;
pub mod md;
pub mod text;

use crate::error::{AuditError, Result};
use crate::recommend::{Narrative, UNAVAILABLE_PLACEHOLDER};
use crate::types::catalog::Catalog;
use crate::types::document::{Document, Section};
use crate::types::response::{Judgment, ResponseSet};
use crate::types::scoring::Scorecard;
use chrono::Utc;

pub const REPORT_TITLE: &str = "SEO Audit Results";

const RANKING_CAVEATS: [&str; 6] = [
    "Competition in your specific niche",
    "Search intent alignment",
    "Domain authority",
    "Freshness of content",
    "User engagement metrics",
    "Regular algorithm updates",
];

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Md,
    Json,
    Text,
}

/// Builds the report document: scores, ranking estimate, recommendations,
/// then the full graded checklist. Pure assembly, no I/O.
pub fn assemble(
    catalog: &Catalog,
    responses: &ResponseSet,
    scorecard: &Scorecard,
    rank: &str,
    narrative: &Narrative,
    subject: Option<String>,
) -> Document {
    let mut sections = vec![
        scores_section(scorecard),
        ranking_section(scorecard, rank),
        recommendations_section(narrative),
    ];
    sections.extend(checklist_sections(catalog, responses));

    Document {
        title: REPORT_TITLE.to_string(),
        subject,
        generated_at: Utc::now(),
        sections,
    }
}

pub fn render(document: &Document, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Md => Ok(md::to_markdown(document)),
        OutputFormat::Json => json::to_json(document).map_err(AuditError::Json),
        OutputFormat::Text => Ok(text::to_text(document)),
    }
}

fn scores_section(scorecard: &Scorecard) -> Section {
    let mut items: Vec<String> = scorecard
        .buckets
        .iter()
        .map(|bucket| format!("{}: {:.2}/10", bucket.name, bucket.score))
        .collect();
    items.push(format!("Overall: {:.2}/10", scorecard.overall));
    Section::new(1, "Scores").list(items)
}

fn ranking_section(scorecard: &Scorecard, rank: &str) -> Section {
    Section::new(1, "Estimated Ranking")
        .paragraph(format!(
            "Based on the overall score of {:.2}/10, the page might rank in positions: {rank}",
            scorecard.overall
        ))
        .paragraph(
            "Note: this ranking estimate is a rough approximation based on the audit score. \
             Actual rankings can vary significantly due to factors such as:",
        )
        .list(RANKING_CAVEATS.iter().map(|s| s.to_string()).collect())
        .paragraph("Use this estimate as a general guide rather than a guaranteed outcome.")
}

/// A generated narrative is embedded verbatim, split on blank lines. Any
/// unavailable or empty narrative becomes the placeholder; the section is
/// never blank.
fn recommendations_section(narrative: &Narrative) -> Section {
    let mut section = Section::new(1, "Recommendations");
    if let Narrative::Generated(text) = narrative {
        for chunk in text.split("\n\n").filter(|chunk| !chunk.trim().is_empty()) {
            section = section.paragraph(chunk.trim_end());
        }
    }
    if section.blocks.is_empty() {
        section = section.paragraph(UNAVAILABLE_PLACEHOLDER);
    }
    section
}

fn checklist_sections(catalog: &Catalog, responses: &ResponseSet) -> Vec<Section> {
    let mut sections = vec![Section::new(1, "Graded Checklist")];
    for bucket in &catalog.buckets {
        sections.push(Section::new(2, bucket.name.as_str()));
        for factor in &bucket.factors {
            let items = factor
                .criteria
                .iter()
                .map(|criterion| {
                    let verdict =
                        match responses.get(&bucket.name, &factor.name, &criterion.name) {
                            Some(Judgment::Yes) => "Yes",
                            Some(Judgment::No) => "No",
                            Some(Judgment::NotApplicable) => "n/a (excluded from scoring)",
                            None => "unanswered",
                        };
                    format!("{}: {}", criterion.name, verdict)
                })
                .collect();
            sections.push(Section::new(3, factor.name.as_str()).list(items));
        }
    }
    sections
}

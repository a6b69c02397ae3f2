use crate::error::{AuditError, Result};
use crate::types::catalog::Catalog;
use crate::types::document::{Document, Section};
use chrono::Utc;
use std::path::Path;

/// Catalog compiled into the binary, used whenever no override is given.
const DEFAULT_CATALOG: &str = include_str!("default.toml");

/// Loads and validates the criteria catalog. With no path the built-in
/// catalog is used; an override file replaces it wholesale.
pub fn load(path: Option<&Path>) -> Result<Catalog> {
    let catalog: Catalog = match path {
        Some(path) => {
            if !path.exists() {
                return Err(AuditError::PathNotFound(path.display().to_string()));
            }
            let content = std::fs::read_to_string(path)?;
            let catalog = toml::from_str(&content)
                .map_err(|e| AuditError::CatalogParse(format!("{}: {}", path.display(), e)))?;
            tracing::debug!("using catalog override from {}", path.display());
            catalog
        }
        None => toml::from_str(DEFAULT_CATALOG)
            .map_err(|e| AuditError::CatalogParse(format!("built-in catalog: {e}")))?,
    };
    catalog.validate()?;
    tracing::debug!(
        "catalog loaded: {} buckets, {} factors, {} criteria",
        catalog.buckets.len(),
        catalog.factor_count(),
        catalog.criterion_count()
    );
    Ok(catalog)
}

/// Catalog listing as a report document, for the inspection subcommand.
/// Factors become nested sections; each criterion is listed with its weight,
/// optionally followed by its guidance text.
pub fn overview(catalog: &Catalog, include_guidance: bool) -> Document {
    let mut sections = Vec::new();
    for bucket in &catalog.buckets {
        sections.push(
            Section::new(1, bucket.name.as_str())
                .paragraph(format!("Bucket weight: {}", bucket.weight)),
        );
        for factor in &bucket.factors {
            let items = factor
                .criteria
                .iter()
                .map(|criterion| {
                    if include_guidance && !criterion.guidance.is_empty() {
                        format!(
                            "{} (weight {}): {}",
                            criterion.name, criterion.weight, criterion.guidance
                        )
                    } else {
                        format!("{} (weight {})", criterion.name, criterion.weight)
                    }
                })
                .collect();
            sections.push(Section::new(2, factor.name.as_str()).list(items));
        }
    }
    Document {
        title: "Criteria Catalog".to_string(),
        subject: None,
        generated_at: Utc::now(),
        sections,
    }
}

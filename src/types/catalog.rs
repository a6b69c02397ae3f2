use crate::error::AuditError;
use serde::Deserialize;
use std::collections::HashSet;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// The graded criteria taxonomy: weighted buckets of factors, each factor a
/// group of weighted criteria. Loaded once at startup, read-only afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    #[serde(rename = "bucket")]
    pub buckets: Vec<Bucket>,
}

/// Top-level weighted grouping (On-Page, Off-Page, Technical). Bucket
/// weights across the catalog must sum to 1.0.
#[derive(Debug, Clone, Deserialize)]
pub struct Bucket {
    pub name: String,
    pub weight: f64,
    #[serde(rename = "factor")]
    pub factors: Vec<Factor>,
}

/// Named group of related criteria within a bucket (e.g. "H1 Tag").
#[derive(Debug, Clone, Deserialize)]
pub struct Factor {
    pub name: String,
    #[serde(rename = "criterion")]
    pub criteria: Vec<Criterion>,
}

/// Single gradable statement. The weight is an importance coefficient that
/// is only ever summed, never normalized against a global maximum.
#[derive(Debug, Clone, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub weight: f64,
    #[serde(default)]
    pub guidance: String,
}

impl Catalog {
    pub fn factor_count(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.factors.len()).sum()
    }

    pub fn criterion_count(&self) -> usize {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.factors.iter())
            .map(|factor| factor.criteria.len())
            .sum()
    }

    /// Catalog-level invariants, checked once at load. Violations are fatal
    /// at startup and can never surface mid-scoring.
    pub fn validate(&self) -> Result<(), AuditError> {
        if self.buckets.is_empty() {
            return Err(AuditError::CatalogInvalid(
                "catalog defines no buckets".to_string(),
            ));
        }

        let mut bucket_names = HashSet::new();
        for bucket in &self.buckets {
            if !bucket_names.insert(bucket.name.as_str()) {
                return Err(AuditError::CatalogInvalid(format!(
                    "duplicate bucket name: {}",
                    bucket.name
                )));
            }
            if !(0.0..=1.0).contains(&bucket.weight) {
                return Err(AuditError::CatalogInvalid(format!(
                    "bucket '{}' weight must be between 0.0 and 1.0 (found {})",
                    bucket.name, bucket.weight
                )));
            }
            if bucket.factors.is_empty() {
                return Err(AuditError::CatalogInvalid(format!(
                    "bucket '{}' has no factors",
                    bucket.name
                )));
            }

            let mut factor_names = HashSet::new();
            for factor in &bucket.factors {
                if !factor_names.insert(factor.name.as_str()) {
                    return Err(AuditError::CatalogInvalid(format!(
                        "bucket '{}' contains duplicate factor: {}",
                        bucket.name, factor.name
                    )));
                }
                if factor.criteria.is_empty() {
                    return Err(AuditError::CatalogInvalid(format!(
                        "factor '{} / {}' has no criteria",
                        bucket.name, factor.name
                    )));
                }

                let mut criterion_names = HashSet::new();
                for criterion in &factor.criteria {
                    if !criterion_names.insert(criterion.name.as_str()) {
                        return Err(AuditError::CatalogInvalid(format!(
                            "factor '{} / {}' contains duplicate criterion: {}",
                            bucket.name, factor.name, criterion.name
                        )));
                    }
                    if criterion.weight <= 0.0 {
                        return Err(AuditError::CatalogInvalid(format!(
                            "criterion '{} / {} / {}' weight must be positive (found {})",
                            bucket.name, factor.name, criterion.name, criterion.weight
                        )));
                    }
                }
            }
        }

        let weight_sum: f64 = self.buckets.iter().map(|bucket| bucket.weight).sum();
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(AuditError::CatalogInvalid(format!(
                "bucket weights must sum to 1.0 (found {:.6})",
                weight_sum
            )));
        }

        Ok(())
    }
}

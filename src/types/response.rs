use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::catalog::Catalog;

/// Verdict assigned to one criterion during an audit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Judgment {
    #[serde(rename = "yes")]
    Yes,
    #[serde(rename = "no")]
    No,
    #[serde(rename = "na", alias = "n/a", alias = "not-applicable")]
    NotApplicable,
}

impl Judgment {
    pub fn as_str(self) -> &'static str {
        match self {
            Judgment::Yes => "yes",
            Judgment::No => "no",
            Judgment::NotApplicable => "na",
        }
    }
}

/// One session's judgments, keyed bucket → factor → criterion. Created
/// empty, filled by the input collaborator (recording twice overwrites, no
/// deletion), then handed to the scorer by reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseSet {
    judgments: BTreeMap<String, BTreeMap<String, BTreeMap<String, Judgment>>>,
}

pub(crate) fn criterion_path(bucket: &str, factor: &str, criterion: &str) -> String {
    format!("{bucket} / {factor} / {criterion}")
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, bucket: &str, factor: &str, criterion: &str) -> Option<Judgment> {
        self.judgments
            .get(bucket)?
            .get(factor)?
            .get(criterion)
            .copied()
    }

    pub fn record(&mut self, bucket: &str, factor: &str, criterion: &str, judgment: Judgment) {
        self.judgments
            .entry(bucket.to_string())
            .or_default()
            .entry(factor.to_string())
            .or_default()
            .insert(criterion.to_string(), judgment);
    }

    pub fn len(&self) -> usize {
        self.judgments
            .values()
            .flat_map(|factors| factors.values())
            .map(|criteria| criteria.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Catalog criteria this set has no judgment for, in catalog order.
    pub fn missing_paths(&self, catalog: &Catalog) -> Vec<String> {
        let mut missing = Vec::new();
        for bucket in &catalog.buckets {
            for factor in &bucket.factors {
                for criterion in &factor.criteria {
                    if self.get(&bucket.name, &factor.name, &criterion.name).is_none() {
                        missing.push(criterion_path(&bucket.name, &factor.name, &criterion.name));
                    }
                }
            }
        }
        missing
    }

    /// Paths recorded in this set that the catalog does not define
    /// (typos in a responses file, or a stale file against a newer catalog).
    pub fn unknown_paths(&self, catalog: &Catalog) -> Vec<String> {
        let mut unknown = Vec::new();
        for (bucket_name, factors) in &self.judgments {
            let bucket = catalog
                .buckets
                .iter()
                .find(|bucket| bucket.name == *bucket_name);
            for (factor_name, criteria) in factors {
                let factor = bucket.and_then(|bucket| {
                    bucket
                        .factors
                        .iter()
                        .find(|factor| factor.name == *factor_name)
                });
                for criterion_name in criteria.keys() {
                    let known = factor
                        .map(|factor| {
                            factor
                                .criteria
                                .iter()
                                .any(|criterion| criterion.name == *criterion_name)
                        })
                        .unwrap_or(false);
                    if !known {
                        unknown.push(criterion_path(bucket_name, factor_name, criterion_name));
                    }
                }
            }
        }
        unknown
    }
}

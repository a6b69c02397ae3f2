pub mod rank;

use crate::error::{AuditError, Result};
use crate::types::catalog::{Catalog, Criterion};
use crate::types::response::{Judgment, ResponseSet};
use crate::types::scoring::{BucketScore, FactorScore, Scorecard};

/// Weighted tally for one factor. Earned sums the weights of criteria judged
/// Yes; eligible sums the weights of criteria judged Yes or No. Criteria
/// marked not applicable count toward neither.
fn tally(criteria: &[Criterion], judgments: &[Judgment]) -> (f64, f64) {
    let mut earned = 0.0;
    let mut eligible = 0.0;
    for (criterion, judgment) in criteria.iter().zip(judgments) {
        match judgment {
            Judgment::Yes => {
                earned += criterion.weight;
                eligible += criterion.weight;
            }
            Judgment::No => eligible += criterion.weight,
            Judgment::NotApplicable => {}
        }
    }
    (earned, eligible)
}

fn project(earned: f64, eligible: f64) -> f64 {
    if eligible > 0.0 {
        earned / eligible * 10.0
    } else {
        0.0
    }
}

/// Factor score on the 0..=10 scale. A factor whose criteria were all marked
/// not applicable scores zero, it is not dropped from its bucket.
pub fn score_factor(criteria: &[Criterion], judgments: &[Judgment]) -> f64 {
    let (earned, eligible) = tally(criteria, judgments);
    project(earned, eligible)
}

/// Bucket score: the unweighted mean of its factor scores. Criterion weights
/// already shaped each factor score, so factors count equally here.
pub fn score_bucket(factor_scores: &[f64]) -> f64 {
    if factor_scores.is_empty() {
        return 0.0;
    }
    factor_scores.iter().sum::<f64>() / factor_scores.len() as f64
}

/// Overall score: bucket scores blended by bucket weight.
pub fn score_overall(weighted: &[(f64, f64)]) -> f64 {
    weighted.iter().map(|(score, weight)| score * weight).sum()
}

/// Scores one complete response set against the catalog. A response set with
/// any unanswered criterion is rejected whole; no partial scorecard is
/// produced.
pub fn score_catalog(catalog: &Catalog, responses: &ResponseSet) -> Result<Scorecard> {
    let missing = responses.missing_paths(catalog);
    if !missing.is_empty() {
        return Err(AuditError::IncompleteResponses(missing));
    }

    let mut buckets = Vec::with_capacity(catalog.buckets.len());
    for bucket in &catalog.buckets {
        let mut factors = Vec::with_capacity(bucket.factors.len());
        for factor in &bucket.factors {
            let judgments: Vec<Judgment> = factor
                .criteria
                .iter()
                .filter_map(|criterion| {
                    responses.get(&bucket.name, &factor.name, &criterion.name)
                })
                .collect();
            let (earned, eligible) = tally(&factor.criteria, &judgments);
            factors.push(FactorScore {
                name: factor.name.clone(),
                earned,
                eligible,
                score: project(earned, eligible),
            });
        }
        let factor_scores: Vec<f64> = factors.iter().map(|factor| factor.score).collect();
        buckets.push(BucketScore {
            name: bucket.name.clone(),
            weight: bucket.weight,
            score: score_bucket(&factor_scores),
            factors,
        });
    }

    let weighted: Vec<(f64, f64)> = buckets
        .iter()
        .map(|bucket| (bucket.score, bucket.weight))
        .collect();
    let overall = score_overall(&weighted);
    tracing::debug!("scored {} buckets, overall {:.2}", buckets.len(), overall);
    Ok(Scorecard { buckets, overall })
}

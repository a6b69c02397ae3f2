use serde::Serialize;

/// Score for one factor: the weighted Yes share of its applicable criteria,
/// projected onto a 0..=10 scale.
#[derive(Debug, Clone, Serialize)]
pub struct FactorScore {
    pub name: String,
    /// Sum of weights of criteria judged Yes.
    pub earned: f64,
    /// Sum of weights of criteria judged Yes or No. Zero when every
    /// criterion was marked not applicable.
    pub eligible: f64,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BucketScore {
    pub name: String,
    pub weight: f64,
    pub score: f64,
    pub factors: Vec<FactorScore>,
}

/// Full scoring outcome for one complete response set.
#[derive(Debug, Clone, Serialize)]
pub struct Scorecard {
    pub buckets: Vec<BucketScore>,
    pub overall: f64,
}

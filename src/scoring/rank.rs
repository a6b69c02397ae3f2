/// Overall-score thresholds mapped to the search positions a page at that
/// score plausibly lands in. Checked top down; each threshold is inclusive.
pub const RANK_TIERS: [(f64, &str); 8] = [
    (9.5, "1-3"),
    (9.0, "4-6"),
    (8.5, "7-10"),
    (8.0, "11-15"),
    (7.5, "16-20"),
    (7.0, "21-30"),
    (6.5, "31-50"),
    (6.0, "51-100"),
];

pub const RANK_FLOOR: &str = "100+";

pub fn estimate_rank(overall: f64) -> &'static str {
    for (threshold, positions) in RANK_TIERS {
        if overall >= threshold {
            return positions;
        }
    }
    RANK_FLOOR
}

use std::collections::HashSet;

use mindcare_core::models::assessment::{AssessmentResult, Subscale};
use mindcare_core::models::recommendation::Recommendation;

use crate::catalog;

/// Raw score at which a subscale earns its own recommendations.
///
/// Applied to every subscale alike; it does not follow the per-subscale
/// Moderate bands (anxiety is already Moderate at 10).
pub const ELEVATED_SCORE: u32 = 14;

pub const PER_SUBSCALE_LIMIT: usize = 2;
pub const GENERAL_LIMIT: usize = 2;
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Pick recommendations for a scored assessment.
///
/// Takes up to two entries for each subscale at or above
/// [`ELEVATED_SCORE`], then two general entries, drops repeated titles
/// (first occurrence wins) and keeps at most [`MAX_RECOMMENDATIONS`].
pub fn select_recommendations(result: &AssessmentResult) -> Vec<Recommendation> {
    let elevated = Subscale::ALL
        .into_iter()
        .filter(|s| result.get(*s).score >= ELEVATED_SCORE)
        .flat_map(|s| catalog::domain(s).iter().take(PER_SUBSCALE_LIMIT));

    let general = catalog::general().iter().take(GENERAL_LIMIT);

    dedup_by_title(elevated.chain(general).cloned())
}

/// General entries only, for sessions closed without an assessment.
pub fn general_recommendations() -> Vec<Recommendation> {
    dedup_by_title(catalog::general().iter().take(GENERAL_LIMIT).cloned())
}

/// Quick list for a subscale name. Unknown names get an empty list.
pub fn recommendations_for(name: &str) -> Vec<Recommendation> {
    name.parse::<Subscale>()
        .map(|s| catalog::quick_list(s).to_vec())
        .unwrap_or_default()
}

fn dedup_by_title(items: impl Iterator<Item = Recommendation>) -> Vec<Recommendation> {
    let mut seen = HashSet::new();
    items
        .filter(|rec| seen.insert(rec.title.clone()))
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

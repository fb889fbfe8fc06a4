use crate::core::scoring::match_score;
use crate::models::{Profile, ScoredCandidate};

/// Number of recommendations returned when the caller does not ask for a
/// specific count.
pub const DEFAULT_LIMIT: usize = 30;

/// Pair every candidate with its match score against `reference`, keeping the
/// provider's order.
pub fn score_candidates(reference: &Profile, candidates: Vec<Profile>) -> Vec<ScoredCandidate> {
    candidates
        .into_iter()
        .map(|profile| {
            let score = match_score(reference, &profile);
            ScoredCandidate { profile, score }
        })
        .collect()
}

/// Rank candidates by descending match score and keep the best `limit`.
///
/// The sort must stay stable: candidates with equal scores keep the order the
/// provider returned them in. A `limit` of 0 yields an empty list; a `limit`
/// past the end yields everything.
pub fn rank_candidates(reference: &Profile, candidates: Vec<Profile>, limit: usize) -> Vec<Profile> {
    let mut scored = score_candidates(reference, candidates);
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored.into_iter().map(|c| c.profile).collect()
}

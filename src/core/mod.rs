// Recommendation pipeline exports
pub mod exclusions;
pub mod ranking;
pub mod recommender;
pub mod scoring;

pub use exclusions::gather_exclusions;
pub use ranking::{rank_candidates, score_candidates, DEFAULT_LIMIT};
pub use recommender::Recommender;
pub use scoring::{match_score, shared_interests, INTEREST_CATEGORIES};

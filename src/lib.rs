//! Amora Recs - Profile recommendation service for the Amora dating app
//!
//! This library implements the recommendation pipeline: exclusion of
//! previously-interacted users, interest-overlap scoring of the remaining
//! candidates, and ranked truncation to the requested count.

pub mod config;
pub mod core;
pub mod models;
pub mod outcome;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{match_score, rank_candidates, Recommender, DEFAULT_LIMIT};
pub use crate::models::{Gender, Profile, ScoredCandidate};
pub use crate::outcome::{ServiceError, ServiceResult};
pub use crate::services::{ActivityStore, ConnectionRegistry, ProfileApiClient, ProfileProvider};

use std::sync::Arc;

use uuid::Uuid;

use crate::core::exclusions::gather_exclusions;
use crate::core::ranking::rank_candidates;
use crate::models::Profile;
use crate::outcome::{ServiceError, ServiceResult};
use crate::services::{ActivityStore, ProfileProvider};

/// Recommendation orchestrator.
///
/// Sequences the pipeline: validate the user id, fetch the reference profile,
/// build the exclusion set, fetch the filtered candidate pool, rank by shared
/// interests. Each step runs only if the previous one succeeded; nothing is
/// retried and nothing is cached between calls.
pub struct Recommender<P, A> {
    profiles: Arc<P>,
    activity: Arc<A>,
}

impl<P, A> Recommender<P, A>
where
    P: ProfileProvider,
    A: ActivityStore,
{
    pub fn new(profiles: Arc<P>, activity: Arc<A>) -> Self {
        Self { profiles, activity }
    }

    /// Produce up to `limit` recommendations for `user_id`, best match first.
    pub async fn recommendations(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> ServiceResult<Vec<Profile>> {
        if user_id.is_nil() {
            tracing::error!("recommendations: userID is empty");
            return Err(ServiceError::validation("userID is empty"));
        }

        let reference = match self.profiles.profile_by_id(user_id).await {
            Ok(profile) => profile,
            Err(e) if e.is_not_found() => {
                tracing::error!("recommendations: user {} is not found", user_id);
                return Err(ServiceError::not_found(format!(
                    "User with {user_id} is not found"
                )));
            }
            Err(e) => {
                tracing::error!("recommendations: error getting profile for {}: {}", user_id, e);
                return Err(ServiceError::internal("Error while getting profile"));
            }
        };

        let exclusions = gather_exclusions(self.activity.as_ref(), user_id).await?;

        // Candidate-retrieval failures surface exactly as the provider
        // reported them.
        let candidates = self
            .profiles
            .profiles_by_filter(&exclusions, reference.gender)
            .await?;

        let ranked = rank_candidates(&reference, candidates, limit);
        tracing::info!(
            "recommendations: returning {} profiles for {}",
            ranked.len(),
            user_id
        );
        Ok(ranked)
    }
}

impl<P, A> Clone for Recommender<P, A> {
    fn clone(&self) -> Self {
        Self {
            profiles: Arc::clone(&self.profiles),
            activity: Arc::clone(&self.activity),
        }
    }
}

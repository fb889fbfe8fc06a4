use std::collections::HashSet;

use uuid::Uuid;

use crate::outcome::{ServiceError, ServiceResult};
use crate::services::ActivityStore;

/// Build the exclusion set for `user_id`: everyone they liked, everyone they
/// disliked, everyone who liked them, and the user themself.
///
/// The three lookups share no state and are only merged, so they are issued
/// concurrently. A missing activity record on any of them wins over every
/// other failure.
pub async fn gather_exclusions<A>(store: &A, user_id: Uuid) -> ServiceResult<HashSet<Uuid>>
where
    A: ActivityStore + ?Sized,
{
    if user_id.is_nil() {
        tracing::error!("gather_exclusions: userID is empty");
        return Err(ServiceError::validation("userID is empty"));
    }

    let (liked, disliked, liked_by) = tokio::join!(
        store.liked_users(user_id),
        store.disliked_users(user_id),
        store.liked_by_users(user_id),
    );

    if [&liked, &disliked, &liked_by]
        .iter()
        .any(|lookup| matches!(lookup, Err(e) if e.is_not_found()))
    {
        tracing::error!("gather_exclusions: activity record for {} is not found", user_id);
        return Err(ServiceError::not_found(format!(
            "Activity with {user_id} is not found"
        )));
    }

    match (liked, disliked, liked_by) {
        (Ok(liked), Ok(disliked), Ok(liked_by)) => {
            let mut exclusions = liked;
            exclusions.extend(disliked);
            exclusions.extend(liked_by);
            exclusions.insert(user_id);
            Ok(exclusions)
        }
        _ => {
            tracing::error!("gather_exclusions: error retrieving activity data for {}", user_id);
            Err(ServiceError::internal("Error while getting user activities"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityKind;
    use async_trait::async_trait;

    /// Store fake returning canned envelopes per relation.
    struct CannedStore {
        liked: ServiceResult<HashSet<Uuid>>,
        disliked: ServiceResult<HashSet<Uuid>>,
        liked_by: ServiceResult<HashSet<Uuid>>,
    }

    impl CannedStore {
        fn ok(liked: &[Uuid], disliked: &[Uuid], liked_by: &[Uuid]) -> Self {
            Self {
                liked: Ok(liked.iter().copied().collect()),
                disliked: Ok(disliked.iter().copied().collect()),
                liked_by: Ok(liked_by.iter().copied().collect()),
            }
        }
    }

    #[async_trait]
    impl ActivityStore for CannedStore {
        async fn create_record(&self, _user_id: Uuid) -> ServiceResult<()> {
            unimplemented!("not used by gather_exclusions")
        }

        async fn liked_users(&self, _user_id: Uuid) -> ServiceResult<HashSet<Uuid>> {
            self.liked.clone()
        }

        async fn disliked_users(&self, _user_id: Uuid) -> ServiceResult<HashSet<Uuid>> {
            self.disliked.clone()
        }

        async fn liked_by_users(&self, _user_id: Uuid) -> ServiceResult<HashSet<Uuid>> {
            self.liked_by.clone()
        }

        async fn record_activity(
            &self,
            _user_id: Uuid,
            _target_id: Uuid,
            _kind: ActivityKind,
        ) -> ServiceResult<()> {
            unimplemented!("not used by gather_exclusions")
        }

        async fn add_like_from(&self, _user_id: Uuid, _liker_id: Uuid) -> ServiceResult<()> {
            unimplemented!("not used by gather_exclusions")
        }

        async fn remove_like_from(&self, _user_id: Uuid, _liker_id: Uuid) -> ServiceResult<()> {
            unimplemented!("not used by gather_exclusions")
        }
    }

    #[tokio::test]
    async fn test_union_includes_self_and_collapses_duplicates() {
        let user = Uuid::new_v4();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        // `a` shows up both as liked and as liked-by.
        let store = CannedStore::ok(&[a], &[b], &[a]);

        let exclusions = gather_exclusions(&store, user).await.unwrap();

        assert_eq!(exclusions.len(), 3);
        assert!(exclusions.contains(&user));
        assert!(exclusions.contains(&a));
        assert!(exclusions.contains(&b));
    }

    #[tokio::test]
    async fn test_nil_user_is_rejected_before_any_lookup() {
        let store = CannedStore {
            liked: Err(ServiceError::internal("must not be consulted")),
            disliked: Err(ServiceError::internal("must not be consulted")),
            liked_by: Err(ServiceError::internal("must not be consulted")),
        };

        let err = gather_exclusions(&store, Uuid::nil()).await.unwrap_err();
        assert_eq!(err.status, 400);
    }

    #[tokio::test]
    async fn test_missing_record_maps_to_not_found() {
        let user = Uuid::new_v4();
        let store = CannedStore {
            liked: Ok(HashSet::new()),
            disliked: Err(ServiceError::not_found("no record")),
            liked_by: Ok(HashSet::new()),
        };

        let err = gather_exclusions(&store, user).await.unwrap_err();
        assert_eq!(err.status, 404);
        assert_eq!(err.message, format!("Activity with {user} is not found"));
    }

    #[tokio::test]
    async fn test_not_found_wins_over_other_failures() {
        let user = Uuid::new_v4();
        let store = CannedStore {
            liked: Err(ServiceError::internal("connection reset")),
            disliked: Err(ServiceError::not_found("no record")),
            liked_by: Err(ServiceError::internal("connection reset")),
        };

        let err = gather_exclusions(&store, user).await.unwrap_err();
        assert_eq!(err.status, 404);
    }

    #[tokio::test]
    async fn test_other_failures_map_to_internal() {
        let user = Uuid::new_v4();
        let store = CannedStore {
            liked: Ok(HashSet::new()),
            disliked: Ok(HashSet::new()),
            liked_by: Err(ServiceError::internal("connection reset")),
        };

        let err = gather_exclusions(&store, user).await.unwrap_err();
        assert_eq!(err.status, 500);
        assert_eq!(err.message, "Error while getting user activities");
    }
}

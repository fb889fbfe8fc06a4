use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Query parameters for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsQuery {
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: Uuid,
    #[serde(default = "default_count_of_users")]
    #[serde(alias = "count_of_users", rename = "countOfUsers")]
    pub count_of_users: usize,
}

fn default_count_of_users() -> usize {
    crate::core::DEFAULT_LIMIT
}

/// Request to create an empty activity record for a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: Uuid,
}

/// Request to record a like or dislike
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordActivityRequest {
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: Uuid,
    #[serde(alias = "target_user_id", rename = "targetUserId")]
    pub target_user_id: Uuid,
    pub kind: String,
}

/// Request to add or remove an incoming like
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeRequest {
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: Uuid,
    #[serde(alias = "target_user_id", rename = "targetUserId")]
    pub target_user_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_of_users_defaults() {
        let query: RecommendationsQuery =
            serde_json::from_str(r#"{"userId": "f3a1c6a2-8d6f-4f3e-8f0b-2a9d1e5c4b77"}"#).unwrap();
        assert_eq!(query.count_of_users, 30);
    }
}

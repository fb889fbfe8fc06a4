use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Gender, Profile};
use crate::outcome::{ServiceError, ServiceResult};

/// Read-only access to the profile service.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Fetch a single profile by account id.
    async fn profile_by_id(&self, user_id: Uuid) -> ServiceResult<Profile>;

    /// Fetch every profile whose account id is not in `excluded`, narrowed by
    /// the provider to the gender complementary to `gender`. The narrowing is
    /// an optimization hint; returned profiles are not re-checked here.
    async fn profiles_by_filter(
        &self,
        excluded: &HashSet<Uuid>,
        gender: Gender,
    ) -> ServiceResult<Vec<Profile>>;
}

/// HTTP client for the profile API
///
/// Handles all communication with the profile service:
/// - Fetching the requesting user's own profile
/// - Querying the candidate pool with an exclusion list
pub struct ProfileApiClient {
    base_url: String,
    client: Client,
}

#[derive(Serialize)]
struct FilterRequest<'a> {
    #[serde(rename = "excludedIds")]
    excluded_ids: &'a HashSet<Uuid>,
    gender: Gender,
}

impl ProfileApiClient {
    /// Create a client with the default 30 second request timeout.
    pub fn new(base_url: String) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, client }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl ProfileProvider for ProfileApiClient {
    async fn profile_by_id(&self, user_id: Uuid) -> ServiceResult<Profile> {
        if user_id.is_nil() {
            return Err(ServiceError::validation("userID can not be empty"));
        }

        let url = self.endpoint(&format!("profiles/{user_id}"));
        tracing::debug!("Fetching profile from: {}", url);

        let response = self.client.get(&url).send().await.map_err(transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!("No profile found for user {}", user_id);
            return Err(ServiceError::not_found("No profile found for this userID"));
        }
        if !status.is_success() {
            tracing::error!("Failed to retrieve profile for {}: {}", user_id, status);
            return Err(ServiceError::new(status.as_u16(), "Failed to retrieve profile"));
        }

        response
            .json::<Profile>()
            .await
            .map_err(|e| ServiceError::internal(format!("Failed to parse profile: {e}")))
    }

    async fn profiles_by_filter(
        &self,
        excluded: &HashSet<Uuid>,
        gender: Gender,
    ) -> ServiceResult<Vec<Profile>> {
        if excluded.is_empty() {
            return Err(ServiceError::validation("excluded ids can not be empty"));
        }

        let url = self.endpoint("profiles/filter");
        let body = FilterRequest {
            excluded_ids: excluded,
            gender,
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("Failed to retrieve profiles: {}", status);
            return Err(ServiceError::new(status.as_u16(), "Failed to retrieve profiles"));
        }

        let profiles = response
            .json::<Vec<Profile>>()
            .await
            .map_err(|e| ServiceError::internal(format!("Failed to parse profiles: {e}")))?;

        tracing::debug!("Retrieved {} candidate profiles", profiles.len());
        Ok(profiles)
    }
}

fn transport_error(err: reqwest::Error) -> ServiceError {
    ServiceError::internal(format!("HTTP request failed: {err}"))
}

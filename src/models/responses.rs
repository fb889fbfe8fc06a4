use serde::{Deserialize, Serialize};

/// Error response
///
/// Problem-details style body: the envelope's status code and message are
/// carried through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Acknowledgement for activity-store mutations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityAckResponse {
    pub success: bool,
}

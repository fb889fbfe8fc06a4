//! Result envelope shared across every component boundary.
//!
//! Every collaborator surfaces failures as a single status-carrying
//! [`ServiceError`]; success is the plain `Ok(T)` half of [`ServiceResult`].
//! The orchestrator forwards provider status/message pairs verbatim, so the
//! envelope keeps both fields public.

use thiserror::Error;

/// The one failure type crossing component boundaries.
///
/// `status` mirrors an HTTP status code and `message` is the human-readable
/// reason; both are preserved untouched so upstream errors pass through.
#[derive(Debug, Clone, Error)]
#[error("[{status}] {message}")]
pub struct ServiceError {
    pub status: u16,
    pub message: String,
}

impl ServiceError {
    /// Build an error with an explicit status code.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400 Bad Request — invalid or missing input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    /// 404 Not Found.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    /// 409 Conflict — duplicate/missing relation the caller must distinguish.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, message)
    }

    /// 500 Internal Server Error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(500, message)
    }

    /// Whether this error carries the 404 status.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Whether the status is in the client-error range [400, 500).
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Whether the status is in the server-error range [500, 600).
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

/// Result alias carrying [`ServiceError`] as the failure type.
pub type ServiceResult<T> = Result<T, ServiceError>;

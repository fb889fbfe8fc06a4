use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Responder};

use crate::core::Recommender;
use crate::models::{ErrorResponse, HealthResponse, RecommendationsQuery};
use crate::outcome::ServiceError;
use crate::services::{ConnectionRegistry, PgActivityStore, ProfileApiClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender<ProfileApiClient, PgActivityStore>>,
    pub store: Arc<PgActivityStore>,
    pub registry: ConnectionRegistry,
}

/// Configure recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations", web::get().to(get_recommendations));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommendations endpoint
///
/// GET /api/v1/recommendations?userId={uuid}&countOfUsers={n}
///
/// Returns the ordered profile list on success. A missing user or activity
/// record is a 404; any other failure keeps the envelope's status code and
/// message.
async fn get_recommendations(
    state: web::Data<AppState>,
    query: web::Query<RecommendationsQuery>,
) -> impl Responder {
    let user_id = query.user_id;

    if user_id.is_nil() {
        tracing::info!("Rejected recommendations request with empty userId");
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "invalid_user".to_string(),
            message: "UserID cannot be empty".to_string(),
            status_code: 400,
        });
    }

    tracing::info!(
        "Recommendations requested for user {} (countOfUsers: {})",
        user_id,
        query.count_of_users
    );

    match state
        .recommender
        .recommendations(user_id, query.count_of_users)
        .await
    {
        Ok(profiles) => HttpResponse::Ok().json(profiles),
        Err(e) if e.is_not_found() => {
            tracing::error!("Recommendations for {} failed: {}", user_id, e);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "not_found".to_string(),
                message: e.message,
                status_code: 404,
            })
        }
        Err(e) => {
            tracing::error!("Recommendations for {} failed: {}", user_id, e);
            problem_response(e)
        }
    }
}

/// Translate an envelope failure into a response with the stored status code.
pub(super) fn problem_response(err: ServiceError) -> HttpResponse {
    let status =
        StatusCode::from_u16(err.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(ErrorResponse {
        error: "request_failed".to_string(),
        message: err.message,
        status_code: err.status,
    })
}

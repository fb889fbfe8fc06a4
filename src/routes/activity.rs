use actix_web::{web, HttpResponse, Responder};

use crate::models::{
    ActivityAckResponse, ActivityKind, CreateRecordRequest, ErrorResponse, LikeRequest,
    RecordActivityRequest,
};
use crate::outcome::ServiceResult;
use crate::routes::recommendations::{problem_response, AppState};
use crate::services::ActivityStore;

/// Configure activity-store routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/activity/records", web::post().to(create_activity_record))
        .route("/activity", web::post().to(record_activity))
        .route("/likes", web::post().to(add_like))
        .route("/likes", web::delete().to(remove_like));
}

/// Create an empty activity record for a new user
///
/// POST /api/v1/activity/records
async fn create_activity_record(
    state: web::Data<AppState>,
    req: web::Json<CreateRecordRequest>,
) -> impl Responder {
    ack(state.store.create_record(req.user_id).await)
}

/// Record a like or dislike
///
/// POST /api/v1/activity
///
/// Request body:
/// ```json
/// {
///   "userId": "uuid",
///   "targetUserId": "uuid",
///   "kind": "like|dislike"
/// }
/// ```
async fn record_activity(
    state: web::Data<AppState>,
    req: web::Json<RecordActivityRequest>,
) -> impl Responder {
    let kind = match req.kind.to_lowercase().as_str() {
        "like" => ActivityKind::Like,
        "dislike" => ActivityKind::Dislike,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "invalid_kind".to_string(),
                message: "Activity kind must be one of: like, dislike".to_string(),
                status_code: 400,
            });
        }
    };

    ack(state
        .store
        .record_activity(req.user_id, req.target_user_id, kind)
        .await)
}

/// Record an incoming like and notify the target user
///
/// POST /api/v1/likes
///
/// The like lands on the target's record; every connection the target holds
/// is then told who liked them.
async fn add_like(state: web::Data<AppState>, req: web::Json<LikeRequest>) -> impl Responder {
    match state
        .store
        .add_like_from(req.target_user_id, req.user_id)
        .await
    {
        Ok(()) => {
            state
                .registry
                .notify(req.target_user_id, req.user_id.to_string())
                .await;
            HttpResponse::Ok().json(ActivityAckResponse { success: true })
        }
        Err(e) => {
            tracing::error!(
                "Could not add like {} -> {}: {}",
                req.user_id,
                req.target_user_id,
                e
            );
            problem_response(e)
        }
    }
}

/// Withdraw an incoming like
///
/// DELETE /api/v1/likes
async fn remove_like(state: web::Data<AppState>, req: web::Json<LikeRequest>) -> impl Responder {
    ack(state
        .store
        .remove_like_from(req.target_user_id, req.user_id)
        .await)
}

fn ack(result: ServiceResult<()>) -> HttpResponse {
    match result {
        Ok(()) => HttpResponse::Ok().json(ActivityAckResponse { success: true }),
        Err(e) => problem_response(e),
    }
}

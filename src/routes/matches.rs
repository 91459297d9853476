use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{Recommendation, Recommender};
use crate::models::{
    ErrorResponse, HealthResponse, RecommendResponse, SeekerPreferences, SubmitSeekerRequest,
    SubmitSeekerResponse,
};
use crate::services::{NotificationInbox, PostRepository, ProfileStore};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<PostRepository>,
    pub inbox: Arc<NotificationInbox>,
    pub profiles: Arc<ProfileStore>,
    pub recommender: Recommender,
}

/// Configure health and match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/recommend", web::post().to(recommend))
        .route("/seekers", web::post().to(submit_seeker));
}

pub(crate) fn error_response(status: u16, error: &str, message: String) -> HttpResponse {
    let body = ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status,
    };
    match status {
        400 => HttpResponse::BadRequest().json(body),
        404 => HttpResponse::NotFound().json(body),
        409 => HttpResponse::Conflict().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let posts = match state.repository.list().await {
        Ok(posts) => Some(posts.len()),
        Err(e) => {
            tracing::warn!("Health check could not read posts: {}", e);
            None
        }
    };

    let status = if posts.is_some() { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        posts,
    })
}

fn to_response(result: Recommendation) -> RecommendResponse {
    RecommendResponse {
        matches: result.posts,
        total_candidates: result.total_candidates,
        used_fallback: result.used_fallback,
    }
}

/// Recommend posts for a set of preferences without recording the seeker
///
/// POST /api/v1/matches/recommend
///
/// Request body (every field optional):
/// ```json
/// {
///   "location": "Toul Kork",
///   "budget": "300",
///   "lifestyleDescription": "quiet clean student"
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    req: web::Json<SeekerPreferences>,
) -> impl Responder {
    let posts = match state.repository.list().await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!("Failed to load posts: {}", e);
            return error_response(500, "Failed to load posts", e.to_string());
        }
    };

    let result = state.recommender.recommend(&req, &posts);

    tracing::info!(
        "Returning {} recommendations (from {} posts, fallback: {})",
        result.posts.len(),
        result.total_candidates,
        result.used_fallback
    );

    HttpResponse::Ok().json(to_response(result))
}

/// Record a seeker submission and return their recommendations
///
/// POST /api/v1/seekers
async fn submit_seeker(
    state: web::Data<AppState>,
    req: web::Json<SubmitSeekerRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for seeker submission: {:?}", errors);
        return error_response(400, "Validation failed", errors.to_string());
    }

    let preferences = SeekerPreferences::from(req.into_inner());

    let record = match state.repository.record_seeker(preferences).await {
        Ok(record) => record,
        Err(e) => {
            tracing::error!("Failed to record seeker: {}", e);
            return error_response(500, "Failed to record seeker", e.to_string());
        }
    };

    let posts = match state.repository.list().await {
        Ok(posts) => posts,
        Err(e) => {
            tracing::error!("Failed to load posts: {}", e);
            return error_response(500, "Failed to load posts", e.to_string());
        }
    };

    let result = state.recommender.recommend(&record.preferences, &posts);

    tracing::info!(
        "Seeker {} submitted, {} recommendations (fallback: {})",
        record.id,
        result.posts.len(),
        result.used_fallback
    );

    HttpResponse::Ok().json(SubmitSeekerResponse {
        seeker_id: record.id,
        recommendations: to_response(result),
    })
}

use serde::{Deserialize, Serialize};
use crate::models::domain::{Notification, ScoredPost};

/// Response for the recommendation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub matches: Vec<ScoredPost>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "usedFallback")]
    pub used_fallback: bool,
}

/// Response for a seeker submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitSeekerResponse {
    #[serde(rename = "seekerId")]
    pub seeker_id: i64,
    #[serde(flatten)]
    pub recommendations: RecommendResponse,
}

/// Notification list with unread counter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
    pub unread: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub posts: Option<usize>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

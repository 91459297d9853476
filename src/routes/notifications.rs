use actix_web::{web, HttpResponse, Responder};
use crate::models::{NotificationStatus, NotificationsResponse, RespondRequest};
use crate::routes::matches::{error_response, AppState};
use crate::services::InboxError;

/// Configure owner notification routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/notifications", web::get().to(list_notifications))
        .route("/notifications/{id}/open", web::post().to(open_notification))
        .route("/notifications/{id}/respond", web::post().to(respond_notification));
}

fn inbox_failure(err: InboxError) -> HttpResponse {
    match err {
        InboxError::NotFound(id) => {
            error_response(404, "Notification not found", format!("No notification with id {}", id))
        }
        InboxError::Storage(e) => {
            tracing::error!("Notification storage failure: {}", e);
            error_response(500, "Failed to access notifications", e.to_string())
        }
    }
}

async fn list_notifications(state: web::Data<AppState>) -> impl Responder {
    match state.inbox.list().await {
        Ok(notifications) => {
            let unread = notifications.iter().filter(|n| !n.read).count();
            HttpResponse::Ok().json(NotificationsResponse { notifications, unread })
        }
        Err(e) => inbox_failure(e),
    }
}

async fn open_notification(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    match state.inbox.open(path.into_inner()).await {
        Ok(notification) => HttpResponse::Ok().json(notification),
        Err(e) => inbox_failure(e),
    }
}

/// Accept or reject a booking request
///
/// POST /api/v1/notifications/{id}/respond
///
/// Request body:
/// ```json
/// { "status": "accepted" }
/// ```
async fn respond_notification(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: web::Json<RespondRequest>,
) -> impl Responder {
    if req.status == NotificationStatus::Pending {
        return error_response(
            400,
            "Invalid status",
            "Status must be one of: accepted, rejected".to_string(),
        );
    }

    match state.inbox.respond(path.into_inner(), req.status).await {
        Ok(notification) => HttpResponse::Ok().json(notification),
        Err(e) => inbox_failure(e),
    }
}

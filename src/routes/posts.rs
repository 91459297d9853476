use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::PostDraft;
use crate::routes::matches::{error_response, AppState};
use crate::services::RepositoryError;

/// Configure post management routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/posts", web::get().to(list_posts))
        .route("/posts", web::post().to(create_post))
        .route("/posts/{id}", web::get().to(get_post))
        .route("/posts/{id}", web::put().to(update_post))
        .route("/posts/{id}", web::delete().to(delete_post));
}

fn repository_failure(action: &str, err: RepositoryError) -> HttpResponse {
    match err {
        RepositoryError::NotFound(id) => {
            error_response(404, "Post not found", format!("No post with id {}", id))
        }
        RepositoryError::Storage(e) => {
            tracing::error!("Failed to {}: {}", action, e);
            error_response(500, &format!("Failed to {}", action), e.to_string())
        }
        err @ RepositoryError::IdsExhausted(_) => {
            tracing::error!("Failed to {}: {}", action, err);
            error_response(500, &format!("Failed to {}", action), err.to_string())
        }
    }
}

async fn list_posts(state: web::Data<AppState>) -> impl Responder {
    match state.repository.list().await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(e) => repository_failure("list posts", e),
    }
}

async fn get_post(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    match state.repository.get(path.into_inner()).await {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(e) => repository_failure("load post", e),
    }
}

/// Create post endpoint
///
/// POST /api/v1/posts
///
/// Request body:
/// ```json
/// {
///   "title": "Quiet room near RUPP",
///   "location": "Toul Kork",
///   "numberOfMembers": 2,
///   "pricePerPerson": "150",
///   "description": "Looking for a tidy student",
///   "amenities": ["WiFi"],
///   "lifestylePreferences": "Quiet,Clean"
/// }
/// ```
async fn create_post(
    state: web::Data<AppState>,
    req: web::Json<PostDraft>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_post request: {:?}", errors);
        return error_response(400, "Validation failed", errors.to_string());
    }

    match state.repository.create(req.into_inner()).await {
        Ok(post) => HttpResponse::Created().json(post),
        Err(e) => repository_failure("create post", e),
    }
}

async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    req: web::Json<PostDraft>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for update_post request: {:?}", errors);
        return error_response(400, "Validation failed", errors.to_string());
    }

    match state.repository.update(path.into_inner(), req.into_inner()).await {
        Ok(post) => HttpResponse::Ok().json(post),
        Err(e) => repository_failure("update post", e),
    }
}

async fn delete_post(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    match state.repository.delete(path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => repository_failure("delete post", e),
    }
}

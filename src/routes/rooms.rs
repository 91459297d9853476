use actix_web::{web, HttpResponse, Responder};
use crate::core::{find_listing, sample_listings};
use crate::routes::matches::error_response;

/// Configure sample room browsing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/rooms", web::get().to(list_rooms))
        .route("/rooms/{id}", web::get().to(get_room));
}

async fn list_rooms() -> impl Responder {
    HttpResponse::Ok().json(sample_listings())
}

async fn get_room(path: web::Path<i64>) -> impl Responder {
    let id = path.into_inner();
    match find_listing(id) {
        Some(room) => HttpResponse::Ok().json(room),
        None => error_response(404, "Room not found", format!("No room with id {}", id)),
    }
}

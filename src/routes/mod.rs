// Route exports
pub mod matches;
pub mod notifications;
pub mod posts;
pub mod profile;
pub mod rooms;

use actix_web::web;

pub use matches::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(posts::configure)
            .configure(rooms::configure)
            .configure(notifications::configure)
            .configure(profile::configure),
    );
}

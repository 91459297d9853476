use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{ProfileUpdate, RegisterRequest};
use crate::routes::matches::{error_response, AppState};
use crate::services::ProfileError;

/// Configure registration and profile routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/register", web::post().to(register))
        .route("/profile", web::get().to(get_profile))
        .route("/profile", web::put().to(update_profile))
        .route("/profile", web::delete().to(sign_out));
}

fn profile_failure(err: ProfileError) -> HttpResponse {
    match err {
        ProfileError::NotSignedIn => {
            error_response(404, "Profile not found", "No user is signed in".to_string())
        }
        ProfileError::EmailTaken(email) => error_response(
            409,
            "Email already registered",
            format!("{} is already registered, use a different email", email),
        ),
        ProfileError::Storage(e) => {
            tracing::error!("Profile storage failure: {}", e);
            error_response(500, "Failed to access profile", e.to_string())
        }
    }
}

/// Register endpoint
///
/// POST /api/v1/register
///
/// Request body:
/// ```json
/// {
///   "name": "Dara",
///   "email": "dara@mail.com",
///   "password": "secret1",
///   "confirmPassword": "secret1",
///   "gender": "Male",
///   "telegramId": "123456"
/// }
/// ```
///
/// The password is checked but never stored.
async fn register(
    state: web::Data<AppState>,
    req: web::Json<RegisterRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for register request: {:?}", errors);
        return error_response(400, "Validation failed", errors.to_string());
    }

    match state.profiles.register(req.into_inner()).await {
        Ok(profile) => HttpResponse::Created().json(profile),
        Err(e) => profile_failure(e),
    }
}

async fn get_profile(state: web::Data<AppState>) -> impl Responder {
    match state.profiles.get().await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => profile_failure(e),
    }
}

/// Edit the signed-in user's name, email and gender
///
/// PUT /api/v1/profile
///
/// Request body:
/// ```json
/// { "name": "Dara K.", "email": "dara.k@mail.com", "gender": "Male" }
/// ```
async fn update_profile(
    state: web::Data<AppState>,
    req: web::Json<ProfileUpdate>,
) -> impl Responder {
    let update = req.into_inner().without_blank_email();
    if let Err(errors) = update.validate() {
        tracing::info!("Validation failed for update_profile request: {:?}", errors);
        return error_response(400, "Validation failed", errors.to_string());
    }

    match state.profiles.update(update).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(e) => profile_failure(e),
    }
}

async fn sign_out(state: web::Data<AppState>) -> impl Responder {
    match state.profiles.sign_out().await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => profile_failure(e),
    }
}

use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use roommate_match::config::{LogFormat, LoggingSettings, Settings, StorageBackend};
use roommate_match::core::Recommender;
use roommate_match::routes::{self, AppState};
use roommate_match::services::{
    FileStore, KeyValueStore, MemoryStore, NotificationInbox, PostRepository, ProfileStore,
};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle path parameter errors (non-numeric ids)
pub fn handle_path_error(err: error::PathError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_path".to_string(),
        message: format!("Invalid path parameter: {}", err),
        status_code: 400,
    }
    .into()
}

fn open_store(settings: &Settings) -> std::io::Result<Arc<dyn KeyValueStore>> {
    match settings.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory storage, data will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::File => {
            let store = FileStore::open(&settings.storage.data_dir).map_err(|e| {
                error!("Failed to open data directory {}: {}", settings.storage.data_dir, e);
                std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
            })?;
            info!("Using file storage in {}", store.dir().display());
            Ok(Arc::new(store))
        }
    }
}

fn init_tracing(logging: &LoggingSettings) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    match logging.format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging, which it configures
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Initialize logging, LOG_LEVEL / LOG_FORMAT override the [logging] section
    init_tracing(&settings.logging.with_env_overrides());

    info!("Starting roommate matching service...");
    info!("Configuration loaded successfully");

    let store = open_store(&settings)?;

    let repository = Arc::new(PostRepository::new(store.clone()));
    let inbox = Arc::new(NotificationInbox::new(store.clone()));
    let profiles = Arc::new(ProfileStore::new(store));

    let weights = settings.scoring_weights();
    let options = settings.recommend_options();
    let recommender = Recommender::new(weights, options);

    info!("Recommender initialized with weights: {:?}, options: {:?}", weights, options);

    // Build application state
    let app_state = AppState {
        repository,
        inbox,
        profiles,
        recommender,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::PathConfig::default().error_handler(handle_path_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

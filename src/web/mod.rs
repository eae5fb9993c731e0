//! HTTP surface: REST routes over [`TournamentService`], JSON errors, and upload config.
//!
//! Every error body is `{"error": "..."}`. Storage failures are logged with their cause
//! and answered with a generic message.

mod handlers;
pub mod requests;

use crate::models::TournamentError;
use crate::service::TournamentService;
use actix_cors::Cors;
use actix_multipart::form::{tempfile::TempFileConfig, MultipartFormConfig};
use actix_web::{
    error::InternalError,
    http::StatusCode,
    web::{self, Data},
    HttpResponse, ResponseError,
};
use std::path::PathBuf;

/// Shared application state handed to every handler.
pub type AppState = Data<TournamentService>;

/// JSON error body with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(serde_json::json!({ "error": message.into() }))
}

impl ResponseError for TournamentError {
    fn status_code(&self) -> StatusCode {
        match self {
            TournamentError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            TournamentError::NotFound(_) => StatusCode::NOT_FOUND,
            TournamentError::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            TournamentError::StorageUnavailable(e) => {
                log::error!("Tournament storage failure: {}", e);
                "Tournament data is unavailable".to_string()
            }
            other => other.to_string(),
        };
        error_response(self.status_code(), message)
    }
}

/// Any origin may call the API, so admin pages can be hosted elsewhere.
pub fn cors() -> Cors {
    Cors::permissive()
}

/// Temp-file location for image uploads.
pub fn upload_config(upload_dir: impl Into<PathBuf>) -> TempFileConfig {
    TempFileConfig::default().directory(upload_dir.into())
}

/// Register API routes and extractor error handlers.
/// Callers add the [`AppState`] and [`upload_config`], and wrap the app with [`cors`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let response = error_response(StatusCode::BAD_REQUEST, format!("Invalid JSON body: {err}"));
        InternalError::from_response(err, response).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        let response = error_response(StatusCode::NOT_FOUND, "Team not found");
        InternalError::from_response(err, response).into()
    }))
    .app_data(MultipartFormConfig::default().error_handler(|err, _req| {
        let response =
            error_response(StatusCode::BAD_REQUEST, format!("Invalid image upload: {err}"));
        InternalError::from_response(err, response).into()
    }))
    .service(handlers::api_health)
    .service(handlers::api_tournament)
    .service(handlers::api_teams)
    .service(handlers::api_set_points)
    .service(handlers::api_set_name)
    .service(handlers::api_upload_image)
    .service(handlers::api_reset_points)
    .service(handlers::api_get_quarterfinals)
    .service(handlers::api_set_quarterfinals)
    .service(handlers::api_reset_quarterfinals)
    .service(handlers::api_get_semifinals)
    .service(handlers::api_set_semifinals)
    .service(handlers::api_reset_semifinals)
    .service(handlers::api_get_finals)
    .service(handlers::api_set_finals)
    .service(handlers::api_reset_finals);
}

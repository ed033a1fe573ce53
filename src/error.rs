use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Auth error: {0}")]
    AuthError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Builds the response for a route, hiding server-side failures behind
    /// `public_message`. Client errors keep their own message.
    pub fn respond(&self, public_message: &str) -> HttpResponse {
        match self {
            AppError::ValidationError(_) | AppError::AuthError(_) | AppError::NotFound(_) => {
                self.error_response()
            }
            _ => {
                log::error!("{public_message}: {self}");
                HttpResponse::InternalServerError().json(json!({ "error": public_message }))
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::AuthError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                HttpResponse::build(status).json(json!({ "success": false, "message": msg }))
            }
            AppError::AuthError(msg) => {
                log::warn!("Authentication error: {msg}");
                HttpResponse::build(status).json(json!({ "success": false, "message": msg }))
            }
            AppError::NotFound(msg) => {
                HttpResponse::build(status).json(json!({ "success": false, "message": msg }))
            }
            AppError::DatabaseError(err) => {
                log::error!("Database error: {err}");
                HttpResponse::build(status).json(json!({ "error": "Erreur base de données" }))
            }
            _ => {
                log::error!("Internal error: {self}");
                HttpResponse::build(status).json(json!({ "error": "Erreur serveur" }))
            }
        }
    }
}

pub mod audit;
pub mod auth;
pub mod cheque;
pub mod locality;
pub mod lot;
pub mod message;
pub mod operation;
pub mod producer;
pub mod stock;
pub mod system;
pub mod user;
pub mod validation;

pub use audit::audit_config;
pub use auth::auth_config;
pub use cheque::cheque_config;
pub use locality::locality_config;
pub use lot::lot_config;
pub use message::message_config;
pub use operation::operation_config;
pub use producer::producer_config;
pub use stock::stock_config;
pub use system::system_config;
pub use user::user_config;
pub use validation::validation_config;

use crate::models::FailureResponse;
use actix_web::{HttpResponse, error::InternalError, web};

fn bad_request<E>(err: E, what: &str) -> actix_web::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let response = HttpResponse::BadRequest().json(FailureResponse {
        success: false,
        message: format!("{what} invalide: {err}"),
    });
    InternalError::from_response(err, response).into()
}

/// Malformed bodies, path ids and query strings become 400 JSON replies.
pub fn extractor_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _| bad_request(err, "Corps de requête")))
        .app_data(web::PathConfig::default().error_handler(|err, _| bad_request(err, "Paramètre")))
        .app_data(web::QueryConfig::default().error_handler(|err, _| bad_request(err, "Paramètre")));
}

use crate::error::AppError;
use crate::models::*;
use crate::services::AuthService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Connexion réussie", body = LoginResponse),
        (status = 400, description = "Champs manquants", body = FailureResponse),
        (status = 401, description = "Identifiants invalides", body = FailureResponse),
        (status = 500, description = "Erreur serveur", body = FailureResponse)
    )
)]
pub async fn login(
    auth_service: web::Data<AuthService>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    match auth_service.login(request.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e @ (AppError::ValidationError(_) | AppError::AuthError(_))) => Ok(e.error_response()),
        Err(e) => {
            log::error!("login failed: {e}");
            Ok(HttpResponse::InternalServerError().json(FailureResponse {
                success: false,
                message: "Erreur serveur lors de la connexion".to_string(),
            }))
        }
    }
}

pub fn auth_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/login", web::post().to(login));
}

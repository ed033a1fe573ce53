use crate::database::Actor;
use crate::entities::Validation;
use crate::models::*;
use crate::services::ValidationService;
use actix_web::{HttpResponse, Result, web};

#[utoipa::path(
    get,
    path = "/api/validations",
    tag = "validations",
    responses(
        (status = 200, description = "Demandes de validation, plus récentes d'abord", body = [Validation]),
        (status = 500, description = "Erreur récupération validations", body = ErrorResponse)
    )
)]
pub async fn list_validations(
    validation_service: web::Data<ValidationService>,
) -> Result<HttpResponse> {
    match validation_service.list().await {
        Ok(validations) => Ok(HttpResponse::Ok().json(validations)),
        Err(e) => Ok(e.respond("Erreur récupération validations")),
    }
}

#[utoipa::path(
    post,
    path = "/api/validations",
    tag = "validations",
    request_body = CreateValidationRequest,
    responses(
        (status = 200, description = "Demande créée en attente", body = Validation),
        (status = 400, description = "Corps invalide", body = FailureResponse),
        (status = 500, description = "Erreur création validation", body = ErrorResponse)
    )
)]
pub async fn submit_validation(
    validation_service: web::Data<ValidationService>,
    request: web::Json<CreateValidationRequest>,
) -> Result<HttpResponse> {
    match validation_service.submit(request.into_inner()).await {
        Ok(validation) => Ok(HttpResponse::Ok().json(validation)),
        Err(e) => Ok(e.respond("Erreur création validation")),
    }
}

#[utoipa::path(
    post,
    path = "/api/validations/{id}/approve",
    tag = "validations",
    request_body(content = ApproveRequest, description = "Corps facultatif"),
    params(("id" = i64, Path, description = "Identifiant de la demande")),
    responses(
        (status = 200, description = "Demande approuvée", body = SuccessResponse),
        (status = 500, description = "Erreur validation", body = ErrorResponse)
    )
)]
pub async fn approve(
    validation_service: web::Data<ValidationService>,
    path: web::Path<i64>,
    request: Option<web::Json<ApproveRequest>>,
) -> Result<HttpResponse> {
    let request = request.map(web::Json::into_inner).unwrap_or_default();
    let actor = Actor::resolve([request.utilisateur.as_deref()], "admin");

    match validation_service.approve(path.into_inner(), &actor).await {
        Ok(()) => Ok(HttpResponse::Ok().json(SuccessResponse::ok())),
        Err(e) => Ok(e.respond("Erreur validation")),
    }
}

#[utoipa::path(
    post,
    path = "/api/validations/{id}/reject",
    tag = "validations",
    request_body = RejectRequest,
    params(("id" = i64, Path, description = "Identifiant de la demande")),
    responses(
        (status = 200, description = "Demande rejetée", body = SuccessResponse),
        (status = 500, description = "Erreur rejet", body = ErrorResponse)
    )
)]
pub async fn reject(
    validation_service: web::Data<ValidationService>,
    path: web::Path<i64>,
    request: Option<web::Json<RejectRequest>>,
) -> Result<HttpResponse> {
    let request = request.map(web::Json::into_inner).unwrap_or_default();
    let actor = Actor::resolve([request.utilisateur.as_deref()], "admin");

    match validation_service
        .reject(path.into_inner(), request.reason, &actor)
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(SuccessResponse::ok())),
        Err(e) => Ok(e.respond("Erreur rejet")),
    }
}

pub fn validation_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/validations")
            .route(web::get().to(list_validations))
            .route(web::post().to(submit_validation)),
    )
    .route("/api/validations/{id}/approve", web::post().to(approve))
    .route("/api/validations/{id}/reject", web::post().to(reject));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::mock::{exec, log_text, shared};
    use crate::handlers::extractor_config;
    use crate::services::AuditService;
    use actix_web::{App, http::StatusCode, test};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::{Value, json};

    async fn post(db: MockDatabase, req: test::TestRequest) -> (StatusCode, Value, String) {
        let db = shared(db);
        let service = ValidationService::new(db.clone(), AuditService::new(db.clone()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(extractor_config)
                .configure(validation_config),
        )
        .await;
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        let body = test::read_body_json(resp).await;
        drop(app);
        (status, body, log_text(db))
    }

    #[actix_web::test]
    async fn test_approve_without_body_uses_admin() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // set_config, update, audit insert
            .append_exec_results([exec(1), exec(1), exec(1)]);

        let (status, body, log) =
            post(db, test::TestRequest::post().uri("/api/validations/5/approve")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));
        assert!(log.contains("approved"));
        assert!(log.contains("String(Some(\"admin\"))"));
    }

    #[actix_web::test]
    async fn test_reject_without_body_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([exec(1), exec(0)]);

        let (status, body, log) =
            post(db, test::TestRequest::post().uri("/api/validations/77/reject")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));
        assert!(log.contains("rejected"));
        assert!(!log.contains("audit_log"));
    }

    #[actix_web::test]
    async fn test_reject_with_reason_and_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1), exec(1), exec(1)]);

        let (status, _, log) = post(
            db,
            test::TestRequest::post()
                .uri("/api/validations/5/reject")
                .set_json(json!({ "reason": "pesée à refaire", "utilisateur": "awa" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(log.contains("pesée à refaire"));
        assert!(log.contains("String(Some(\"awa\"))"));
    }
}

use crate::entities::AuditLogEntry;
use crate::models::*;
use crate::services::AuditService;
use actix_web::{HttpResponse, Result, web};

#[utoipa::path(
    get,
    path = "/audit",
    tag = "audit",
    responses(
        (status = 200, description = "Journal d'audit", body = [AuditLogEntry]),
        (status = 500, description = "Erreur récupération audit", body = ErrorResponse)
    )
)]
pub async fn list_audit(audit_service: web::Data<AuditService>) -> Result<HttpResponse> {
    match audit_service.list().await {
        Ok(entries) => Ok(HttpResponse::Ok().json(entries)),
        Err(e) => Ok(e.respond("Erreur récupération audit")),
    }
}

#[utoipa::path(
    get,
    path = "/audit-details",
    tag = "audit",
    responses(
        (status = 200, description = "Audit ligne à ligne (ou journal d'audit à défaut)"),
        (status = 500, description = "Erreur récupération audit details", body = ErrorResponse)
    )
)]
pub async fn list_audit_details(audit_service: web::Data<AuditService>) -> Result<HttpResponse> {
    match audit_service.list_details().await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => Ok(e.respond("Erreur récupération audit details")),
    }
}

pub fn audit_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/audit", web::get().to(list_audit))
        .route("/audit-details", web::get().to(list_audit_details));
}

use crate::models::*;
use crate::services::LocalityService;
use actix_web::{HttpResponse, Result, web};

#[utoipa::path(
    get,
    path = "/regions",
    tag = "localites",
    responses(
        (status = 200, description = "Régions triées par nom", body = [LocalityResponse]),
        (status = 500, description = "Erreur lors du chargement des régions", body = ErrorResponse)
    )
)]
pub async fn regions(locality_service: web::Data<LocalityService>) -> Result<HttpResponse> {
    match locality_service.regions().await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => Ok(e.respond("Erreur lors du chargement des régions")),
    }
}

#[utoipa::path(
    get,
    path = "/departements/{region_id}",
    tag = "localites",
    params(("region_id" = i64, Path, description = "Région parente")),
    responses(
        (status = 200, description = "Départements de la région", body = [LocalityResponse]),
        (status = 500, description = "Erreur lors du chargement des départements", body = ErrorResponse)
    )
)]
pub async fn departements(
    locality_service: web::Data<LocalityService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match locality_service.departements(path.into_inner()).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => Ok(e.respond("Erreur lors du chargement des départements")),
    }
}

#[utoipa::path(
    get,
    path = "/arrondissements/{departement_id}",
    tag = "localites",
    params(("departement_id" = i64, Path, description = "Département parent")),
    responses(
        (status = 200, description = "Arrondissements du département", body = [LocalityResponse]),
        (status = 500, description = "Erreur lors du chargement des arrondissements", body = ErrorResponse)
    )
)]
pub async fn arrondissements(
    locality_service: web::Data<LocalityService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match locality_service.arrondissements(path.into_inner()).await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => Ok(e.respond("Erreur lors du chargement des arrondissements")),
    }
}

pub fn locality_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/regions", web::get().to(regions))
        .route("/departements/{region_id}", web::get().to(departements))
        .route("/arrondissements/{departement_id}", web::get().to(arrondissements));
}

use crate::entities::{Lot, LotStock};
use crate::models::*;
use crate::services::LotService;
use actix_web::{HttpResponse, Result, web};

#[utoipa::path(
    post,
    path = "/lots",
    tag = "lots",
    request_body = CreateLotRequest,
    responses(
        (status = 200, description = "Lot enregistré", body = Lot),
        (status = 400, description = "Corps invalide", body = FailureResponse),
        (status = 500, description = "Erreur création lot", body = ErrorResponse)
    )
)]
pub async fn create_lot(
    lot_service: web::Data<LotService>,
    request: web::Json<CreateLotRequest>,
) -> Result<HttpResponse> {
    match lot_service.create_lot(request.into_inner()).await {
        Ok(lot) => Ok(HttpResponse::Ok().json(lot)),
        Err(e) => Ok(e.respond("Erreur création lot")),
    }
}

#[utoipa::path(
    get,
    path = "/lots",
    tag = "lots",
    responses(
        (status = 200, description = "Lots, du plus récent au plus ancien", body = [Lot]),
        (status = 500, description = "Erreur récupération lots", body = ErrorResponse)
    )
)]
pub async fn list_lots(lot_service: web::Data<LotService>) -> Result<HttpResponse> {
    match lot_service.list_lots().await {
        Ok(lots) => Ok(HttpResponse::Ok().json(lots)),
        Err(e) => Ok(e.respond("Erreur récupération lots")),
    }
}

#[utoipa::path(
    get,
    path = "/lot-stock",
    tag = "lots",
    responses(
        (status = 200, description = "Stock disponible par lot", body = [LotStock]),
        (status = 500, description = "Erreur récupération lot-stock", body = ErrorResponse)
    )
)]
pub async fn lot_stock(lot_service: web::Data<LotService>) -> Result<HttpResponse> {
    match lot_service.stock_levels().await {
        Ok(levels) => Ok(HttpResponse::Ok().json(levels)),
        Err(e) => Ok(e.respond("Erreur récupération lot-stock")),
    }
}

pub fn lot_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/lots")
            .route(web::post().to(create_lot))
            .route(web::get().to(list_lots)),
    )
    .route("/lot-stock", web::get().to(lot_stock));
}

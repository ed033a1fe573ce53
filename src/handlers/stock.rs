use crate::entities::StockMovement;
use crate::models::*;
use crate::services::StockService;
use actix_web::{HttpResponse, Result, web};

#[utoipa::path(
    post,
    path = "/stock",
    tag = "stock",
    request_body = CreateStockMovementRequest,
    responses(
        (status = 200, description = "Mouvement enregistré", body = StockMovement),
        (status = 400, description = "Corps invalide", body = FailureResponse),
        (status = 500, description = "Erreur enregistrement stock", body = ErrorResponse)
    )
)]
pub async fn create_movement(
    stock_service: web::Data<StockService>,
    request: web::Json<CreateStockMovementRequest>,
) -> Result<HttpResponse> {
    match stock_service.record_movement(request.into_inner()).await {
        Ok(movement) => Ok(HttpResponse::Ok().json(movement)),
        Err(e) => Ok(e.respond("Erreur enregistrement stock")),
    }
}

#[utoipa::path(
    get,
    path = "/stock",
    tag = "stock",
    responses(
        (status = 200, description = "Mouvements de stock", body = [StockMovement]),
        (status = 500, description = "Erreur récupération stock", body = ErrorResponse)
    )
)]
pub async fn list_movements(stock_service: web::Data<StockService>) -> Result<HttpResponse> {
    match stock_service.list_movements().await {
        Ok(movements) => Ok(HttpResponse::Ok().json(movements)),
        Err(e) => Ok(e.respond("Erreur récupération stock")),
    }
}

pub fn stock_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/stock")
            .route(web::post().to(create_movement))
            .route(web::get().to(list_movements)),
    );
}

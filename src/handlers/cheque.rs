use crate::entities::Cheque;
use crate::models::*;
use crate::services::ChequeService;
use actix_web::{HttpResponse, Result, web};

#[utoipa::path(
    post,
    path = "/cheques",
    tag = "caisse",
    request_body = CreateChequeRequest,
    responses(
        (status = 200, description = "Chèque enregistré", body = Cheque),
        (status = 400, description = "Corps invalide", body = FailureResponse),
        (status = 500, description = "Erreur enregistrement chèque", body = ErrorResponse)
    )
)]
pub async fn create_cheque(
    cheque_service: web::Data<ChequeService>,
    request: web::Json<CreateChequeRequest>,
) -> Result<HttpResponse> {
    match cheque_service.record_cheque(request.into_inner()).await {
        Ok(cheque) => Ok(HttpResponse::Ok().json(cheque)),
        Err(e) => Ok(e.respond("Erreur enregistrement chèque")),
    }
}

#[utoipa::path(
    get,
    path = "/cheques",
    tag = "caisse",
    responses(
        (status = 200, description = "Chèques enregistrés", body = [Cheque]),
        (status = 500, description = "Erreur récupération chèques", body = ErrorResponse)
    )
)]
pub async fn list_cheques(cheque_service: web::Data<ChequeService>) -> Result<HttpResponse> {
    match cheque_service.list_cheques().await {
        Ok(cheques) => Ok(HttpResponse::Ok().json(cheques)),
        Err(e) => Ok(e.respond("Erreur récupération chèques")),
    }
}

pub fn cheque_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/cheques")
            .route(web::post().to(create_cheque))
            .route(web::get().to(list_cheques)),
    );
}

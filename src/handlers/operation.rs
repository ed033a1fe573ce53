use crate::entities::CashOperation;
use crate::models::*;
use crate::services::LedgerService;
use actix_web::{HttpResponse, Result, web};

#[utoipa::path(
    post,
    path = "/operations",
    tag = "caisse",
    request_body = CreateCashOperationRequest,
    responses(
        (status = 200, description = "Opération enregistrée avec son solde", body = CashOperation),
        (status = 400, description = "Corps invalide", body = FailureResponse),
        (status = 500, description = "Erreur opération caisse", body = ErrorResponse)
    )
)]
pub async fn create_operation(
    ledger_service: web::Data<LedgerService>,
    request: web::Json<CreateCashOperationRequest>,
) -> Result<HttpResponse> {
    match ledger_service.record(request.into_inner()).await {
        Ok(operation) => Ok(HttpResponse::Ok().json(operation)),
        Err(e) => Ok(e.respond("Erreur opération caisse")),
    }
}

#[utoipa::path(
    get,
    path = "/operations",
    tag = "caisse",
    responses(
        (status = 200, description = "Journal de caisse, du plus récent au plus ancien", body = [CashOperation]),
        (status = 500, description = "Erreur récupération opérations caisse", body = ErrorResponse)
    )
)]
pub async fn list_operations(ledger_service: web::Data<LedgerService>) -> Result<HttpResponse> {
    match ledger_service.list().await {
        Ok(operations) => Ok(HttpResponse::Ok().json(operations)),
        Err(e) => Ok(e.respond("Erreur récupération opérations caisse")),
    }
}

pub fn operation_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/operations")
            .route(web::post().to(create_operation))
            .route(web::get().to(list_operations)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::mock::shared;
    use crate::handlers::extractor_config;
    use actix_web::{App, http::StatusCode, test};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::json;

    #[actix_web::test]
    async fn test_unknown_operation_type_is_400() {
        let db = shared(MockDatabase::new(DatabaseBackend::Postgres));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(LedgerService::new(db)))
                .configure(extractor_config)
                .configure(operation_config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/operations")
            .set_json(json!({ "type_operation": "virement", "montant": 1000 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_ledger_failure_is_generic_500() {
        let db = shared(MockDatabase::new(DatabaseBackend::Postgres));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(LedgerService::new(db)))
                .configure(extractor_config)
                .configure(operation_config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/operations")
            .set_json(json!({ "utilisateur": "caissier1", "type_operation": "credit", "montant": "1000" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Erreur opération caisse" }));
    }
}

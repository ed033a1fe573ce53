use crate::database::Actor;
use crate::entities::Producer;
use crate::models::*;
use crate::services::ProducerService;
use actix_web::{HttpResponse, Result, web};

#[utoipa::path(
    post,
    path = "/api/producers",
    tag = "producers",
    request_body = ProducerRequest,
    responses(
        (status = 200, description = "Producteur créé", body = Producer),
        (status = 400, description = "Corps invalide", body = FailureResponse),
        (status = 500, description = "Erreur création producteur", body = ErrorResponse)
    )
)]
pub async fn create_producer(
    producer_service: web::Data<ProducerService>,
    request: web::Json<ProducerRequest>,
) -> Result<HttpResponse> {
    match producer_service.create_producer(request.into_inner()).await {
        Ok(producer) => Ok(HttpResponse::Ok().json(producer)),
        Err(e) => Ok(e.respond("Erreur création producteur")),
    }
}

#[utoipa::path(
    get,
    path = "/api/producers",
    tag = "producers",
    responses(
        (status = 200, description = "Producteurs", body = [Producer]),
        (status = 500, description = "Erreur récupération producteurs", body = ErrorResponse)
    )
)]
pub async fn list_producers(producer_service: web::Data<ProducerService>) -> Result<HttpResponse> {
    match producer_service.list_producers().await {
        Ok(producers) => Ok(HttpResponse::Ok().json(producers)),
        Err(e) => Ok(e.respond("Erreur récupération producteurs")),
    }
}

#[utoipa::path(
    put,
    path = "/api/producers/{id}",
    tag = "producers",
    request_body = ProducerRequest,
    params(("id" = i64, Path, description = "Identifiant du producteur")),
    responses(
        (status = 200, description = "Producteur mis à jour", body = Producer),
        (status = 404, description = "Producteur introuvable", body = FailureResponse),
        (status = 500, description = "Erreur mise à jour producteur", body = ErrorResponse)
    )
)]
pub async fn update_producer(
    producer_service: web::Data<ProducerService>,
    path: web::Path<i64>,
    request: web::Json<ProducerRequest>,
) -> Result<HttpResponse> {
    match producer_service
        .update_producer(path.into_inner(), request.into_inner())
        .await
    {
        Ok(producer) => Ok(HttpResponse::Ok().json(producer)),
        Err(e) => Ok(e.respond("Erreur mise à jour producteur")),
    }
}

#[utoipa::path(
    delete,
    path = "/api/producers/{id}",
    tag = "producers",
    params(
        ("id" = i64, Path, description = "Identifiant du producteur"),
        ActorQuery
    ),
    responses(
        (status = 200, description = "Supprimé (ou déjà absent)", body = SuccessResponse),
        (status = 500, description = "Erreur suppression producteur", body = ErrorResponse)
    )
)]
pub async fn delete_producer(
    producer_service: web::Data<ProducerService>,
    path: web::Path<i64>,
    query: web::Query<ActorQuery>,
) -> Result<HttpResponse> {
    let actor = Actor::resolve([query.utilisateur.as_deref()], "admin");

    match producer_service
        .delete_producer(path.into_inner(), &actor)
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(SuccessResponse::ok())),
        Err(e) => Ok(e.respond("Erreur suppression producteur")),
    }
}

pub fn producer_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/producers")
            .route(web::post().to(create_producer))
            .route(web::get().to(list_producers)),
    )
    .service(
        web::resource("/api/producers/{id}")
            .route(web::put().to(update_producer))
            .route(web::delete().to(delete_producer)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::mock::{exec, shared};
    use crate::handlers::extractor_config;
    use crate::services::AuditService;
    use actix_web::{App, http::StatusCode, test};
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::{Value, json};

    async fn call(db: MockDatabase, req: test::TestRequest) -> (StatusCode, Value) {
        let db = shared(db);
        let service = ProducerService::new(db.clone(), AuditService::new(db));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(extractor_config)
                .configure(producer_config),
        )
        .await;
        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn test_delete_nonexistent_producer_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1), exec(0)]);

        let (status, body) = call(db, test::TestRequest::delete().uri("/api/producers/9999")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));
    }

    #[actix_web::test]
    async fn test_delete_with_invalid_id_is_400() {
        let db = MockDatabase::new(DatabaseBackend::Postgres);

        let (status, body) = call(db, test::TestRequest::delete().uri("/api/producers/abc")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_update_unknown_producer_is_404() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1)])
            .append_query_results([Vec::<crate::entities::producer_entity::Model>::new()]);

        let (status, _) = call(
            db,
            test::TestRequest::put()
                .uri("/api/producers/42")
                .set_json(json!({ "nom_producteur": "GIE Kaffrine" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

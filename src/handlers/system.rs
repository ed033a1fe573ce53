use crate::database::current_database;
use actix_web::{HttpResponse, Result, web};
use sea_orm::DatabaseConnection;
use serde_json::json;

#[utoipa::path(
    get,
    path = "/api/test-db",
    tag = "system",
    responses(
        (status = 200, description = "Connexion établie"),
        (status = 500, description = "Base de données injoignable")
    )
)]
pub async fn test_db(pool: web::Data<DatabaseConnection>) -> Result<HttpResponse> {
    match current_database(&pool).await {
        Ok(database) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "database": database,
            "message": "Connexion établie avec succès"
        }))),
        Err(e) => {
            log::error!("database check failed: {e}");
            Ok(HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": e.to_string()
            })))
        }
    }
}

pub fn system_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/test-db", web::get().to(test_db));
}

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::{
    AuditLogEntry, CashOperation, Cheque, Lot, LotStock, Message, MovementType, OperationType,
    Producer, StockMovement, User, Validation, ValidationStatus,
};
use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::system::test_db,
        handlers::auth::login,
        handlers::user::create_user,
        handlers::user::list_users,
        handlers::user::delete_user,
        handlers::lot::create_lot,
        handlers::lot::list_lots,
        handlers::lot::lot_stock,
        handlers::operation::create_operation,
        handlers::operation::list_operations,
        handlers::stock::create_movement,
        handlers::stock::list_movements,
        handlers::cheque::create_cheque,
        handlers::cheque::list_cheques,
        handlers::message::send_message,
        handlers::message::inbox,
        handlers::producer::create_producer,
        handlers::producer::list_producers,
        handlers::producer::update_producer,
        handlers::producer::delete_producer,
        handlers::validation::list_validations,
        handlers::validation::submit_validation,
        handlers::validation::approve,
        handlers::validation::reject,
        handlers::audit::list_audit,
        handlers::audit::list_audit_details,
        handlers::locality::regions,
        handlers::locality::departements,
        handlers::locality::arrondissements,
    ),
    components(
        schemas(
            User,
            Producer,
            Lot,
            LotStock,
            CashOperation,
            OperationType,
            StockMovement,
            MovementType,
            Cheque,
            Message,
            Validation,
            ValidationStatus,
            AuditLogEntry,
            LoginRequest,
            LoginResponse,
            CreateUserRequest,
            ProducerRequest,
            CreateLotRequest,
            CreateCashOperationRequest,
            CreateStockMovementRequest,
            CreateChequeRequest,
            SendMessageRequest,
            CreateValidationRequest,
            ApproveRequest,
            RejectRequest,
            LocalityResponse,
            SuccessResponse,
            ErrorResponse,
            FailureResponse,
        )
    ),
    tags(
        (name = "system", description = "Santé du service"),
        (name = "auth", description = "Connexion"),
        (name = "users", description = "Comptes utilisateurs"),
        (name = "producers", description = "Producteurs"),
        (name = "lots", description = "Lots de production"),
        (name = "caisse", description = "Journal de caisse et chèques"),
        (name = "stock", description = "Mouvements de stock"),
        (name = "messages", description = "Messagerie interne"),
        (name = "validations", description = "Circuit de validation"),
        (name = "audit", description = "Journal d'audit"),
        (name = "localites", description = "Régions, départements, arrondissements"),
    ),
    info(
        title = "NBFO Backend API",
        version = "1.0.0",
        description = "API de gestion de la coopérative NBFO"
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/login",
            "/api/producers/{id}",
            "/api/validations/{id}/reject",
            "/operations",
            "/lot-stock",
            "/arrondissements/{departement_id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path} missing");
        }
    }
}

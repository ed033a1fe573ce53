use crate::entities::Message;
use crate::models::*;
use crate::services::MessageService;
use actix_web::{HttpResponse, Result, web};

#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Message envoyé", body = Message),
        (status = 400, description = "Corps invalide", body = FailureResponse),
        (status = 500, description = "Erreur envoi message", body = ErrorResponse)
    )
)]
pub async fn send_message(
    message_service: web::Data<MessageService>,
    request: web::Json<SendMessageRequest>,
) -> Result<HttpResponse> {
    match message_service.send(request.into_inner()).await {
        Ok(message) => Ok(HttpResponse::Ok().json(message)),
        Err(e) => Ok(e.respond("Erreur envoi message")),
    }
}

#[utoipa::path(
    get,
    path = "/api/messages",
    tag = "messages",
    params(InboxQuery),
    responses(
        (status = 200, description = "50 derniers messages du destinataire et des diffusions", body = [Message]),
        (status = 500, description = "Erreur récupération messages", body = ErrorResponse)
    )
)]
pub async fn inbox(
    message_service: web::Data<MessageService>,
    query: web::Query<InboxQuery>,
) -> Result<HttpResponse> {
    match message_service.inbox(query.user.as_deref()).await {
        Ok(messages) => Ok(HttpResponse::Ok().json(messages)),
        Err(e) => Ok(e.respond("Erreur récupération messages")),
    }
}

pub fn message_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/messages")
            .route(web::post().to(send_message))
            .route(web::get().to(inbox)),
    );
}

use crate::database::Actor;
use crate::entities::User;
use crate::models::*;
use crate::services::UserService;
use actix_web::{HttpResponse, Result, web};

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Utilisateur créé", body = User),
        (status = 400, description = "Champs manquants", body = FailureResponse),
        (status = 500, description = "Erreur création utilisateur", body = ErrorResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    request: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    match user_service.create_user(request.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Ok().json(user)),
        Err(e) => Ok(e.respond("Erreur création utilisateur")),
    }
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "Liste des utilisateurs", body = [User]),
        (status = 500, description = "Erreur récupération utilisateurs", body = ErrorResponse)
    )
)]
pub async fn list_users(user_service: web::Data<UserService>) -> Result<HttpResponse> {
    match user_service.list_users().await {
        Ok(users) => Ok(HttpResponse::Ok().json(users)),
        Err(e) => Ok(e.respond("Erreur récupération utilisateurs")),
    }
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = i64, Path, description = "Identifiant de l'utilisateur"),
        ActorQuery
    ),
    responses(
        (status = 200, description = "Supprimé (ou déjà absent)", body = SuccessResponse),
        (status = 500, description = "Erreur suppression utilisateur", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
    query: web::Query<ActorQuery>,
) -> Result<HttpResponse> {
    let actor = Actor::resolve([query.utilisateur.as_deref()], "admin");

    match user_service.delete_user(path.into_inner(), &actor).await {
        Ok(()) => Ok(HttpResponse::Ok().json(SuccessResponse::ok())),
        Err(e) => Ok(e.respond("Erreur suppression utilisateur")),
    }
}

pub fn user_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::post().to(create_user))
            .route(web::get().to(list_users)),
    )
    .route("/users/{id}", web::delete().to(delete_user));
}

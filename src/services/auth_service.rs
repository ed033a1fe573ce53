use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::{LoginRequest, LoginResponse};
use crate::services::AuditService;
use crate::utils::{non_blank, verify_password};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthService {
    pool: Arc<DatabaseConnection>,
    audit: AuditService,
}

impl AuthService {
    pub fn new(pool: Arc<DatabaseConnection>, audit: AuditService) -> Self {
        Self { pool, audit }
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let (Some(username), Some(password)) = (
            non_blank(request.username.as_deref()),
            non_blank(request.password.as_deref()),
        ) else {
            return Err(AppError::ValidationError(
                "Nom d'utilisateur et mot de passe requis".to_string(),
            ));
        };

        let user = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(self.pool.as_ref())
            .await?
            .ok_or_else(|| AppError::AuthError("Identifiants invalides".to_string()))?;

        if !verify_password(password, &user.password)? {
            return Err(AppError::AuthError("Identifiants invalides".to_string()));
        }

        self.audit.record(&user.username, "login", "users").await;
        log::info!("user {} logged in", user.username);

        Ok(LoginResponse {
            success: true,
            username: user.username,
            role: user.role,
            user_id: user.id,
        })
    }
}

use crate::database::{Actor, begin_as};
use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::CreateUserRequest;
use crate::services::AuditService;
use crate::utils::{hash_password, non_blank};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

#[derive(Clone)]
pub struct UserService {
    pool: Arc<DatabaseConnection>,
    audit: AuditService,
}

impl UserService {
    pub fn new(pool: Arc<DatabaseConnection>, audit: AuditService) -> Self {
        Self { pool, audit }
    }

    /// Creates an account; the password is stored as a bcrypt hash.
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<users::Model> {
        if non_blank(Some(&request.username)).is_none() || request.password.is_empty() {
            return Err(AppError::ValidationError(
                "Nom d'utilisateur et mot de passe requis".to_string(),
            ));
        }

        let actor = Actor::resolve(
            [request.utilisateur.as_deref(), Some(request.username.as_str())],
            "system",
        );
        log::info!(
            "creating user {} (role {:?}) as {}",
            request.username,
            request.role,
            actor
        );

        let model = users::ActiveModel {
            username: Set(request.username),
            password: Set(hash_password(&request.password)?),
            role: match non_blank(request.role.as_deref()) {
                Some(role) => Set(role.to_string()),
                None => ActiveValue::NotSet,
            },
            ..Default::default()
        };

        let txn = begin_as(&self.pool, &actor).await?;
        let user = model.insert(&txn).await?;
        txn.commit().await?;

        log::info!("user #{} created", user.id);
        Ok(user)
    }

    pub async fn list_users(&self) -> AppResult<Vec<users::Model>> {
        let rows = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(self.pool.as_ref())
            .await?;
        Ok(rows)
    }

    /// Deleting an id that does not exist is not an error.
    pub async fn delete_user(&self, id: i64, actor: &Actor) -> AppResult<()> {
        let txn = begin_as(&self.pool, actor).await?;
        let result = users::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        if result.rows_affected > 0 {
            self.audit
                .record(actor.name(), &format!("delete user #{id}"), "users")
                .await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::mock::{exec, log_text, shared};
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_user_requires_credentials() {
        let db = shared(MockDatabase::new(DatabaseBackend::Postgres));
        let service = UserService::new(db.clone(), AuditService::new(db));

        let err = service
            .create_user(CreateUserRequest {
                username: " ".into(),
                password: "x".into(),
                role: None,
                utilisateur: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_user_is_ok() {
        let db = shared(
            MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([exec(1), exec(0)]),
        );
        let service = UserService::new(db.clone(), AuditService::new(db.clone()));

        service.delete_user(404, &Actor::new("admin")).await.unwrap();
        drop(service);

        let log = log_text(db);
        assert!(log.contains("DELETE FROM"));
        assert!(!log.contains("audit_log"));
    }
}

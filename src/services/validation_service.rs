use crate::database::{Actor, begin_as};
use crate::entities::{ValidationStatus, validation_entity as validations};
use crate::error::AppResult;
use crate::models::CreateValidationRequest;
use crate::services::AuditService;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

/// Approval workflow over the `validations` table.
#[derive(Clone)]
pub struct ValidationService {
    pool: Arc<DatabaseConnection>,
    audit: AuditService,
}

impl ValidationService {
    pub fn new(pool: Arc<DatabaseConnection>, audit: AuditService) -> Self {
        Self { pool, audit }
    }

    pub async fn list(&self) -> AppResult<Vec<validations::Model>> {
        let rows = validations::Entity::find()
            .order_by_desc(validations::Column::Date)
            .all(self.pool.as_ref())
            .await?;
        Ok(rows)
    }

    /// Opens a request in `pending` state.
    pub async fn submit(&self, request: CreateValidationRequest) -> AppResult<validations::Model> {
        let actor = Actor::resolve([request.demandeur.as_deref()], "system");

        let model = validations::ActiveModel {
            type_validation: Set(request.type_validation),
            reference: Set(request.reference),
            demandeur: Set(request.demandeur),
            details: Set(request.details),
            status: Set(ValidationStatus::Pending),
            ..Default::default()
        };

        let txn = begin_as(&self.pool, &actor).await?;
        let validation = model.insert(&txn).await?;
        txn.commit().await?;
        Ok(validation)
    }

    pub async fn approve(&self, id: i64, actor: &Actor) -> AppResult<()> {
        let decision = validations::ActiveModel {
            status: Set(ValidationStatus::Approved),
            validated_by: Set(Some(actor.name().to_string())),
            ..Default::default()
        };
        self.decide(id, decision, actor, "approve").await
    }

    pub async fn reject(&self, id: i64, reason: Option<String>, actor: &Actor) -> AppResult<()> {
        let decision = validations::ActiveModel {
            status: Set(ValidationStatus::Rejected),
            rejection_reason: Set(reason),
            validated_by: Set(Some(actor.name().to_string())),
            ..Default::default()
        };
        self.decide(id, decision, actor, "reject").await
    }

    // Unknown ids update nothing and still succeed.
    async fn decide(
        &self,
        id: i64,
        decision: validations::ActiveModel,
        actor: &Actor,
        action: &str,
    ) -> AppResult<()> {
        let txn = begin_as(&self.pool, actor).await?;
        let result = validations::Entity::update_many()
            .set(decision)
            .filter(validations::Column::Id.eq(id))
            .exec(&txn)
            .await?;
        txn.commit().await?;

        if result.rows_affected > 0 {
            self.audit
                .record(actor.name(), &format!("{action} validation #{id}"), "validations")
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
    async fn test_reject_stores_reason() {
        let db = shared(
            MockDatabase::new(DatabaseBackend::Postgres)
                // set_config, update, audit insert
                .append_exec_results([exec(1), exec(1), exec(1)]),
        );
        let service = ValidationService::new(db.clone(), AuditService::new(db.clone()));

        service
            .reject(3, Some("quantité incohérente".into()), &Actor::new("admin"))
            .await
            .unwrap();
        drop(service);

        let log = log_text(db);
        assert!(log.contains("UPDATE"));
        assert!(log.contains("rejected"));
        assert!(log.contains("quantité incohérente"));
        assert!(log.contains("reject validation #3"));
    }

    #[tokio::test]
    async fn test_approve_unknown_id_succeeds() {
        let db = shared(
            MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([exec(1), exec(0)]),
        );
        let service = ValidationService::new(db.clone(), AuditService::new(db.clone()));

        service.approve(404, &Actor::new("admin")).await.unwrap();
        drop(service);

        assert!(!log_text(db).contains("audit_log"));
    }
}

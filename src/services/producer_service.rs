use crate::database::{Actor, begin_as};
use crate::entities::producer_entity as producers;
use crate::error::{AppError, AppResult};
use crate::models::ProducerRequest;
use crate::services::AuditService;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

#[derive(Clone)]
pub struct ProducerService {
    pool: Arc<DatabaseConnection>,
    audit: AuditService,
}

fn producer_fields(request: ProducerRequest) -> producers::ActiveModel {
    producers::ActiveModel {
        nom_producteur: Set(request.nom_producteur),
        tel_producteur: Set(request.tel_producteur),
        type_producteur: Set(request.type_producteur),
        region: Set(request.region),
        produits: Set(request.produits),
        ..Default::default()
    }
}

impl ProducerService {
    pub fn new(pool: Arc<DatabaseConnection>, audit: AuditService) -> Self {
        Self { pool, audit }
    }

    pub async fn create_producer(&self, request: ProducerRequest) -> AppResult<producers::Model> {
        let actor = Actor::resolve([request.utilisateur.as_deref()], "admin");

        let txn = begin_as(&self.pool, &actor).await?;
        let producer = producer_fields(request).insert(&txn).await?;
        txn.commit().await?;
        Ok(producer)
    }

    pub async fn list_producers(&self) -> AppResult<Vec<producers::Model>> {
        let rows = producers::Entity::find()
            .order_by_desc(producers::Column::Id)
            .all(self.pool.as_ref())
            .await?;
        Ok(rows)
    }

    /// Replaces every editable field of producer `id`.
    pub async fn update_producer(
        &self,
        id: i64,
        request: ProducerRequest,
    ) -> AppResult<producers::Model> {
        let actor = Actor::resolve([request.utilisateur.as_deref()], "admin");
        let mut model = producer_fields(request);
        model.id = ActiveValue::Unchanged(id);

        let txn = begin_as(&self.pool, &actor).await?;
        let producer = match model.update(&txn).await {
            Ok(p) => p,
            Err(DbErr::RecordNotUpdated) => {
                return Err(AppError::NotFound(format!("Producteur {id} introuvable")));
            }
            Err(e) => return Err(e.into()),
        };
        txn.commit().await?;
        Ok(producer)
    }

    /// Deleting an id that does not exist is not an error.
    pub async fn delete_producer(&self, id: i64, actor: &Actor) -> AppResult<()> {
        let txn = begin_as(&self.pool, actor).await?;
        let result = producers::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        if result.rows_affected > 0 {
            self.audit
                .record(actor.name(), &format!("delete producteur #{id}"), "producteurs")
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

    fn request() -> ProducerRequest {
        ProducerRequest {
            nom_producteur: "GIE Kaffrine".into(),
            tel_producteur: Some("771234567".into()),
            type_producteur: Some("groupement".into()),
            region: Some("Kaffrine".into()),
            produits: Some("arachide, mil".into()),
            utilisateur: None,
        }
    }

    #[tokio::test]
    async fn test_update_missing_producer_is_not_found() {
        let db = shared(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([exec(1)])
                .append_query_results([Vec::<producers::Model>::new()]),
        );
        let service = ProducerService::new(db.clone(), AuditService::new(db));

        let err = service.update_producer(99, request()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_existing_producer_is_audited() {
        let db = shared(
            MockDatabase::new(DatabaseBackend::Postgres)
                // set_config, delete, audit insert
                .append_exec_results([exec(1), exec(1), exec(1)]),
        );
        let service = ProducerService::new(db.clone(), AuditService::new(db.clone()));

        service.delete_producer(8, &Actor::new("awa")).await.unwrap();
        drop(service);

        let log = log_text(db);
        assert!(log.contains("delete producteur #8"));
        assert!(log.contains("String(Some(\"awa\"))"));
    }
}

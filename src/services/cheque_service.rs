use crate::database::{Actor, begin_as};
use crate::entities::cheque_entity as cheques;
use crate::error::AppResult;
use crate::models::CreateChequeRequest;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

#[derive(Clone)]
pub struct ChequeService {
    pool: Arc<DatabaseConnection>,
}

impl ChequeService {
    pub fn new(pool: Arc<DatabaseConnection>) -> Self {
        Self { pool }
    }

    pub async fn record_cheque(&self, request: CreateChequeRequest) -> AppResult<cheques::Model> {
        let actor = Actor::resolve([request.utilisateur.as_deref()], "system");

        let model = cheques::ActiveModel {
            numero_cheque: Set(request.numero_cheque),
            banque: Set(request.banque),
            montant: Set(request.montant),
            emetteur: Set(request.emetteur),
            utilisateur: Set(request.utilisateur),
            ..Default::default()
        };

        let txn = begin_as(&self.pool, &actor).await?;
        let cheque = model.insert(&txn).await?;
        txn.commit().await?;
        Ok(cheque)
    }

    pub async fn list_cheques(&self) -> AppResult<Vec<cheques::Model>> {
        let rows = cheques::Entity::find()
            .order_by_desc(cheques::Column::Id)
            .all(self.pool.as_ref())
            .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::mock::{exec, log_text, shared};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_record_cheque_defaults_actor_to_system() {
        let saved = cheques::Model {
            id: 12,
            numero_cheque: "0045812".into(),
            banque: Some("CBAO".into()),
            montant: Decimal::from(250_000),
            emetteur: Some("SODEFITEX".into()),
            utilisateur: None,
            date_enregistrement: Utc.with_ymd_and_hms(2025, 3, 4, 11, 30, 0).unwrap(),
        };
        let db = shared(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([exec(1)])
                .append_query_results([vec![saved.clone()]]),
        );
        let service = ChequeService::new(db.clone());

        let cheque = service
            .record_cheque(CreateChequeRequest {
                numero_cheque: "0045812".into(),
                banque: Some("CBAO".into()),
                montant: Decimal::from(250_000),
                emetteur: Some("SODEFITEX".into()),
                utilisateur: None,
            })
            .await
            .unwrap();

        assert_eq!(cheque, saved);
        drop(service);
        let log = log_text(db);
        assert!(log.contains("set_config"));
        assert!(log.contains("String(Some(\"system\"))"));
    }
}

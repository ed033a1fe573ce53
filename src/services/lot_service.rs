use crate::database::{Actor, begin_as};
use crate::entities::{lot_entity as lots, lot_stock_entity as lot_stock};
use crate::error::AppResult;
use crate::models::CreateLotRequest;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

#[derive(Clone)]
pub struct LotService {
    pool: Arc<DatabaseConnection>,
}

impl LotService {
    pub fn new(pool: Arc<DatabaseConnection>) -> Self {
        Self { pool }
    }

    pub async fn create_lot(&self, request: CreateLotRequest) -> AppResult<lots::Model> {
        let actor = Actor::resolve(
            [
                request.utilisateur.as_deref(),
                Some(request.nom_producteur.as_str()),
            ],
            "system",
        );

        let model = lots::ActiveModel {
            nom_producteur: Set(request.nom_producteur),
            tel_producteur: Set(request.tel_producteur),
            type_producteur: Set(request.type_producteur),
            categorie: Set(request.categorie),
            description: Set(request.description),
            quantite: Set(request.quantite),
            unite: Set(request.unite),
            prix_ref: Set(request.prix_ref),
            qualite: Set(request.qualite),
            date_reception: Set(request.date_reception),
            date_expiration: Set(request.date_expiration),
            ..Default::default()
        };

        let txn = begin_as(&self.pool, &actor).await?;
        let lot = model.insert(&txn).await?;
        txn.commit().await?;
        Ok(lot)
    }

    pub async fn list_lots(&self) -> AppResult<Vec<lots::Model>> {
        let rows = lots::Entity::find()
            .order_by_desc(lots::Column::Id)
            .all(self.pool.as_ref())
            .await?;
        Ok(rows)
    }

    /// Current stock per lot, from the `lot_stock_etat` view.
    pub async fn stock_levels(&self) -> AppResult<Vec<lot_stock::Model>> {
        let rows = lot_stock::Entity::find()
            .order_by_asc(lot_stock::Column::LotId)
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

    fn request(utilisateur: Option<&str>) -> CreateLotRequest {
        CreateLotRequest {
            nom_producteur: "Coopérative Ndiaye".into(),
            tel_producteur: None,
            type_producteur: None,
            categorie: Some("céréales".into()),
            description: Some("mil souna".into()),
            quantite: Decimal::from(250),
            unite: Some("kg".into()),
            prix_ref: None,
            qualite: None,
            date_reception: None,
            date_expiration: None,
            utilisateur: utilisateur.map(str::to_string),
        }
    }

    fn saved() -> lots::Model {
        lots::Model {
            id: 3,
            nom_producteur: "Coopérative Ndiaye".into(),
            tel_producteur: None,
            type_producteur: None,
            categorie: Some("céréales".into()),
            description: Some("mil souna".into()),
            quantite: Decimal::from(250),
            unite: Some("kg".into()),
            prix_ref: None,
            qualite: None,
            date_reception: None,
            date_expiration: None,
            created_at: Utc.with_ymd_and_hms(2025, 3, 5, 9, 0, 0).unwrap(),
        }
    }

    async fn create_as(utilisateur: Option<&str>) -> String {
        let db = shared(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_exec_results([exec(1)])
                .append_query_results([vec![saved()]]),
        );
        let service = LotService::new(db.clone());

        let lot = service.create_lot(request(utilisateur)).await.unwrap();
        assert_eq!(lot.id, 3);
        drop(service);

        log_text(db)
    }

    #[tokio::test]
    async fn test_create_lot_attributed_to_given_user() {
        let log = create_as(Some("magasinier1")).await;
        assert!(log.contains("String(Some(\"magasinier1\"))"));
    }

    #[tokio::test]
    async fn test_create_lot_falls_back_to_producer_name() {
        let log = create_as(Some("")).await;
        assert!(log.contains("String(Some(\"Coopérative Ndiaye\"))"));
        assert!(!log.contains("String(Some(\"system\"))"));
    }

    #[tokio::test]
    async fn test_stock_levels_ordered_by_lot() {
        let level = |lot_id: i64, disponible: i64| lot_stock::Model {
            lot_id,
            nom_producteur: "Coopérative Ndiaye".into(),
            categorie: None,
            description: None,
            unite: Some("kg".into()),
            quantite_initiale: Decimal::from(250),
            entrees: Decimal::ZERO,
            sorties: Decimal::from(250 - disponible),
            stock_disponible: Decimal::from(disponible),
        };
        let db = shared(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![level(1, 250), level(2, 180)]]),
        );
        let service = LotService::new(db.clone());

        let rows = service.stock_levels().await.unwrap();
        assert_eq!(rows[1].stock_disponible, Decimal::from(180));
        drop(service);

        let log = log_text(db);
        assert!(log.contains("lot_stock_etat"));
        assert!(log.contains("ORDER BY \\\"lot_stock_etat\\\".\\\"lot_id\\\" ASC"));
    }
}

use crate::database::{Actor, begin_as};
use crate::entities::stock_movement_entity as stock;
use crate::error::AppResult;
use crate::models::CreateStockMovementRequest;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

#[derive(Clone)]
pub struct StockService {
    pool: Arc<DatabaseConnection>,
}

impl StockService {
    pub fn new(pool: Arc<DatabaseConnection>) -> Self {
        Self { pool }
    }

    pub async fn record_movement(
        &self,
        request: CreateStockMovementRequest,
    ) -> AppResult<stock::Model> {
        let actor = Actor::resolve([request.utilisateur.as_deref()], "magasinier");

        let model = stock::ActiveModel {
            produit: Set(request.produit),
            type_mouvement: Set(request.type_mouvement),
            quantite: Set(request.quantite),
            unite: Set(request.unite),
            lot_id: Set(request.lot_id),
            magasin: Set(request.magasin),
            ..Default::default()
        };

        let txn = begin_as(&self.pool, &actor).await?;
        let movement = model.insert(&txn).await?;
        txn.commit().await?;
        Ok(movement)
    }

    pub async fn list_movements(&self) -> AppResult<Vec<stock::Model>> {
        let rows = stock::Entity::find()
            .order_by_desc(stock::Column::Id)
            .all(self.pool.as_ref())
            .await?;
        Ok(rows)
    }
}

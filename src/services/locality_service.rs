use crate::entities::{arrondissement_entity, departement_entity, region_entity};
use crate::error::AppResult;
use crate::models::LocalityResponse;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

/// Region > departement > arrondissement lookups.
#[derive(Clone)]
pub struct LocalityService {
    pool: Arc<DatabaseConnection>,
}

impl LocalityService {
    pub fn new(pool: Arc<DatabaseConnection>) -> Self {
        Self { pool }
    }

    pub async fn regions(&self) -> AppResult<Vec<LocalityResponse>> {
        let rows = region_entity::Entity::find()
            .order_by_asc(region_entity::Column::Nom)
            .all(self.pool.as_ref())
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn departements(&self, region_id: i64) -> AppResult<Vec<LocalityResponse>> {
        let rows = departement_entity::Entity::find()
            .filter(departement_entity::Column::RegionId.eq(region_id))
            .order_by_asc(departement_entity::Column::Nom)
            .all(self.pool.as_ref())
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn arrondissements(&self, departement_id: i64) -> AppResult<Vec<LocalityResponse>> {
        let rows = arrondissement_entity::Entity::find()
            .filter(arrondissement_entity::Column::DepartementId.eq(departement_id))
            .order_by_asc(arrondissement_entity::Column::Nom)
            .all(self.pool.as_ref())
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

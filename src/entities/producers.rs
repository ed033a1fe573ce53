use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "producteurs")]
#[schema(as = Producer)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nom_producteur: String,
    pub tel_producteur: Option<String>,
    pub type_producteur: Option<String>,
    pub region: Option<String>,
    /// Free text list of what the producer supplies
    pub produits: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Inventory lot received from a producer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "lots")]
#[schema(as = Lot)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nom_producteur: String,
    pub tel_producteur: Option<String>,
    pub type_producteur: Option<String>,
    pub categorie: Option<String>,
    pub description: Option<String>,
    pub quantite: Decimal,
    pub unite: Option<String>,
    pub prix_ref: Option<Decimal>,
    pub qualite: Option<String>,
    pub date_reception: Option<NaiveDate>,
    pub date_expiration: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::stock_movements::Entity")]
    StockMovements,
}

impl Related<super::stock_movements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StockMovements.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

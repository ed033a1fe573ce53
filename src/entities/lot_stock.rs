use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

/// Read-only view `lot_stock_etat`: lot quantity adjusted by its movements.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "lot_stock_etat")]
#[schema(as = LotStock)]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub lot_id: i64,
    pub nom_producteur: String,
    pub categorie: Option<String>,
    pub description: Option<String>,
    pub unite: Option<String>,
    pub quantite_initiale: Decimal,
    pub entrees: Decimal,
    pub sorties: Decimal,
    pub stock_disponible: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "movement_type")]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    #[sea_orm(string_value = "entree")]
    Entree,
    #[sea_orm(string_value = "sortie")]
    Sortie,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "stock")]
#[schema(as = StockMovement)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub produit: String,
    pub type_mouvement: MovementType,
    pub quantite: Decimal,
    pub unite: Option<String>,
    pub lot_id: Option<i64>,
    /// Warehouse the goods entered or left
    pub magasin: Option<String>,
    pub date_mouvement: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lots::Entity",
        from = "Column::LotId",
        to = "super::lots::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Lot,
}

impl Related<super::lots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lot.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "cheques")]
#[schema(as = Cheque)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub numero_cheque: String,
    pub banque: Option<String>,
    pub montant: Decimal,
    pub emetteur: Option<String>,
    pub utilisateur: Option<String>,
    pub date_enregistrement: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

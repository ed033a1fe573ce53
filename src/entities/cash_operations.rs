use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "operation_type")]
#[serde(rename_all = "snake_case")]
pub enum OperationType {
    #[sea_orm(string_value = "credit")]
    Credit,
    #[sea_orm(string_value = "debit")]
    Debit,
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationType::Credit => write!(f, "credit"),
            OperationType::Debit => write!(f, "debit"),
        }
    }
}

/// One row of the cash-register ledger.
///
/// Rows are append-only: `solde_apres` is the running balance after this
/// operation and depends on every row before it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "operations_caisse")]
#[schema(as = CashOperation)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub utilisateur: Option<String>,
    pub type_operation: OperationType,
    pub montant: Decimal,
    pub solde_apres: Decimal,
    /// Counterparty, usually a producer name
    pub producteur: Option<String>,
    pub description: Option<String>,
    pub date_operation: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

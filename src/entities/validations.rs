use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "validation_status")]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

/// Request waiting for (or having received) an approval decision.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "validations")]
#[schema(as = Validation)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub type_validation: String,
    pub reference: Option<String>,
    pub demandeur: Option<String>,
    pub details: Option<String>,
    pub status: ValidationStatus,
    pub rejection_reason: Option<String>,
    pub validated_by: Option<String>,
    pub date: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

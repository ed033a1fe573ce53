use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, ToSchema)]
#[sea_orm(table_name = "audit_log")]
#[schema(as = AuditLogEntry)]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub utilisateur: Option<String>,
    pub action: String,
    pub table_cible: Option<String>,
    pub date_action: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use crate::entities::OperationType;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCashOperationRequest {
    #[schema(example = "caissier1")]
    pub utilisateur: Option<String>,
    pub type_operation: OperationType,
    #[schema(value_type = String, example = "15000")]
    pub montant: Decimal,
    /// Counterparty of the operation
    pub producteur: Option<String>,
    pub description: Option<String>,
}

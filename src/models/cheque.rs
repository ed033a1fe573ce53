use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateChequeRequest {
    #[schema(example = "0045812")]
    pub numero_cheque: String,
    pub banque: Option<String>,
    #[schema(value_type = String, example = "250000")]
    pub montant: Decimal,
    pub emetteur: Option<String>,
    pub utilisateur: Option<String>,
}

use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateValidationRequest {
    #[schema(example = "sortie_stock")]
    pub type_validation: String,
    pub reference: Option<String>,
    pub demandeur: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ApproveRequest {
    pub utilisateur: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RejectRequest {
    pub reason: Option<String>,
    pub utilisateur: Option<String>,
}

use serde::Deserialize;
use utoipa::ToSchema;

/// Body of both create and full update of a producer.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ProducerRequest {
    #[schema(example = "GIE Kaffrine")]
    pub nom_producteur: String,
    pub tel_producteur: Option<String>,
    pub type_producteur: Option<String>,
    pub region: Option<String>,
    pub produits: Option<String>,
    pub utilisateur: Option<String>,
}

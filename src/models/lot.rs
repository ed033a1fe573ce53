use crate::utils::blank_as_none;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateLotRequest {
    #[schema(example = "Coopérative Ndiaye")]
    pub nom_producteur: String,
    pub tel_producteur: Option<String>,
    pub type_producteur: Option<String>,
    #[schema(example = "céréales")]
    pub categorie: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = String, example = "250")]
    pub quantite: Decimal,
    #[schema(example = "kg")]
    pub unite: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[schema(value_type = Option<String>, example = "350")]
    pub prix_ref: Option<Decimal>,
    pub qualite: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date_reception: Option<NaiveDate>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date_expiration: Option<NaiveDate>,
    pub utilisateur: Option<String>,
}

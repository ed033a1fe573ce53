use crate::entities::{arrondissement_entity, departement_entity, region_entity};
use serde::Serialize;
use utoipa::ToSchema;

/// Region, departement or arrondissement as listed in select boxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LocalityResponse {
    pub id: i64,
    pub nom: String,
}

impl From<region_entity::Model> for LocalityResponse {
    fn from(m: region_entity::Model) -> Self {
        Self { id: m.id, nom: m.nom }
    }
}

impl From<departement_entity::Model> for LocalityResponse {
    fn from(m: departement_entity::Model) -> Self {
        Self { id: m.id, nom: m.nom }
    }
}

impl From<arrondissement_entity::Model> for LocalityResponse {
    fn from(m: arrondissement_entity::Model) -> Self {
        Self { id: m.id, nom: m.nom }
    }
}

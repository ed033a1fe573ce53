use crate::entities::MovementType;
use crate::utils::blank_as_none;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateStockMovementRequest {
    #[schema(example = "mil")]
    pub produit: String,
    pub type_mouvement: MovementType,
    #[schema(value_type = String, example = "40")]
    pub quantite: Decimal,
    pub unite: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub lot_id: Option<i64>,
    pub magasin: Option<String>,
    pub utilisateur: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_posted_movement() {
        let request: CreateStockMovementRequest = serde_json::from_str(
            r#"{"produit":"mil","type_mouvement":"entree","quantite":"40","lot_id":"12","magasin":""}"#,
        )
        .unwrap();

        assert_eq!(request.lot_id, Some(12));
        assert_eq!(request.quantite, Decimal::from(40));
        assert_eq!(request.type_mouvement, MovementType::Entree);
    }

    #[test]
    fn test_blank_lot_is_none() {
        let request: CreateStockMovementRequest = serde_json::from_str(
            r#"{"produit":"mil","type_mouvement":"sortie","quantite":5,"lot_id":""}"#,
        )
        .unwrap();

        assert_eq!(request.lot_id, None);
    }
}

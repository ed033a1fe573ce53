use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// stock_disponible = quantite du lot + entrees - sorties rattachees au lot
const UP: &str = r#"
CREATE OR REPLACE VIEW lot_stock_etat AS
SELECT
    l.id AS lot_id,
    l.nom_producteur,
    l.categorie,
    l.description,
    l.unite,
    l.quantite AS quantite_initiale,
    COALESCE(SUM(s.quantite) FILTER (WHERE s.type_mouvement = 'entree'), 0) AS entrees,
    COALESCE(SUM(s.quantite) FILTER (WHERE s.type_mouvement = 'sortie'), 0) AS sorties,
    l.quantite
        + COALESCE(SUM(s.quantite) FILTER (WHERE s.type_mouvement = 'entree'), 0)
        - COALESCE(SUM(s.quantite) FILTER (WHERE s.type_mouvement = 'sortie'), 0) AS stock_disponible
FROM lots l
LEFT JOIN stock s ON s.lot_id = l.id
GROUP BY l.id;
"#;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.get_connection().execute_unprepared(UP).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP VIEW IF EXISTS lot_stock_etat;")
            .await?;
        Ok(())
    }
}

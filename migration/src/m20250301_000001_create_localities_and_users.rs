use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Regions {
    Table,
    Id,
    Nom,
}

#[derive(DeriveIden)]
enum Departements {
    Table,
    Id,
    Nom,
    RegionId,
}

#[derive(DeriveIden)]
enum Arrondissements {
    Table,
    Id,
    Nom,
    DepartementId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Password,
    Role,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Regions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Regions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Regions::Nom).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Departements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Departements::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Departements::Nom).string().not_null())
                    .col(ColumnDef::new(Departements::RegionId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_departements_region")
                            .from(Departements::Table, Departements::RegionId)
                            .to(Regions::Table, Regions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Arrondissements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Arrondissements::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Arrondissements::Nom).string().not_null())
                    .col(
                        ColumnDef::new(Arrondissements::DepartementId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_arrondissements_departement")
                            .from(Arrondissements::Table, Arrondissements::DepartementId)
                            .to(Departements::Table, Departements::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_departements_region_id")
                    .table(Departements::Table)
                    .col(Departements::RegionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_arrondissements_departement_id")
                    .table(Arrondissements::Table)
                    .col(Arrondissements::DepartementId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Password).string().not_null())
                    .col(
                        ColumnDef::new(Users::Role)
                            .string()
                            .not_null()
                            .default("agent"),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("NOW()")),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(Arrondissements::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Departements::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Regions::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

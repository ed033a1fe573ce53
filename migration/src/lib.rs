pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_localities_and_users;
mod m20250301_000002_create_cooperative_tables;
mod m20250301_000003_add_audit_triggers;
mod m20250301_000004_create_lot_stock_view;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_localities_and_users::Migration),
            Box::new(m20250301_000002_create_cooperative_tables::Migration),
            Box::new(m20250301_000003_add_audit_triggers::Migration),
            Box::new(m20250301_000004_create_lot_stock_view::Migration),
        ]
    }
}

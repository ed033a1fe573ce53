use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, FromQueryResult, Statement,
};

pub type DbPool = DatabaseConnection;

pub async fn create_pool(config: &DatabaseConfig) -> AppResult<DbPool> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let pool = Database::connect(options).await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &DbPool) -> AppResult<()> {
    Migrator::up(pool, None).await?;
    Ok(())
}

#[derive(Debug, FromQueryResult)]
struct CurrentDatabase {
    current_database: String,
}

/// Round-trips to the server and returns the connected database name.
pub async fn current_database(pool: &DbPool) -> AppResult<String> {
    let row = CurrentDatabase::find_by_statement(Statement::from_string(
        pool.get_database_backend(),
        "SELECT current_database() AS current_database".to_owned(),
    ))
    .one(pool)
    .await?
    .ok_or_else(|| AppError::InternalError("current_database() returned no row".into()))?;

    Ok(row.current_database)
}

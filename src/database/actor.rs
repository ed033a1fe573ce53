//! Attribution of writes to the acting user.
//!
//! Audit triggers read `nbfo.current_user` through `current_setting`. The
//! value is bound with `set_config(.., true)`, i.e. local to the enclosing
//! transaction, so it disappears on commit/rollback and never follows the
//! connection back into the pool.

use crate::error::AppResult;
use sea_orm::{ConnectionTrait, DatabaseConnection, DatabaseTransaction, Statement, TransactionTrait};
use std::fmt;

pub const CURRENT_USER_SETTING: &str = "nbfo.current_user";

/// User a write is performed on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor(String);

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// First non-blank candidate, otherwise `fallback`.
    pub fn resolve<'a>(
        candidates: impl IntoIterator<Item = Option<&'a str>>,
        fallback: &str,
    ) -> Self {
        candidates
            .into_iter()
            .flatten()
            .find(|c| !c.trim().is_empty())
            .map(Actor::new)
            .unwrap_or_else(|| Actor::new(fallback))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Binds `actor` on `conn`. Only meaningful inside a transaction.
pub async fn bind_actor<C: ConnectionTrait>(conn: &C, actor: &Actor) -> AppResult<()> {
    conn.execute(Statement::from_sql_and_values(
        conn.get_database_backend(),
        "SELECT set_config($1, $2, true)",
        [CURRENT_USER_SETTING.into(), actor.name().into()],
    ))
    .await?;
    Ok(())
}

/// Opens a transaction attributed to `actor`.
///
/// Dropping the returned transaction without committing rolls it back and
/// hands the connection back to the pool.
pub async fn begin_as(db: &DatabaseConnection, actor: &Actor) -> AppResult<DatabaseTransaction> {
    let txn = db.begin().await?;
    bind_actor(&txn, actor).await?;
    Ok(txn)
}

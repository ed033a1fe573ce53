use crate::entities::audit_log_entity as audit_log;
use crate::error::{AppError, AppResult};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult, JsonValue, QueryOrder, Set,
    Statement,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AuditService {
    pool: Arc<DatabaseConnection>,
}

#[derive(Debug, FromQueryResult)]
struct TablePresence {
    present: bool,
}

impl AuditService {
    pub fn new(pool: Arc<DatabaseConnection>) -> Self {
        Self { pool }
    }

    /// Appends an `audit_log` entry. Best-effort: a failure is logged and
    /// never reaches the caller.
    pub async fn record(&self, utilisateur: &str, action: &str, table_cible: &str) {
        let entry = audit_log::ActiveModel {
            utilisateur: Set(Some(utilisateur.to_string())),
            action: Set(action.to_string()),
            table_cible: Set(Some(table_cible.to_string())),
            ..Default::default()
        };

        if let Err(e) = audit_log::Entity::insert(entry)
            .exec_without_returning(self.pool.as_ref())
            .await
        {
            log::error!("audit_log insert failed ({utilisateur} {action} {table_cible}): {e}");
        }
    }

    pub async fn list(&self) -> AppResult<Vec<audit_log::Model>> {
        let rows = audit_log::Entity::find()
            .order_by_desc(audit_log::Column::DateAction)
            .all(self.pool.as_ref())
            .await?;
        Ok(rows)
    }

    /// Trigger-level audit rows from `audit_details`, or the plain
    /// `audit_log` when that table is not installed.
    pub async fn list_details(&self) -> AppResult<Vec<JsonValue>> {
        if self.has_detail_table().await? {
            let rows = JsonValue::find_by_statement(Statement::from_string(
                self.pool.get_database_backend(),
                "SELECT * FROM audit_details ORDER BY date_action DESC".to_owned(),
            ))
            .all(self.pool.as_ref())
            .await?;
            return Ok(rows);
        }

        log::debug!("audit_details missing, serving audit_log");
        self.list()
            .await?
            .into_iter()
            .map(|row| {
                serde_json::to_value(row)
                    .map_err(|e| AppError::InternalError(format!("audit row encoding: {e}")))
            })
            .collect()
    }

    async fn has_detail_table(&self) -> AppResult<bool> {
        let presence = TablePresence::find_by_statement(Statement::from_string(
            self.pool.get_database_backend(),
            "SELECT to_regclass('public.audit_details') IS NOT NULL AS present".to_owned(),
        ))
        .one(self.pool.as_ref())
        .await?;
        Ok(presence.is_some_and(|p| p.present))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::mock::{exec, log_text, shared};
    use chrono::{TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    fn entry(id: i64, action: &str) -> audit_log::Model {
        audit_log::Model {
            id,
            utilisateur: Some("admin".into()),
            action: action.into(),
            table_cible: Some("users".into()),
            date_action: Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap(),
        }
    }

    fn presence(present: bool) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("present", Value::Bool(Some(present)))])
    }

    #[tokio::test]
    async fn test_record_swallows_failures() {
        // no exec result queued: the insert fails
        let db = shared(MockDatabase::new(DatabaseBackend::Postgres));
        AuditService::new(db).record("admin", "login", "users").await;
    }

    #[tokio::test]
    async fn test_record_inserts_entry() {
        let db = shared(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([exec(1)]));
        let service = AuditService::new(db.clone());

        service.record("awa", "login", "users").await;
        drop(service);

        let log = log_text(db);
        assert!(log.contains("INSERT INTO"));
        assert!(log.contains("audit_log"));
        assert!(log.contains("awa"));
    }

    #[tokio::test]
    async fn test_details_fall_back_to_audit_log() {
        let db = shared(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![presence(false)]])
                .append_query_results([vec![entry(2, "reject"), entry(1, "login")]]),
        );

        let rows = AuditService::new(db).list_details().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["action"], "reject");
        assert_eq!(rows[1]["table_cible"], "users");
    }

    #[tokio::test]
    async fn test_details_read_trigger_rows_when_present() {
        let detail = BTreeMap::from([
            ("id", Value::BigInt(Some(40))),
            ("table_cible", Value::String(Some(Box::new("operations_caisse".into())))),
            ("operation", Value::String(Some(Box::new("INSERT".into())))),
            ("utilisateur", Value::String(Some(Box::new("caissier1".into())))),
        ]);
        let db = shared(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![presence(true)]])
                .append_query_results([vec![detail]]),
        );
        let service = AuditService::new(db.clone());

        let rows = service.list_details().await.unwrap();
        drop(service);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["table_cible"], "operations_caisse");
        assert_eq!(rows[0]["utilisateur"], "caissier1");
        let log = log_text(db);
        assert!(log.contains("FROM audit_details ORDER BY date_action DESC"));
        assert!(!log.contains("audit_log"));
    }
}

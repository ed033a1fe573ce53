use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Row-level audit populated by triggers.
///
/// The acting user comes from the transaction-local setting
/// `nbfo.current_user`; writes issued without it are attributed to the
/// database role.
const UP: &str = r#"
CREATE TABLE IF NOT EXISTS audit_details (
    id BIGSERIAL PRIMARY KEY,
    table_cible VARCHAR NOT NULL,
    operation VARCHAR NOT NULL,
    utilisateur VARCHAR,
    ligne_id BIGINT,
    donnees JSONB,
    date_action TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
CREATE INDEX IF NOT EXISTS idx_audit_details_date ON audit_details(date_action DESC);

CREATE OR REPLACE FUNCTION nbfo_audit_row() RETURNS trigger AS $$
DECLARE
    acteur TEXT := COALESCE(NULLIF(current_setting('nbfo.current_user', true), ''), current_user);
    ligne JSONB;
BEGIN
    IF TG_OP = 'DELETE' THEN
        ligne := to_jsonb(OLD) - 'password';
    ELSE
        ligne := to_jsonb(NEW) - 'password';
    END IF;

    INSERT INTO audit_details (table_cible, operation, utilisateur, ligne_id, donnees)
    VALUES (TG_TABLE_NAME, TG_OP, acteur, (ligne ->> 'id')::BIGINT, ligne);

    IF TG_OP = 'DELETE' THEN
        RETURN OLD;
    END IF;
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;

DO $$
DECLARE
    t TEXT;
BEGIN
    FOREACH t IN ARRAY ARRAY['users', 'producteurs', 'lots', 'stock', 'operations_caisse', 'cheques', 'validations']
    LOOP
        EXECUTE format('DROP TRIGGER IF EXISTS trg_audit_%1$s ON %1$I', t);
        EXECUTE format(
            'CREATE TRIGGER trg_audit_%1$s AFTER INSERT OR UPDATE OR DELETE ON %1$I
             FOR EACH ROW EXECUTE FUNCTION nbfo_audit_row()',
            t
        );
    END LOOP;
END $$;

CREATE OR REPLACE FUNCTION nbfo_ledger_append_only() RETURNS trigger AS $$
BEGIN
    RAISE EXCEPTION 'operations_caisse is append-only (% refused)', TG_OP;
END;
$$ LANGUAGE plpgsql;

DROP TRIGGER IF EXISTS trg_operations_caisse_append_only ON operations_caisse;
CREATE TRIGGER trg_operations_caisse_append_only
    BEFORE UPDATE OR DELETE ON operations_caisse
    FOR EACH ROW EXECUTE FUNCTION nbfo_ledger_append_only();
"#;

const DOWN: &str = r#"
DROP TRIGGER IF EXISTS trg_operations_caisse_append_only ON operations_caisse;
DROP FUNCTION IF EXISTS nbfo_ledger_append_only();

DO $$
DECLARE
    t TEXT;
BEGIN
    FOREACH t IN ARRAY ARRAY['users', 'producteurs', 'lots', 'stock', 'operations_caisse', 'cheques', 'validations']
    LOOP
        EXECUTE format('DROP TRIGGER IF EXISTS trg_audit_%1$s ON %1$I', t);
    END LOOP;
END $$;

DROP FUNCTION IF EXISTS nbfo_audit_row();
DROP TABLE IF EXISTS audit_details;
"#;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.get_connection().execute_unprepared(UP).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.get_connection().execute_unprepared(DOWN).await?;
        Ok(())
    }
}

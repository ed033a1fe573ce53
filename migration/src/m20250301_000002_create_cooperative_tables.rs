use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const UP: &str = r#"
DO $$ BEGIN
    CREATE TYPE operation_type AS ENUM ('credit', 'debit');
EXCEPTION WHEN duplicate_object THEN NULL; END $$;

DO $$ BEGIN
    CREATE TYPE movement_type AS ENUM ('entree', 'sortie');
EXCEPTION WHEN duplicate_object THEN NULL; END $$;

DO $$ BEGIN
    CREATE TYPE validation_status AS ENUM ('pending', 'approved', 'rejected');
EXCEPTION WHEN duplicate_object THEN NULL; END $$;

CREATE TABLE IF NOT EXISTS producteurs (
    id BIGSERIAL PRIMARY KEY,
    nom_producteur VARCHAR NOT NULL,
    tel_producteur VARCHAR,
    type_producteur VARCHAR,
    region VARCHAR,
    produits TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS lots (
    id BIGSERIAL PRIMARY KEY,
    nom_producteur VARCHAR NOT NULL,
    tel_producteur VARCHAR,
    type_producteur VARCHAR,
    categorie VARCHAR,
    description TEXT,
    quantite NUMERIC(14, 3) NOT NULL,
    unite VARCHAR,
    prix_ref NUMERIC(14, 2),
    qualite VARCHAR,
    date_reception DATE,
    date_expiration DATE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS stock (
    id BIGSERIAL PRIMARY KEY,
    produit VARCHAR NOT NULL,
    type_mouvement movement_type NOT NULL,
    quantite NUMERIC(14, 3) NOT NULL,
    unite VARCHAR,
    lot_id BIGINT REFERENCES lots(id) ON DELETE SET NULL,
    magasin VARCHAR,
    date_mouvement TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
CREATE INDEX IF NOT EXISTS idx_stock_lot_id ON stock(lot_id);

CREATE TABLE IF NOT EXISTS operations_caisse (
    id BIGSERIAL PRIMARY KEY,
    utilisateur VARCHAR,
    type_operation operation_type NOT NULL,
    montant NUMERIC(14, 2) NOT NULL CHECK (montant >= 0),
    solde_apres NUMERIC(14, 2) NOT NULL,
    producteur VARCHAR,
    description TEXT,
    date_operation TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS cheques (
    id BIGSERIAL PRIMARY KEY,
    numero_cheque VARCHAR NOT NULL,
    banque VARCHAR,
    montant NUMERIC(14, 2) NOT NULL,
    emetteur VARCHAR,
    utilisateur VARCHAR,
    date_enregistrement TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS messages (
    id BIGSERIAL PRIMARY KEY,
    sender VARCHAR NOT NULL,
    recipient VARCHAR NOT NULL,
    type VARCHAR,
    subject VARCHAR,
    body TEXT,
    date_sent TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
CREATE INDEX IF NOT EXISTS idx_messages_recipient_date ON messages(recipient, date_sent DESC);

CREATE TABLE IF NOT EXISTS validations (
    id BIGSERIAL PRIMARY KEY,
    type_validation VARCHAR NOT NULL,
    reference VARCHAR,
    demandeur VARCHAR,
    details TEXT,
    status validation_status NOT NULL DEFAULT 'pending',
    rejection_reason TEXT,
    validated_by VARCHAR,
    date TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS audit_log (
    id BIGSERIAL PRIMARY KEY,
    utilisateur VARCHAR,
    action VARCHAR NOT NULL,
    table_cible VARCHAR,
    date_action TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
"#;

const DOWN: &str = r#"
DROP TABLE IF EXISTS audit_log;
DROP TABLE IF EXISTS validations;
DROP TABLE IF EXISTS messages;
DROP TABLE IF EXISTS cheques;
DROP TABLE IF EXISTS operations_caisse;
DROP TABLE IF EXISTS stock;
DROP TABLE IF EXISTS lots;
DROP TABLE IF EXISTS producteurs;
DROP TYPE IF EXISTS validation_status;
DROP TYPE IF EXISTS movement_type;
DROP TYPE IF EXISTS operation_type;
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

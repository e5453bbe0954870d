//! Database migration management for the PostgreSQL backend.
//!
//! This module uses embedded migrations for single-binary deployment.

use sqlx_core::migrate::{Migration, MigrationType, Migrator};
use sqlx_postgres::PgPool;
use std::borrow::Cow;
use tracing::{info, instrument};

use crate::error::{PostgresError, Result};

/// Embedded migrations as (version, description, sql), in chronological order.
///
/// To add a migration, create the SQL file in `migrations/` and append an
/// entry here.
macro_rules! embedded_migrations {
    () => {
        &[(
            20260101000001i64,
            "kyber_client_secret",
            include_str!("../../migrations/20260101000001_kyber_client_secret.sql"),
        )]
    };
}

/// Builds a vector of Migration structs from embedded migration data.
fn build_migrations() -> Vec<Migration> {
    embedded_migrations!()
        .iter()
        .map(|(version, description, sql)| Migration {
            version: *version,
            description: Cow::Borrowed(description),
            migration_type: MigrationType::Simple,
            sql: Cow::Borrowed(sql),
            checksum: Cow::Borrowed(&[]), // Empty checksum for embedded migrations
            no_tx: false,
        })
        .collect()
}

/// Runs all pending database migrations.
///
/// Applied migrations are tracked in the `_sqlx_migrations` table, so running
/// this on every startup is safe.
///
/// # Errors
///
/// Returns an error if a migration fails to execute.
#[instrument(skip(pool))]
pub async fn run(pool: &PgPool) -> Result<()> {
    let migrations = build_migrations();
    info!("Applying {} embedded migration(s)", migrations.len());

    let migrator = Migrator {
        migrations: Cow::Owned(migrations),
        ignore_missing: false,
        locking: true,
        no_tx: false,
    };

    migrator
        .run(pool)
        .await
        .map_err(|e| PostgresError::Migration(format!("Migration failed: {e}")))?;

    info!("Database migrations completed successfully");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_ordered() {
        let migrations = build_migrations();
        assert!(!migrations.is_empty());
        assert!(
            migrations
                .windows(2)
                .all(|pair| pair[0].version < pair[1].version)
        );
    }

    #[test]
    fn test_client_secret_table_is_created() {
        let migrations = build_migrations();
        assert!(
            migrations
                .iter()
                .any(|m| m.sql.contains("CREATE TABLE IF NOT EXISTS kyber_client_secret"))
        );
    }
}

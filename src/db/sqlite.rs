use crate::db::models::{AccountSummary, KeyRow, RemovedAccount};
use crate::db::schema::SQLITE_INIT;
use crate::error::AdminError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

/// Storage for accounts and their public keys.
///
/// One pool per CLI invocation; `connect` creates the database file if
/// it does not exist and applies the bundled DDL. Multi-statement
/// operations run inside an explicit transaction so that a failure on
/// any statement leaves both tables unchanged.
#[derive(Clone)]
pub struct AccountStore {
    pool: SqlitePool,
}

impl AccountStore {
    pub async fn connect(database_url: &str) -> Result<Self, AdminError> {
        let connect_opts =
            SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let store = Self { pool };
        store.init_schema().await?;
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), AdminError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Per-account key counts via a left join on the identifier column.
    /// Ordered by identifier so listings are reproducible.
    pub async fn list_accounts(&self) -> Result<Vec<AccountSummary>, AdminError> {
        let rows = sqlx::query_as::<_, AccountSummary>(
            r#"SELECT a.id AS uuid, a.identifier, COALESCE(COUNT(pk.id), 0) AS key_count
               FROM accounts a
               LEFT JOIN public_keys pk ON a.identifier = pk.identifier
               GROUP BY a.id, a.identifier
               ORDER BY a.identifier"#,
        )
        .fetch_all(&self.pool)
        .await?;
        debug!(accounts = rows.len(), "listed accounts");
        Ok(rows)
    }

    /// The identifier for an account uuid, if the account exists.
    pub async fn find_identifier(&self, uuid: &str) -> Result<Option<String>, AdminError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT identifier FROM accounts WHERE id = ?")
                .bind(uuid)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(identifier,)| identifier))
    }

    /// All public keys joined to the account with the given uuid.
    pub async fn list_keys(&self, uuid: &str) -> Result<Vec<KeyRow>, AdminError> {
        let rows = sqlx::query_as::<_, KeyRow>(
            r#"SELECT pk.id AS key_id, pk.public_key
               FROM public_keys pk
               JOIN accounts a ON pk.identifier = a.identifier
               WHERE a.id = ?
               ORDER BY pk.id"#,
        )
        .bind(uuid)
        .fetch_all(&self.pool)
        .await?;
        debug!(uuid, keys = rows.len(), "listed keys");
        Ok(rows)
    }

    /// Insert a new account. A unique-constraint hit on `identifier`
    /// surfaces as `AdminError::DuplicateIdentifier`; the failed insert
    /// leaves the table unchanged.
    pub async fn insert_account(&self, uuid: &str, identifier: &str) -> Result<(), AdminError> {
        let result = sqlx::query("INSERT INTO accounts (id, identifier) VALUES (?, ?)")
            .bind(uuid)
            .bind(identifier)
            .execute(&self.pool)
            .await;
        match result {
            Ok(_) => {
                debug!(uuid, identifier, "inserted account");
                Ok(())
            }
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(AdminError::DuplicateIdentifier(identifier.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Attach a public key to an account identifier. The registration
    /// side of the system writes these rows; the CLI uses this from its
    /// test suite to stage fixtures.
    pub async fn link_key(&self, identifier: &str, public_key: &str) -> Result<(), AdminError> {
        sqlx::query("INSERT INTO public_keys (identifier, public_key) VALUES (?, ?)")
            .bind(identifier)
            .bind(public_key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Delete an account and every key sharing its identifier, in one
    /// transaction. Returns `None` (nothing persisted) when no account
    /// has the given uuid.
    pub async fn remove_account(&self, uuid: &str) -> Result<Option<RemovedAccount>, AdminError> {
        let mut tx = self.pool.begin().await?;

        let row: Option<(String,)> =
            sqlx::query_as("SELECT identifier FROM accounts WHERE id = ?")
                .bind(uuid)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((identifier,)) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        let keys_deleted = sqlx::query("DELETE FROM public_keys WHERE identifier = ?")
            .bind(&identifier)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let accounts_deleted = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(uuid)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        if accounts_deleted == 0 {
            // unreachable after the in-transaction lookup; guard anyway
            tx.rollback().await?;
            return Err(AdminError::Database(sqlx::Error::RowNotFound));
        }

        tx.commit().await?;
        debug!(uuid, identifier, keys_deleted, "removed account");
        Ok(Some(RemovedAccount {
            identifier,
            keys_deleted,
        }))
    }

    /// Delete every key for the account's identifier, leaving the
    /// account row untouched. Returns `None` when no account has the
    /// given uuid, `Some(0)` when the account had no keys. Safe to run
    /// repeatedly.
    pub async fn disconnect_keys(&self, uuid: &str) -> Result<Option<u64>, AdminError> {
        let mut tx = self.pool.begin().await?;

        let row: Option<(String,)> =
            sqlx::query_as("SELECT identifier FROM accounts WHERE id = ?")
                .bind(uuid)
                .fetch_optional(&mut *tx)
                .await?;
        let Some((identifier,)) = row else {
            tx.rollback().await?;
            return Ok(None);
        };

        let deleted = sqlx::query("DELETE FROM public_keys WHERE identifier = ?")
            .bind(&identifier)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        debug!(uuid, identifier, deleted, "disconnected keys");
        Ok(Some(deleted))
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

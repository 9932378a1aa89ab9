//! # lingo-db
//!
//! libSQL content store for Lingo.
//!
//! Holds the relational content graph (languages, situations, communications,
//! prompts, utterances, context annotations, context types, and their
//! localized texts), exposes administrative CRUD and bundle import on
//! [`service::ContentService`], and implements
//! [`lingo_core::store::ContentStore`] so the core resolver can read from it.
//!
//! Uses the `libsql` crate for local files, `:memory:` databases in tests,
//! and Turso embedded replicas when a remote primary is configured.

pub mod error;
pub mod helpers;
pub mod import;
mod migrations;
pub mod repos;
pub mod retry;
pub mod service;
mod store;
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use libsql::params::IntoParams;

/// Central database handle for all Lingo content operations.
pub struct LingoDb {
    db: libsql::Database,
    conn: libsql::Connection,
    synced: bool,
}

impl LingoDb {
    /// Open a local-only database at the given path (no cloud sync).
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        Self::init(db, conn, false).await
    }

    /// Open an embedded replica at `local_replica_path` synced from `remote_url`.
    ///
    /// Pulls the latest remote state before running migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the replica cannot be built, synced, or migrated.
    pub async fn open_synced(
        local_replica_path: &str,
        remote_url: &str,
        auth_token: &str,
        read_your_writes: bool,
    ) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote_replica(
            local_replica_path,
            remote_url.to_string(),
            auth_token.to_string(),
        )
        .read_your_writes(read_your_writes)
        .build()
        .await?;
        db.sync().await?;
        let conn = db.connect()?;
        Self::init(db, conn, true).await
    }

    async fn init(
        db: libsql::Database,
        conn: libsql::Connection,
        synced: bool,
    ) -> Result<Self, DatabaseError> {
        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let lingo_db = Self { db, conn, synced };
        lingo_db.run_migrations().await?;
        Ok(lingo_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Whether this handle is an embedded replica of a remote primary.
    #[must_use]
    pub const fn is_synced_replica(&self) -> bool {
        self.synced
    }

    /// Pull remote changes into the embedded replica. No-op for local databases.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the sync fails.
    pub async fn sync(&self) -> Result<(), DatabaseError> {
        if self.synced {
            self.db.sync().await?;
        }
        Ok(())
    }

    /// Run a query and return its rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the query fails.
    pub async fn query(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<libsql::Rows, DatabaseError> {
        Ok(self.conn.query(sql, params).await?)
    }

    /// Execute a statement and return the number of affected rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` if the statement fails.
    pub async fn execute(&self, sql: &str, params: impl IntoParams) -> Result<u64, DatabaseError> {
        Ok(self.conn.execute(sql, params).await?)
    }

    /// Execute an `INSERT ... RETURNING id` statement and return the new row id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the statement returns no row.
    pub async fn insert_returning_id(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<i64, DatabaseError> {
        let mut rows = self.conn.query(sql, params).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }
}

//! Service layer over the content database.
//!
//! `ContentService` wraps `LingoDb` (raw database access). All repo methods
//! are implemented as `impl ContentService`, and so is
//! [`lingo_core::store::ContentStore`].

use lingo_config::LingoConfig;

use crate::LingoDb;
use crate::error::DatabaseError;

/// Content administration and read access on a single libSQL connection.
pub struct ContentService {
    db: LingoDb,
}

impl ContentService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = LingoDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create a service backed by a synced Turso embedded replica.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the replica cannot be opened.
    pub async fn new_synced(
        local_replica_path: &str,
        remote_url: &str,
        auth_token: &str,
        read_your_writes: bool,
    ) -> Result<Self, DatabaseError> {
        let db =
            LingoDb::open_synced(local_replica_path, remote_url, auth_token, read_your_writes)
                .await?;
        Ok(Self { db })
    }

    /// Open whichever backend the configuration selects.
    ///
    /// A configured remote URL opens an embedded replica at `database.path`;
    /// otherwise `database.path` is opened as a local file.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &LingoConfig) -> Result<Self, DatabaseError> {
        let database = &config.database;
        if database.is_remote() {
            tracing::debug!(path = %database.path, url = %database.url, "opening embedded replica");
            Self::new_synced(
                &database.path,
                &database.url,
                &database.auth_token,
                database.read_your_writes,
            )
            .await
        } else {
            tracing::debug!(path = %database.path, "opening local database");
            Self::new_local(&database.path).await
        }
    }

    /// Create from an existing `LingoDb` (for testing).
    #[must_use]
    pub const fn from_db(db: LingoDb) -> Self {
        Self { db }
    }

    /// Access the underlying database.
    #[must_use]
    pub const fn db(&self) -> &LingoDb {
        &self.db
    }

    /// Pull remote changes when running as an embedded replica.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the sync fails.
    pub async fn sync(&self) -> Result<(), DatabaseError> {
        self.db.sync().await
    }
}

//! Context annotation and context type repository.
//!
//! Annotations carry a free-text `context_type` label; context types are
//! looked up by that label. Nothing links the two at the row level.

use chrono::Utc;
use lingo_core::entities::{ContextAnnotation, ContextType};

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::ContentService;

fn row_to_annotation(row: &libsql::Row) -> Result<ContextAnnotation, DatabaseError> {
    Ok(ContextAnnotation {
        id: row.get::<i64>(0)?,
        utterance_id: row.get::<i64>(1)?,
        context_type: row.get::<String>(2)?,
    })
}

fn row_to_context_type(row: &libsql::Row) -> Result<ContextType, DatabaseError> {
    Ok(ContextType {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        last_updated: parse_datetime(&row.get::<String>(2)?)?,
    })
}

impl ContentService {
    /// Annotate an utterance. The label need not name an existing context type.
    pub async fn create_context(
        &self,
        utterance_id: i64,
        context_type: &str,
    ) -> Result<ContextAnnotation, DatabaseError> {
        if self.get_utterance(utterance_id).await?.is_none() {
            return Err(DatabaseError::InvalidState(format!(
                "utterance {utterance_id} does not exist"
            )));
        }
        let id = self
            .db()
            .insert_returning_id(
                "INSERT INTO contexts (utterance_id, context_type) VALUES (?1, ?2) RETURNING id",
                libsql::params![utterance_id, context_type],
            )
            .await?;
        Ok(ContextAnnotation {
            id,
            utterance_id,
            context_type: context_type.to_string(),
        })
    }

    pub async fn list_utterance_contexts(
        &self,
        utterance_id: i64,
    ) -> Result<Vec<ContextAnnotation>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                "SELECT id, utterance_id, context_type FROM contexts
                 WHERE utterance_id = ?1 ORDER BY id",
                [utterance_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_annotation(&row)?);
        }
        Ok(results)
    }

    pub async fn delete_context(&self, id: i64) -> Result<bool, DatabaseError> {
        let affected = self
            .db()
            .execute("DELETE FROM contexts WHERE id = ?1", [id])
            .await?;
        Ok(affected > 0)
    }

    /// Create a context type.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the name is already taken.
    pub async fn create_context_type(&self, name: &str) -> Result<ContextType, DatabaseError> {
        if !self.context_types_by_name(name).await?.is_empty() {
            return Err(DatabaseError::InvalidState(format!(
                "context type '{name}' already exists"
            )));
        }
        let now = Utc::now();
        let id = self
            .db()
            .insert_returning_id(
                "INSERT INTO context_types (name, last_updated) VALUES (?1, ?2) RETURNING id",
                libsql::params![name, now.to_rfc3339()],
            )
            .await?;
        Ok(ContextType {
            id,
            name: name.to_string(),
            last_updated: now,
        })
    }

    pub async fn get_context_type(&self, id: i64) -> Result<Option<ContextType>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                "SELECT id, name, last_updated FROM context_types WHERE id = ?1",
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_context_type(&row)?)),
            None => Ok(None),
        }
    }

    /// Context types whose name equals `name`, ordered by id.
    pub async fn context_types_by_name(
        &self,
        name: &str,
    ) -> Result<Vec<ContextType>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                "SELECT id, name, last_updated FROM context_types WHERE name = ?1 ORDER BY id",
                [name],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_context_type(&row)?);
        }
        Ok(results)
    }

    pub async fn list_context_types(&self) -> Result<Vec<ContextType>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                "SELECT id, name, last_updated FROM context_types ORDER BY id",
                (),
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_context_type(&row)?);
        }
        Ok(results)
    }

    pub async fn delete_context_type(&self, id: i64) -> Result<bool, DatabaseError> {
        let affected = self
            .db()
            .execute("DELETE FROM context_types WHERE id = ?1", [id])
            .await?;
        Ok(affected > 0)
    }
}

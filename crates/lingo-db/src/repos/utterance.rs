//! Utterance repository: CRUD and per-communication listing.

use chrono::Utc;
use lingo_core::entities::Utterance;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::ContentService;

const SELECT_UTTERANCE: &str = "SELECT u.id, u.communication_id, u.last_updated, l.code, u.transliteration, u.content
     FROM utterances u
     JOIN languages l ON l.id = u.language_id";

fn row_to_utterance(row: &libsql::Row) -> Result<Utterance, DatabaseError> {
    Ok(Utterance {
        id: row.get::<i64>(0)?,
        communication_id: row.get::<i64>(1)?,
        last_updated: parse_datetime(&row.get::<String>(2)?)?,
        language: row.get::<String>(3)?,
        transliteration: row.get::<String>(4)?,
        content: row.get::<String>(5)?,
    })
}

impl ContentService {
    /// Create an utterance of `communication_id` in `language_code`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` for an unknown language code or
    /// a missing communication.
    pub async fn create_utterance(
        &self,
        communication_id: i64,
        language_code: &str,
        content: &str,
        transliteration: &str,
    ) -> Result<Utterance, DatabaseError> {
        let language_id = self.language_id(language_code).await?;
        if self.get_communication(communication_id).await?.is_none() {
            return Err(DatabaseError::InvalidState(format!(
                "communication {communication_id} does not exist"
            )));
        }
        let now = Utc::now();
        let id = self
            .db()
            .insert_returning_id(
                "INSERT INTO utterances (communication_id, language_id, transliteration, content, last_updated)
                 VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
                libsql::params![
                    communication_id,
                    language_id,
                    transliteration,
                    content,
                    now.to_rfc3339()
                ],
            )
            .await?;
        Ok(Utterance {
            id,
            communication_id,
            last_updated: now,
            language: language_code.to_string(),
            transliteration: transliteration.to_string(),
            content: content.to_string(),
        })
    }

    pub async fn get_utterance(&self, id: i64) -> Result<Option<Utterance>, DatabaseError> {
        let mut rows = self
            .db()
            .query(&format!("{SELECT_UTTERANCE} WHERE u.id = ?1"), [id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_utterance(&row)?)),
            None => Ok(None),
        }
    }

    /// Every utterance of a communication, all languages, in creation order.
    pub async fn list_communication_utterances(
        &self,
        communication_id: i64,
    ) -> Result<Vec<Utterance>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                &format!("{SELECT_UTTERANCE} WHERE u.communication_id = ?1 ORDER BY u.id"),
                [communication_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_utterance(&row)?);
        }
        Ok(results)
    }

    pub async fn delete_utterance(&self, id: i64) -> Result<bool, DatabaseError> {
        let affected = self
            .db()
            .execute("DELETE FROM utterances WHERE id = ?1", [id])
            .await?;
        Ok(affected > 0)
    }
}

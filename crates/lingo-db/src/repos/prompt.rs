//! Prompt repository: CRUD and per-situation listing.

use chrono::Utc;
use lingo_core::entities::Prompt;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::ContentService;

fn row_to_prompt(row: &libsql::Row) -> Result<Prompt, DatabaseError> {
    Ok(Prompt {
        id: row.get::<i64>(0)?,
        last_updated: parse_datetime(&row.get::<String>(1)?)?,
    })
}

impl ContentService {
    pub async fn create_prompt(&self) -> Result<Prompt, DatabaseError> {
        let now = Utc::now();
        let id = self
            .db()
            .insert_returning_id(
                "INSERT INTO prompts (last_updated) VALUES (?1) RETURNING id",
                [now.to_rfc3339()],
            )
            .await?;
        Ok(Prompt {
            id,
            last_updated: now,
        })
    }

    pub async fn get_prompt(&self, id: i64) -> Result<Option<Prompt>, DatabaseError> {
        let mut rows = self
            .db()
            .query("SELECT id, last_updated FROM prompts WHERE id = ?1", [id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_prompt(&row)?)),
            None => Ok(None),
        }
    }

    /// Prompts linked to a situation, in link order.
    pub async fn list_situation_prompts(
        &self,
        situation_id: i64,
    ) -> Result<Vec<Prompt>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                "SELECT p.id, p.last_updated
                 FROM situation_prompts sp
                 JOIN prompts p ON p.id = sp.prompt_id
                 WHERE sp.situation_id = ?1
                 ORDER BY sp.rowid",
                [situation_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_prompt(&row)?);
        }
        Ok(results)
    }

    pub async fn delete_prompt(&self, id: i64) -> Result<bool, DatabaseError> {
        let affected = self
            .db()
            .execute("DELETE FROM prompts WHERE id = ?1", [id])
            .await?;
        Ok(affected > 0)
    }
}

//! Localized description repository.
//!
//! A description is a `localized_texts` row attached to exactly one owner
//! through that owner's association table. Removing the association (or the
//! owner) removes the text via the orphan triggers in the schema.

use lingo_core::entities::{DescriptionOwner, LocalizedText};

use crate::error::DatabaseError;
use crate::helpers::{description_table, owner_table, row_to_localized_text};
use crate::service::ContentService;

impl ContentService {
    /// Attach a description in `language_code` to `owner`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the language code is unknown
    /// or the owner does not exist.
    pub async fn add_description(
        &self,
        owner: DescriptionOwner,
        language_code: &str,
        content: &str,
    ) -> Result<LocalizedText, DatabaseError> {
        let language_id = self.language_id(language_code).await?;
        self.ensure_owner_exists(owner).await?;

        let text_id = self
            .db()
            .insert_returning_id(
                "INSERT INTO localized_texts (language_id, content) VALUES (?1, ?2) RETURNING id",
                libsql::params![language_id, content],
            )
            .await?;

        let (table, column) = description_table(owner);
        self.db()
            .execute(
                &format!("INSERT INTO {table} ({column}, text_id) VALUES (?1, ?2)"),
                libsql::params![owner.id(), text_id],
            )
            .await?;

        Ok(LocalizedText {
            id: text_id,
            language: language_code.to_string(),
            content: content.to_string(),
        })
    }

    /// Every description of `owner`, all languages, in attachment order.
    pub async fn list_descriptions(
        &self,
        owner: DescriptionOwner,
    ) -> Result<Vec<LocalizedText>, DatabaseError> {
        let (table, column) = description_table(owner);
        let mut rows = self
            .db()
            .query(
                &format!(
                    "SELECT t.id, l.code, t.content
                     FROM {table} d
                     JOIN localized_texts t ON t.id = d.text_id
                     JOIN languages l ON l.id = t.language_id
                     WHERE d.{column} = ?1
                     ORDER BY d.rowid"
                ),
                [owner.id()],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_localized_text(&row)?);
        }
        Ok(results)
    }

    /// Detach and delete a single description.
    pub async fn delete_description(
        &self,
        owner: DescriptionOwner,
        text_id: i64,
    ) -> Result<bool, DatabaseError> {
        let (table, column) = description_table(owner);
        let affected = self
            .db()
            .execute(
                &format!("DELETE FROM {table} WHERE {column} = ?1 AND text_id = ?2"),
                libsql::params![owner.id(), text_id],
            )
            .await?;
        Ok(affected > 0)
    }

    async fn ensure_owner_exists(&self, owner: DescriptionOwner) -> Result<(), DatabaseError> {
        let table = owner_table(owner);
        let mut rows = self
            .db()
            .query(&format!("SELECT 1 FROM {table} WHERE id = ?1"), [owner.id()])
            .await?;
        if rows.next().await?.is_none() {
            return Err(DatabaseError::InvalidState(format!("{owner} does not exist")));
        }
        Ok(())
    }
}

//! Language repository: CRUD keyed by language code.

use lingo_core::entities::Language;

use crate::error::DatabaseError;
use crate::service::ContentService;

fn row_to_language(row: &libsql::Row) -> Result<Language, DatabaseError> {
    Ok(Language {
        id: row.get::<i64>(0)?,
        code: row.get::<String>(1)?,
        name: row.get::<String>(2)?,
    })
}

impl ContentService {
    /// Create a language. Codes are unique.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the code already exists.
    pub async fn create_language(&self, code: &str, name: &str) -> Result<Language, DatabaseError> {
        if self.get_language(code).await?.is_some() {
            return Err(DatabaseError::InvalidState(format!(
                "language '{code}' already exists"
            )));
        }
        let id = self
            .db()
            .insert_returning_id(
                "INSERT INTO languages (code, name) VALUES (?1, ?2) RETURNING id",
                libsql::params![code, name],
            )
            .await?;
        Ok(Language {
            id,
            code: code.to_string(),
            name: name.to_string(),
        })
    }

    pub async fn get_language(&self, code: &str) -> Result<Option<Language>, DatabaseError> {
        let mut rows = self
            .db()
            .query("SELECT id, code, name FROM languages WHERE code = ?1", [code])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_language(&row)?)),
            None => Ok(None),
        }
    }

    /// All languages ordered by code.
    pub async fn list_languages(&self) -> Result<Vec<Language>, DatabaseError> {
        let mut rows = self
            .db()
            .query("SELECT id, code, name FROM languages ORDER BY code", ())
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_language(&row)?);
        }
        Ok(results)
    }

    /// Delete a language and, by cascade, everything written in it.
    pub async fn delete_language(&self, code: &str) -> Result<bool, DatabaseError> {
        let affected = self
            .db()
            .execute("DELETE FROM languages WHERE code = ?1", [code])
            .await?;
        Ok(affected > 0)
    }

    /// Resolve a language code to its row id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` for an unknown code.
    pub(crate) async fn language_id(&self, code: &str) -> Result<i64, DatabaseError> {
        self.get_language(code)
            .await?
            .map(|lang| lang.id)
            .ok_or_else(|| DatabaseError::InvalidState(format!("unknown language code '{code}'")))
    }
}

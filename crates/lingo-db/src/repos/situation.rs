//! Situation repository: CRUD plus target-language, prompt and
//! communication associations.

use chrono::Utc;
use lingo_core::entities::Situation;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::ContentService;

impl ContentService {
    pub async fn create_situation(&self, image_url: &str) -> Result<Situation, DatabaseError> {
        let now = Utc::now();
        let id = self
            .db()
            .insert_returning_id(
                "INSERT INTO situations (image_url, last_updated) VALUES (?1, ?2) RETURNING id",
                libsql::params![image_url, now.to_rfc3339()],
            )
            .await?;
        Ok(Situation {
            id,
            last_updated: now,
            image_url: image_url.to_string(),
            target_languages: Vec::new(),
        })
    }

    /// Look up a situation with its target languages.
    pub async fn get_situation(&self, id: i64) -> Result<Option<Situation>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                "SELECT id, image_url, last_updated FROM situations WHERE id = ?1",
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(self.row_to_situation(&row).await?)),
            None => Ok(None),
        }
    }

    /// All situations ordered by id.
    pub async fn list_situations(&self) -> Result<Vec<Situation>, DatabaseError> {
        let rows = self
            .db()
            .query(
                "SELECT id, image_url, last_updated FROM situations ORDER BY id",
                (),
            )
            .await?;
        self.collect_situations(rows).await
    }

    /// Situations that support `code` as a target language, ordered by id.
    pub async fn list_situations_for_target(
        &self,
        code: &str,
    ) -> Result<Vec<Situation>, DatabaseError> {
        let rows = self
            .db()
            .query(
                "SELECT s.id, s.image_url, s.last_updated
                 FROM situations s
                 JOIN situation_target_languages stl ON stl.situation_id = s.id
                 JOIN languages l ON l.id = stl.language_id
                 WHERE l.code = ?1
                 ORDER BY s.id",
                [code],
            )
            .await?;
        self.collect_situations(rows).await
    }

    /// Delete a situation. Its links and descriptions go with it; linked
    /// prompts and communications are kept.
    pub async fn delete_situation(&self, id: i64) -> Result<bool, DatabaseError> {
        let affected = self
            .db()
            .execute("DELETE FROM situations WHERE id = ?1", [id])
            .await?;
        Ok(affected > 0)
    }

    /// Mark `code` as a target language of the situation.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` for an unknown language code.
    pub async fn add_target_language(
        &self,
        situation_id: i64,
        code: &str,
    ) -> Result<(), DatabaseError> {
        let language_id = self.language_id(code).await?;
        self.db()
            .execute(
                "INSERT OR IGNORE INTO situation_target_languages (situation_id, language_id)
                 VALUES (?1, ?2)",
                libsql::params![situation_id, language_id],
            )
            .await?;
        self.touch_situation(situation_id).await
    }

    pub async fn link_communication(
        &self,
        situation_id: i64,
        communication_id: i64,
    ) -> Result<(), DatabaseError> {
        self.db()
            .execute(
                "INSERT OR IGNORE INTO situation_communications (situation_id, communication_id)
                 VALUES (?1, ?2)",
                libsql::params![situation_id, communication_id],
            )
            .await?;
        self.touch_situation(situation_id).await
    }

    pub async fn link_prompt(&self, situation_id: i64, prompt_id: i64) -> Result<(), DatabaseError> {
        self.db()
            .execute(
                "INSERT OR IGNORE INTO situation_prompts (situation_id, prompt_id)
                 VALUES (?1, ?2)",
                libsql::params![situation_id, prompt_id],
            )
            .await?;
        self.touch_situation(situation_id).await
    }

    async fn touch_situation(&self, id: i64) -> Result<(), DatabaseError> {
        self.db()
            .execute(
                "UPDATE situations SET last_updated = ?1 WHERE id = ?2",
                libsql::params![Utc::now().to_rfc3339(), id],
            )
            .await?;
        Ok(())
    }

    async fn target_languages(&self, situation_id: i64) -> Result<Vec<String>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                "SELECT l.code
                 FROM situation_target_languages stl
                 JOIN languages l ON l.id = stl.language_id
                 WHERE stl.situation_id = ?1
                 ORDER BY stl.rowid",
                [situation_id],
            )
            .await?;
        let mut codes = Vec::new();
        while let Some(row) = rows.next().await? {
            codes.push(row.get::<String>(0)?);
        }
        Ok(codes)
    }

    async fn row_to_situation(&self, row: &libsql::Row) -> Result<Situation, DatabaseError> {
        let id = row.get::<i64>(0)?;
        Ok(Situation {
            id,
            image_url: row.get::<String>(1)?,
            last_updated: parse_datetime(&row.get::<String>(2)?)?,
            target_languages: self.target_languages(id).await?,
        })
    }

    async fn collect_situations(
        &self,
        mut rows: libsql::Rows,
    ) -> Result<Vec<Situation>, DatabaseError> {
        // Drain the cursor before issuing the per-situation language queries.
        let mut heads = Vec::new();
        while let Some(row) = rows.next().await? {
            heads.push((
                row.get::<i64>(0)?,
                row.get::<String>(1)?,
                parse_datetime(&row.get::<String>(2)?)?,
            ));
        }
        let mut results = Vec::with_capacity(heads.len());
        for (id, image_url, last_updated) in heads {
            results.push(Situation {
                id,
                image_url,
                last_updated,
                target_languages: self.target_languages(id).await?,
            });
        }
        Ok(results)
    }
}

//! Communication repository: CRUD and per-situation listing.

use chrono::Utc;
use lingo_core::entities::Communication;

use crate::error::DatabaseError;
use crate::helpers::{get_bool, parse_datetime};
use crate::service::ContentService;

fn row_to_communication(row: &libsql::Row) -> Result<Communication, DatabaseError> {
    Ok(Communication {
        id: row.get::<i64>(0)?,
        should_be_expressed: get_bool(row, 1)?,
        should_be_understood: get_bool(row, 2)?,
        last_updated: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl ContentService {
    pub async fn create_communication(
        &self,
        should_be_expressed: bool,
        should_be_understood: bool,
    ) -> Result<Communication, DatabaseError> {
        let now = Utc::now();
        let id = self
            .db()
            .insert_returning_id(
                "INSERT INTO communications (should_be_expressed, should_be_understood, last_updated)
                 VALUES (?1, ?2, ?3) RETURNING id",
                libsql::params![
                    i64::from(should_be_expressed),
                    i64::from(should_be_understood),
                    now.to_rfc3339()
                ],
            )
            .await?;
        Ok(Communication {
            id,
            last_updated: now,
            should_be_expressed,
            should_be_understood,
        })
    }

    pub async fn get_communication(&self, id: i64) -> Result<Option<Communication>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                "SELECT id, should_be_expressed, should_be_understood, last_updated
                 FROM communications WHERE id = ?1",
                [id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_communication(&row)?)),
            None => Ok(None),
        }
    }

    /// Communications linked to a situation, in link order.
    pub async fn list_situation_communications(
        &self,
        situation_id: i64,
    ) -> Result<Vec<Communication>, DatabaseError> {
        let mut rows = self
            .db()
            .query(
                "SELECT c.id, c.should_be_expressed, c.should_be_understood, c.last_updated
                 FROM situation_communications sc
                 JOIN communications c ON c.id = sc.communication_id
                 WHERE sc.situation_id = ?1
                 ORDER BY sc.rowid",
                [situation_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_communication(&row)?);
        }
        Ok(results)
    }

    /// Delete a communication with its utterances and descriptions.
    pub async fn delete_communication(&self, id: i64) -> Result<bool, DatabaseError> {
        let affected = self
            .db()
            .execute("DELETE FROM communications WHERE id = ?1", [id])
            .await?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::test_service_with_languages;

    #[tokio::test]
    async fn flags_round_trip() {
        let svc = test_service_with_languages(&[]).await;
        let created = svc.create_communication(true, false).await.unwrap();
        let fetched = svc.get_communication(created.id).await.unwrap().unwrap();
        assert_eq!(created, fetched);
        assert!(fetched.should_be_expressed);
        assert!(!fetched.should_be_understood);
    }

    #[tokio::test]
    async fn listing_follows_link_order() {
        let svc = test_service_with_languages(&[]).await;
        let s = svc.create_situation("").await.unwrap();
        let first = svc.create_communication(true, true).await.unwrap();
        let second = svc.create_communication(false, true).await.unwrap();
        svc.link_communication(s.id, second.id).await.unwrap();
        svc.link_communication(s.id, first.id).await.unwrap();

        let ids: Vec<i64> = svc
            .list_situation_communications(s.id)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![second.id, first.id]);
    }

    #[tokio::test]
    async fn communication_shared_between_situations() {
        let svc = test_service_with_languages(&[]).await;
        let a = svc.create_situation("a").await.unwrap();
        let b = svc.create_situation("b").await.unwrap();
        let comm = svc.create_communication(true, true).await.unwrap();
        svc.link_communication(a.id, comm.id).await.unwrap();
        svc.link_communication(b.id, comm.id).await.unwrap();

        assert_eq!(svc.list_situation_communications(a.id).await.unwrap().len(), 1);
        assert_eq!(svc.list_situation_communications(b.id).await.unwrap().len(), 1);

        assert!(svc.delete_communication(comm.id).await.unwrap());
        assert!(svc.list_situation_communications(a.id).await.unwrap().is_empty());
    }
}

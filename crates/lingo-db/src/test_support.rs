//! Shared test utilities for lingo-db tests.

#[cfg(test)]
pub(crate) mod helpers {
    use crate::LingoDb;
    use crate::service::ContentService;

    /// Create an in-memory `ContentService`.
    pub async fn test_service() -> ContentService {
        let db = LingoDb::open_local(":memory:").await.unwrap();
        ContentService::from_db(db)
    }

    /// Create an in-memory `ContentService` with the given language codes registered.
    pub async fn test_service_with_languages(codes: &[&str]) -> ContentService {
        let svc = test_service().await;
        for code in codes {
            svc.create_language(code, &code.to_uppercase()).await.unwrap();
        }
        svc
    }
}

use lingo_config::LingoConfig;
use lingo_core::errors::ContentError;
use lingo_db::service::ContentService;

pub struct AppContext {
    pub service: ContentService,
    pub config: LingoConfig,
}

impl AppContext {
    /// Open the configured content store.
    ///
    /// An unopenable store is a transient store failure; the database detail
    /// stays in the error source and is only logged.
    pub async fn init(config: LingoConfig) -> anyhow::Result<Self> {
        let service = ContentService::from_config(&config).await.map_err(|error| {
            tracing::debug!(path = %config.database.path, "failed to open content database");
            ContentError::store(error)
        })?;
        Ok(Self { service, config })
    }
}

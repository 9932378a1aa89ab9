//! Transient store error detection and retry with exponential backoff.
//!
//! The content engine never retries on its own. Calling layers (the CLI)
//! wrap whole operations in [`with_retry`], which is safe because every
//! content read is stateless.

use std::future::Future;
use std::time::Duration;

use lingo_config::RetryConfig;
use lingo_core::errors::ContentError;

use crate::error::DatabaseError;

/// Detect libSQL errors that resolve on their own.
///
/// Lock contention on a local file, and Turso node recycling for replicas.
/// The predicate is intentionally narrow to avoid retrying genuine SQL or
/// constraint errors.
pub fn is_transient_libsql_error(e: &libsql::Error) -> bool {
    let msg = e.to_string();
    msg.contains("database is locked")
        || msg.contains("unable to acquire shared lock")
        || msg.contains("deletion must be in progress")
}

/// Whether a content operation failed in a way worth retrying.
///
/// Only store failures qualify. Failures wrapping a `DatabaseError` must also
/// be transient by [`DatabaseError::is_transient`]; other store errors are
/// assumed retryable.
#[must_use]
pub fn is_retryable_content_error(e: &ContentError) -> bool {
    match e {
        ContentError::TransientStoreFailure(source) => source
            .downcast_ref::<DatabaseError>()
            .is_none_or(DatabaseError::is_transient),
        ContentError::MissingParameter(_) | ContentError::NotFound(_) => false,
    }
}

/// Delay before retry number `retry` (0-based): base * 2^retry, capped.
#[must_use]
pub fn backoff_delay(config: &RetryConfig, retry: u32) -> Duration {
    let factor = 1u32.checked_shl(retry).unwrap_or(u32::MAX);
    config
        .base_delay()
        .saturating_mul(factor)
        .min(config.max_delay())
}

/// Run `op` up to `config.max_attempts` times while `should_retry` accepts
/// the error, sleeping with exponential backoff in between.
///
/// # Errors
///
/// Returns the last error once attempts are exhausted, or the first error
/// `should_retry` rejects.
pub async fn with_retry<T, E, F, Fut>(
    config: &RetryConfig,
    should_retry: impl Fn(&E) -> bool,
    mut op: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(error) if attempt < config.max_attempts && should_retry(&error) => {
                let delay = backoff_delay(config, attempt - 1);
                tracing::warn!(
                    attempt,
                    max_attempts = config.max_attempts,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    %error,
                    "transient store failure; retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}

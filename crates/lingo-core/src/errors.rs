//! Error taxonomy for content resolution.
//!
//! `ContentError` is what the resolver and the list operations return.
//! Store-specific errors (e.g. `DatabaseError`) live in their own crates and
//! are folded into [`ContentError::TransientStoreFailure`] at the store seam.

use thiserror::Error;

/// Why a situation detail could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    /// No situation with this id exists.
    #[error("Situation with id {id} not found.")]
    Situation { id: i64 },

    /// The situation exists but lists no content for the requested target language.
    #[error("Situation with id {id} has no content for target language '{target_lang}'.")]
    NoContentForTarget { id: i64, target_lang: String },
}

/// Errors surfaced to callers of the content operations.
#[derive(Debug, Error)]
pub enum ContentError {
    /// One or more required request parameters were absent or empty.
    #[error("Missing required query parameter(s): {}", .0.join(", "))]
    MissingParameter(Vec<&'static str>),

    /// A deliberate domain outcome. Never retried.
    #[error(transparent)]
    NotFound(#[from] NotFound),

    /// The underlying store failed. The source is kept for logging but not
    /// rendered in the message.
    #[error("Content store is temporarily unavailable")]
    TransientStoreFailure(#[source] anyhow::Error),
}

impl ContentError {
    /// Wrap a store error.
    pub fn store<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::TransientStoreFailure(anyhow::Error::new(error))
    }

    /// HTTP-equivalent status class: 400, 404 or 503.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::MissingParameter(_) => 400,
            Self::NotFound(_) => 404,
            Self::TransientStoreFailure(_) => 503,
        }
    }

    /// Only store failures may be retried by a calling layer.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::TransientStoreFailure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameter_names_every_parameter() {
        let err = ContentError::MissingParameter(vec!["target_lang", "native_lang"]);
        assert_eq!(
            err.to_string(),
            "Missing required query parameter(s): target_lang, native_lang"
        );
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn not_found_messages_are_distinguishable() {
        let missing = ContentError::from(NotFound::Situation { id: 7 });
        let no_content = ContentError::from(NotFound::NoContentForTarget {
            id: 7,
            target_lang: "deu".into(),
        });
        assert_ne!(missing.to_string(), no_content.to_string());
        assert!(no_content.to_string().contains("'deu'"));
        assert_eq!(missing.status(), 404);
        assert!(!missing.is_retryable());
    }

    #[test]
    fn store_failure_hides_internals() {
        let io = std::io::Error::other("connection reset by peer at 10.0.0.3");
        let err = ContentError::store(io);
        assert!(err.is_retryable());
        assert_eq!(err.status(), 503);
        assert!(!err.to_string().contains("10.0.0.3"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

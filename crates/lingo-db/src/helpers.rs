//! Row-to-entity parsing helpers.
//!
//! Every repo converts `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing and handle the dual datetime
//! format (`SQLite`'s `datetime('now')` default vs Rust's `to_rfc3339()`).

use chrono::{DateTime, Utc};
use lingo_core::entities::{DescriptionOwner, LocalizedText};

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read an INTEGER column holding a 0/1 flag.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_bool(row: &libsql::Row, idx: i32) -> Result<bool, DatabaseError> {
    Ok(row.get::<i64>(idx)? != 0)
}

/// Parse a `(text id, language code, content)` row.
///
/// # Errors
///
/// Returns `DatabaseError` if a column read fails.
pub fn row_to_localized_text(row: &libsql::Row) -> Result<LocalizedText, DatabaseError> {
    Ok(LocalizedText {
        id: row.get::<i64>(0)?,
        language: row.get::<String>(1)?,
        content: row.get::<String>(2)?,
    })
}

/// Map a description owner to its association table and owner column.
///
/// The match is exhaustive, so a new `DescriptionOwner` variant must be added here.
#[must_use]
pub const fn description_table(owner: DescriptionOwner) -> (&'static str, &'static str) {
    match owner {
        DescriptionOwner::Situation(_) => ("situation_descriptions", "situation_id"),
        DescriptionOwner::Communication(_) => ("communication_descriptions", "communication_id"),
        DescriptionOwner::Prompt(_) => ("prompt_descriptions", "prompt_id"),
        DescriptionOwner::Context(_) => ("context_descriptions", "context_id"),
        DescriptionOwner::ContextType(_) => ("context_type_descriptions", "context_type_id"),
    }
}

/// Map a description owner to the table holding the owner rows.
#[must_use]
pub const fn owner_table(owner: DescriptionOwner) -> &'static str {
    match owner {
        DescriptionOwner::Situation(_) => "situations",
        DescriptionOwner::Communication(_) => "communications",
        DescriptionOwner::Prompt(_) => "prompts",
        DescriptionOwner::Context(_) => "contexts",
        DescriptionOwner::ContextType(_) => "context_types",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339_and_sqlite_formats() {
        let expected = Utc.with_ymd_and_hms(2026, 2, 9, 14, 30, 0).unwrap();
        assert_eq!(parse_datetime("2026-02-09T14:30:00+00:00").unwrap(), expected);
        assert_eq!(parse_datetime("2026-02-09 14:30:00").unwrap(), expected);
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }

    #[test]
    fn description_tables_are_distinct() {
        let owners = [
            DescriptionOwner::Situation(1),
            DescriptionOwner::Communication(1),
            DescriptionOwner::Prompt(1),
            DescriptionOwner::Context(1),
            DescriptionOwner::ContextType(1),
        ];
        let mut tables: Vec<_> = owners.iter().map(|o| description_table(*o).0).collect();
        tables.sort_unstable();
        tables.dedup();
        assert_eq!(tables.len(), owners.len());
    }
}

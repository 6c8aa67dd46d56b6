// ABOUTME: Defines the AdrId newtype used to name rendered ADRs and their files.
// ABOUTME: Default policy is a second-granularity timestamp; explicit ids are accepted but validated.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// File name prefix and extension for stored ADRs.
const FILE_PREFIX: &str = "ADR-";
const FILE_SUFFIX: &str = ".md";

/// Errors produced when constructing an AdrId from an explicit string.
#[derive(Debug, Error)]
pub enum AdrIdError {
    #[error("ADR id must not be empty")]
    Empty,

    #[error("ADR id must not contain path separators: {0}")]
    PathSeparator(String),
}

/// Identifier for one rendered ADR. The id is embedded in the stored file
/// name as `ADR-<id>.md`.
///
/// Uniqueness policy: `timestamped` ids have second granularity, so two
/// generations within the same second produce the same id and the later save
/// silently overwrites the earlier file. This is the documented behavior, not
/// an accident; callers needing stronger guarantees must mint explicit ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AdrId(String);

impl AdrId {
    /// Mint an id from the given instant, formatted `YYYYMMDD-HHMMSS`.
    pub fn timestamped(at: DateTime<Utc>) -> Self {
        Self(at.format("%Y%m%d-%H%M%S").to_string())
    }

    /// Construct an id from an explicit string. Rejects empty strings and
    /// anything containing a path separator, since the id becomes part of a
    /// file name.
    pub fn new(raw: &str) -> Result<Self, AdrIdError> {
        if raw.is_empty() {
            return Err(AdrIdError::Empty);
        }
        if raw.contains('/') || raw.contains('\\') {
            return Err(AdrIdError::PathSeparator(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The on-disk file name, `ADR-<id>.md`.
    pub fn file_name(&self) -> String {
        format!("{}{}{}", FILE_PREFIX, self.0, FILE_SUFFIX)
    }

    /// Recover an id from a stored file name. Returns None for names that do
    /// not match the `ADR-*.md` pattern.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let id = name.strip_prefix(FILE_PREFIX)?.strip_suffix(FILE_SUFFIX)?;
        if id.is_empty() {
            return None;
        }
        Some(Self(id.to_string()))
    }
}

impl fmt::Display for AdrId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamped_formats_second_granularity() {
        let at = Utc.with_ymd_and_hms(2026, 8, 7, 14, 30, 59).unwrap();
        let id = AdrId::timestamped(at);

        assert_eq!(id.as_str(), "20260807-143059");
        assert_eq!(id.file_name(), "ADR-20260807-143059.md");
    }

    #[test]
    fn same_second_yields_same_id() {
        let at = Utc.with_ymd_and_hms(2026, 8, 7, 14, 30, 59).unwrap();

        assert_eq!(AdrId::timestamped(at), AdrId::timestamped(at));
    }

    #[test]
    fn explicit_id_round_trips_through_file_name() {
        let id = AdrId::new("platform-choice").unwrap();

        assert_eq!(id.file_name(), "ADR-platform-choice.md");
        assert_eq!(AdrId::from_file_name("ADR-platform-choice.md"), Some(id));
    }

    #[test]
    fn explicit_id_rejects_empty_and_separators() {
        assert!(matches!(AdrId::new(""), Err(AdrIdError::Empty)));
        assert!(matches!(
            AdrId::new("a/b"),
            Err(AdrIdError::PathSeparator(_))
        ));
        assert!(matches!(
            AdrId::new("a\\b"),
            Err(AdrIdError::PathSeparator(_))
        ));
    }

    #[test]
    fn adr_id_serializes_as_its_raw_string() {
        let id = AdrId::new("20260807-143059").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"20260807-143059\"");
    }

    #[test]
    fn from_file_name_rejects_non_matching_names() {
        assert_eq!(AdrId::from_file_name("notes.md"), None);
        assert_eq!(AdrId::from_file_name("ADR-.md"), None);
        assert_eq!(AdrId::from_file_name("ADR-123.txt"), None);
        assert_eq!(AdrId::from_file_name("adr-123.md"), None);
    }
}

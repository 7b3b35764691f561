//! Resolved filter criteria for log entry queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::LogEntry;

/// Criteria for a filtered query over the generation log.
///
/// Every field is independently optional; an absent field places no
/// constraint on that dimension. Supplied dimensions combine with AND
/// semantics: an entry matches only if it satisfies all of them.
///
/// This is the *resolved* form — references have already been mapped to
/// entity ids and date strings to timestamps. Building one is the query
/// resolver's job; consuming one is the log store's.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogEntryFilter {
    /// Restrict to entries generated by this source.
    pub source_id: Option<Uuid>,
    /// Case-insensitive substring of the generated identifier value.
    pub identifier: Option<String>,
    /// Inclusive lower bound on the generation timestamp.
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the generation timestamp.
    pub date_to: Option<DateTime<Utc>>,
    /// Case-insensitive substring of the entry comment.
    pub comment: Option<String>,
    /// Restrict to entries generated by this user.
    pub generated_by: Option<Uuid>,
}

impl LogEntryFilter {
    /// Whether no dimension is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.source_id.is_none()
            && self.identifier.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.comment.is_none()
            && self.generated_by.is_none()
    }

    /// Check an entry against this filter in memory.
    ///
    /// Mirrors the SQL the log repository generates: equality on
    /// references, inclusive bounds on the timestamp, case-insensitive
    /// substring containment on text. An entry with no comment never
    /// matches a comment substring.
    pub fn matches(&self, entry: &LogEntry) -> bool {
        if let Some(source_id) = self.source_id {
            if entry.source_id != source_id {
                return false;
            }
        }
        if let Some(generated_by) = self.generated_by {
            if entry.generated_by != generated_by {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if entry.generated_at < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if entry.generated_at > to {
                return false;
            }
        }
        if let Some(needle) = &self.identifier {
            if !contains_ci(&entry.identifier, needle) {
                return false;
            }
        }
        if let Some(needle) = &self.comment {
            match &entry.comment {
                Some(comment) if contains_ci(comment, needle) => {}
                _ => return false,
            }
        }
        true
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(identifier: &str, generated_at: DateTime<Utc>, comment: Option<&str>) -> LogEntry {
        LogEntry {
            id: Uuid::new_v4(),
            source_id: Uuid::new_v4(),
            identifier: identifier.to_string(),
            generated_at,
            comment: comment.map(str::to_string),
            generated_by: Uuid::new_v4(),
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn unconstrained_matches_everything() {
        let filter = LogEntryFilter::default();
        assert!(filter.is_unconstrained());
        assert!(filter.matches(&entry("ABC100", at(2020, 6, 1), None)));
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let filter = LogEntryFilter {
            date_from: Some(at(2020, 1, 1)),
            date_to: Some(at(2020, 12, 31)),
            ..Default::default()
        };
        assert!(filter.matches(&entry("A", at(2020, 1, 1), None)));
        assert!(filter.matches(&entry("A", at(2020, 12, 31), None)));
        assert!(!filter.matches(&entry("A", at(2019, 12, 31), None)));
        assert!(!filter.matches(&entry("A", at(2021, 1, 1), None)));
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let filter = LogEntryFilter {
            identifier: Some("abc1".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&entry("ABC100", at(2020, 6, 1), None)));
        assert!(!filter.matches(&entry("XYZ100", at(2020, 6, 1), None)));
    }

    #[test]
    fn missing_comment_never_matches_comment_filter() {
        let filter = LogEntryFilter {
            comment: Some("batch".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&entry("A", at(2020, 6, 1), Some("nightly batch run"))));
        assert!(!filter.matches(&entry("A", at(2020, 6, 1), None)));
    }

    #[test]
    fn dimensions_combine_with_and() {
        let source_id = Uuid::new_v4();
        let mut e = entry("ABC100", at(2020, 6, 1), Some("ok"));
        e.source_id = source_id;

        let filter = LogEntryFilter {
            source_id: Some(source_id),
            identifier: Some("ABC".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&e));

        let filter = LogEntryFilter {
            source_id: Some(Uuid::new_v4()),
            identifier: Some("ABC".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&e));
    }
}

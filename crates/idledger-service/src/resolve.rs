//! Reference and date resolution for externally supplied parameters.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use idledger_core::error::AppError;
use idledger_core::result::AppResult;
use idledger_entity::source::IdentifierSource;
use idledger_entity::user::User;

use crate::lookup::{SourceLookup, UserLookup};

/// Outcome of resolving an optional reference parameter.
///
/// `Unconstrained` and `Missing` are observably different outcomes: an
/// absent parameter places no constraint on its dimension, while a
/// supplied-but-unresolvable one must short-circuit into the empty
/// result. Collapsing the two into a single `None` would silently widen
/// an explicit filter request to match everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// Parameter absent — no constraint on this dimension.
    Unconstrained,
    /// Parameter supplied, but no entity matches it.
    Missing,
    /// Parameter resolved to an entity.
    Found(T),
}

impl<T> Resolution<T> {
    /// Whether this is a resolution miss.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Return the resolved entity, if any.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// Which end of a date range a parameter bounds.
///
/// Date-only input is expanded so that both boundaries are inclusive at
/// day granularity: a lower bound anchors to midnight, an upper bound to
/// the last representable millisecond of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    /// Inclusive lower bound.
    Lower,
    /// Inclusive upper bound.
    Upper,
}

/// Resolve an optional source reference.
///
/// A supplied value that is not a well-formed UUID can match no source
/// and resolves to `Missing`, the same outcome as a well-formed UUID that
/// is not in the database.
pub async fn resolve_source(
    lookup: &dyn SourceLookup,
    raw: Option<&str>,
) -> AppResult<Resolution<IdentifierSource>> {
    let Some(raw) = raw else {
        return Ok(Resolution::Unconstrained);
    };
    match Uuid::parse_str(raw) {
        Ok(id) => Ok(match lookup.source_by_id(id).await? {
            Some(source) => Resolution::Found(source),
            None => Resolution::Missing,
        }),
        Err(_) => Ok(Resolution::Missing),
    }
}

/// Resolve an optional user reference. Same trichotomy as
/// [`resolve_source`].
pub async fn resolve_user(
    lookup: &dyn UserLookup,
    raw: Option<&str>,
) -> AppResult<Resolution<User>> {
    let Some(raw) = raw else {
        return Ok(Resolution::Unconstrained);
    };
    match Uuid::parse_str(raw) {
        Ok(id) => Ok(match lookup.user_by_id(id).await? {
            Some(user) => Resolution::Found(user),
            None => Resolution::Missing,
        }),
        Err(_) => Ok(Resolution::Missing),
    }
}

/// Resolve an optional date parameter.
///
/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates. Malformed
/// input is a validation failure naming the offending parameter — never
/// silently treated as absent.
pub fn resolve_date(
    param: &str,
    raw: Option<&str>,
    bound: DateBound,
) -> AppResult<Option<DateTime<Utc>>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let time = match bound {
            DateBound::Lower => NaiveTime::MIN,
            DateBound::Upper => NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
                .unwrap_or(NaiveTime::MIN),
        };
        return Ok(Some(date.and_time(time).and_utc()));
    }

    Err(AppError::validation(format!(
        "Parameter '{param}' is not a valid date: '{raw}'"
    )))
}

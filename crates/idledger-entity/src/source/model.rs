//! Identifier source entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A configured generator of identifier values (e.g. patient or visit
/// identifiers).
///
/// Sources are referenced by log entries and by query filters; they are
/// retired rather than deleted, so historical log entries always keep a
/// resolvable referent.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct IdentifierSource {
    /// Unique source identifier, also the externally visible reference.
    pub id: Uuid,
    /// Unique human-readable name.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Whether this source has been taken out of service.
    pub retired: bool,
    /// When the source was configured.
    pub created_at: DateTime<Utc>,
}

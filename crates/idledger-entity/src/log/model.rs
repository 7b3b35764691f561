//! Log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An immutable record of one identifier-generation event.
///
/// Entries are written by the identifier-generation subsystem and are
/// never updated or deleted through this service; the query layer is
/// strictly read-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LogEntry {
    /// Unique log entry identifier.
    pub id: Uuid,
    /// The source that generated the identifier.
    pub source_id: Uuid,
    /// The generated identifier value.
    pub identifier: String,
    /// When the identifier was generated.
    pub generated_at: DateTime<Utc>,
    /// Free-text comment recorded with the generation.
    pub comment: Option<String>,
    /// The user who triggered generation.
    pub generated_by: Uuid,
}

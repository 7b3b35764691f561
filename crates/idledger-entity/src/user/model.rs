//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An actor who can trigger identifier generation.
///
/// Authentication happens upstream of this service; users exist here only
/// as referents for the `generated_by` dimension of log entries, so the
/// model carries no credentials.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier, also the externally visible reference.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Human-readable display name.
    pub display_name: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

//! Response DTOs.
//!
//! Free-text fields echoed back to callers pass through
//! [`escape_html`] here, at the output boundary — stored values stay
//! raw, query inputs stay raw-but-typed, and only the rendered surface
//! sees escaped text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use idledger_core::sanitize::escape_html;
use idledger_entity::log::LogEntry;
use idledger_entity::source::IdentifierSource;
use idledger_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Log entry projection for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntryResponse {
    /// Log entry ID.
    pub id: Uuid,
    /// Generating source reference.
    pub source: Uuid,
    /// Generated identifier value (HTML-escaped).
    pub identifier: String,
    /// When the identifier was generated.
    pub generated_at: DateTime<Utc>,
    /// Entry comment (HTML-escaped).
    pub comment: Option<String>,
    /// Generating user reference.
    pub generated_by: Uuid,
}

impl LogEntryResponse {
    /// Project a log entry, escaping the free-text fields.
    pub fn from_entry(entry: LogEntry) -> Self {
        Self {
            id: entry.id,
            source: entry.source_id,
            identifier: escape_html(&entry.identifier).into_owned(),
            generated_at: entry.generated_at,
            comment: entry
                .comment
                .as_deref()
                .map(|c| escape_html(c).into_owned()),
            generated_by: entry.generated_by,
        }
    }
}

/// Identifier source projection for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceResponse {
    /// Source ID.
    pub id: Uuid,
    /// Source name (HTML-escaped).
    pub name: String,
    /// Source description (HTML-escaped).
    pub description: Option<String>,
    /// Whether the source is retired.
    pub retired: bool,
    /// When the source was configured.
    pub created_at: DateTime<Utc>,
}

impl SourceResponse {
    /// Project an identifier source, escaping the free-text fields.
    pub fn from_source(source: IdentifierSource) -> Self {
        Self {
            id: source.id,
            name: escape_html(&source.name).into_owned(),
            description: source
                .description
                .as_deref()
                .map(|d| escape_html(d).into_owned()),
            retired: source.retired,
            created_at: source.created_at,
        }
    }
}

/// User projection for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Login name (HTML-escaped).
    pub username: String,
    /// Display name (HTML-escaped).
    pub display_name: Option<String>,
}

impl UserResponse {
    /// Project a user, escaping the free-text fields.
    pub fn from_user(user: User) -> Self {
        Self {
            id: user.id,
            username: escape_html(&user.username).into_owned(),
            display_name: user
                .display_name
                .as_deref()
                .map(|n| escape_html(n).into_owned()),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: `"ok"` or `"degraded"`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Database connectivity: `"connected"` or `"unreachable"`.
    pub database: String,
}

//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use idledger_service::LogSearchRequest;

/// Query parameters for `GET /api/logentry`.
///
/// Field names follow the external interface (`fromDate`, `toDate`,
/// `generatedBy`); everything is optional free text, resolved by the
/// query service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LogEntrySearchParams {
    /// External identifier of an identifier source.
    pub source: Option<String>,
    /// Substring match on the generated identifier value.
    #[validate(length(max = 255, message = "identifier filter is too long"))]
    pub identifier: Option<String>,
    /// Inclusive lower bound on the generation timestamp.
    pub from_date: Option<String>,
    /// Inclusive upper bound on the generation timestamp.
    pub to_date: Option<String>,
    /// Substring match on the log comment.
    #[validate(length(max = 1024, message = "comment filter is too long"))]
    pub comment: Option<String>,
    /// External identifier of the user who generated the entry.
    pub generated_by: Option<String>,
}

impl LogEntrySearchParams {
    /// Convert into the service-layer request.
    pub fn into_request(self) -> LogSearchRequest {
        LogSearchRequest {
            source: self.source,
            identifier: self.identifier,
            from_date: self.from_date,
            to_date: self.to_date,
            comment: self.comment,
            generated_by: self.generated_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camel_case_parameter_names_deserialize() {
        let params: LogEntrySearchParams = serde_json::from_str(
            r#"{"source":"s","fromDate":"2020-01-01","toDate":"2020-12-31","generatedBy":"u"}"#,
        )
        .unwrap();
        assert_eq!(params.from_date.as_deref(), Some("2020-01-01"));
        assert_eq!(params.generated_by.as_deref(), Some("u"));
    }

    #[test]
    fn oversized_identifier_fails_validation() {
        let params = LogEntrySearchParams {
            source: None,
            identifier: Some("x".repeat(300)),
            from_date: None,
            to_date: None,
            comment: None,
            generated_by: None,
        };
        assert!(params.validate().is_err());
    }
}

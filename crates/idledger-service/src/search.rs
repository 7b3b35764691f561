//! Filtered, paginated queries over the generation log.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use idledger_core::result::AppResult;
use idledger_core::types::pagination::{PageRequest, PageResponse};
use idledger_entity::log::{LogEntry, LogEntryFilter};

use crate::lookup::{LogStore, SourceLookup, UserLookup};
use crate::resolve::{DateBound, resolve_date, resolve_source, resolve_user};

/// Raw, externally supplied search parameters.
///
/// Every field is optional free text exactly as received from the
/// transport; resolution into typed criteria happens in
/// [`LogQueryService::search`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogSearchRequest {
    /// External identifier of the generating source.
    pub source: Option<String>,
    /// Substring of the generated identifier value.
    pub identifier: Option<String>,
    /// Inclusive lower bound on the generation timestamp.
    pub from_date: Option<String>,
    /// Inclusive upper bound on the generation timestamp.
    pub to_date: Option<String>,
    /// Substring of the entry comment.
    pub comment: Option<String>,
    /// External identifier of the generating user.
    pub generated_by: Option<String>,
}

/// Resolves raw search parameters and delegates to the log store.
///
/// Holds no mutable state; concurrent searches share one instance freely.
pub struct LogQueryService {
    sources: Arc<dyn SourceLookup>,
    users: Arc<dyn UserLookup>,
    log: Arc<dyn LogStore>,
}

impl LogQueryService {
    /// Create a new query service over the given collaborators.
    pub fn new(
        sources: Arc<dyn SourceLookup>,
        users: Arc<dyn UserLookup>,
        log: Arc<dyn LogStore>,
    ) -> Self {
        Self {
            sources,
            users,
            log,
        }
    }

    /// Execute a filtered, paginated search over the generation log.
    ///
    /// Control flow: resolve references → short-circuit on a resolution
    /// miss → parse dates → compose the filter → delegate to the store.
    /// A supplied reference that resolves to nothing yields the explicit
    /// empty result without ever issuing the storage query; the query is
    /// never widened with a null substitute for an unresolved reference.
    pub async fn search(
        &self,
        req: &LogSearchRequest,
        page: &PageRequest,
    ) -> AppResult<PageResponse<LogEntry>> {
        let source = resolve_source(self.sources.as_ref(), present(req.source.as_deref())).await?;
        if source.is_missing() {
            tracing::debug!(
                source = req.source.as_deref(),
                "Source filter did not resolve; returning empty result"
            );
            return Ok(PageResponse::empty(page));
        }

        let user = resolve_user(self.users.as_ref(), present(req.generated_by.as_deref())).await?;
        if user.is_missing() {
            tracing::debug!(
                generated_by = req.generated_by.as_deref(),
                "User filter did not resolve; returning empty result"
            );
            return Ok(PageResponse::empty(page));
        }

        let date_from = resolve_date(
            "fromDate",
            present(req.from_date.as_deref()),
            DateBound::Lower,
        )?;
        let date_to = resolve_date("toDate", present(req.to_date.as_deref()), DateBound::Upper)?;

        let filter = LogEntryFilter {
            source_id: source.found().map(|s| s.id),
            identifier: present(req.identifier.as_deref()).map(str::to_string),
            date_from,
            date_to,
            comment: present(req.comment.as_deref()).map(str::to_string),
            generated_by: user.found().map(|u| u.id),
        };

        self.log.search(&filter, page).await
    }
}

/// Normalize an optional parameter: blank or whitespace-only input is
/// treated as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use uuid::Uuid;

    use idledger_core::error::ErrorKind;
    use idledger_entity::source::IdentifierSource;
    use idledger_entity::user::User;

    struct StaticSources(Vec<IdentifierSource>);

    #[async_trait]
    impl SourceLookup for StaticSources {
        async fn source_by_id(&self, id: Uuid) -> AppResult<Option<IdentifierSource>> {
            Ok(self.0.iter().find(|s| s.id == id).cloned())
        }
    }

    struct StaticUsers(Vec<User>);

    #[async_trait]
    impl UserLookup for StaticUsers {
        async fn user_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
            Ok(self.0.iter().find(|u| u.id == id).cloned())
        }
    }

    /// In-memory log store mirroring the repository's SQL semantics via
    /// `LogEntryFilter::matches`. Counts queries so tests can assert the
    /// short-circuit path never reaches storage.
    struct InMemoryLog {
        entries: Vec<LogEntry>,
        queries: AtomicUsize,
    }

    impl InMemoryLog {
        fn new(entries: Vec<LogEntry>) -> Self {
            Self {
                entries,
                queries: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl LogStore for InMemoryLog {
        async fn search(
            &self,
            filter: &LogEntryFilter,
            page: &PageRequest,
        ) -> AppResult<PageResponse<LogEntry>> {
            self.queries.fetch_add(1, Ordering::SeqCst);
            let matching: Vec<LogEntry> = self
                .entries
                .iter()
                .filter(|e| filter.matches(e))
                .cloned()
                .collect();
            let total = matching.len() as u64;
            let items = matching
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .collect();
            Ok(PageResponse::new(items, page.page, page.page_size, total))
        }
    }

    fn source(name: &str) -> IdentifierSource {
        IdentifierSource {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            retired: false,
            created_at: Utc::now(),
        }
    }

    fn user(username: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            display_name: None,
            created_at: Utc::now(),
        }
    }

    fn entry(
        source: &IdentifierSource,
        user: &User,
        identifier: &str,
        generated_at: DateTime<Utc>,
        comment: Option<&str>,
    ) -> LogEntry {
        LogEntry {
            id: Uuid::new_v4(),
            source_id: source.id,
            identifier: identifier.to_string(),
            generated_at,
            comment: comment.map(str::to_string),
            generated_by: user.id,
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    struct Fixture {
        service: LogQueryService,
        store: Arc<InMemoryLog>,
    }

    fn fixture(entries: impl Fn(&IdentifierSource, &User) -> Vec<LogEntry>) -> Fixture {
        let src = source("Patient IDs");
        let usr = user("jdoe");
        let store = Arc::new(InMemoryLog::new(entries(&src, &usr)));
        let service = LogQueryService::new(
            Arc::new(StaticSources(vec![src.clone()])),
            Arc::new(StaticUsers(vec![usr.clone()])),
            store.clone(),
        );
        Fixture { service, store }
    }

    fn page() -> PageRequest {
        PageRequest::new(1, 10, 100)
    }

    #[tokio::test]
    async fn no_filters_returns_unfiltered_paged_listing() {
        let f = fixture(|s, u| {
            vec![
                entry(s, u, "A1", at(2020, 1, 1, 0), None),
                entry(s, u, "A2", at(2020, 1, 2, 0), None),
                entry(s, u, "A3", at(2020, 1, 3, 0), None),
            ]
        });

        let result = f
            .service
            .search(&LogSearchRequest::default(), &PageRequest::new(1, 2, 100))
            .await
            .unwrap();
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.total_items, 3);
        assert!(result.has_next);
    }

    #[tokio::test]
    async fn unresolvable_source_short_circuits_to_empty() {
        let f = fixture(|s, u| vec![entry(s, u, "A1", at(2020, 1, 1, 0), None)]);

        // Well-formed UUID that matches no source; the other filters are
        // valid and must not matter.
        let req = LogSearchRequest {
            source: Some(Uuid::new_v4().to_string()),
            identifier: Some("A1".to_string()),
            from_date: Some("2020-01-01".to_string()),
            ..Default::default()
        };

        let result = f.service.search(&req, &page()).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(f.store.queries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unresolvable_user_short_circuits_to_empty() {
        let f = fixture(|s, u| vec![entry(s, u, "A1", at(2020, 1, 1, 0), None)]);

        let req = LogSearchRequest {
            generated_by: Some(Uuid::new_v4().to_string()),
            ..Default::default()
        };

        let result = f.service.search(&req, &page()).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(f.store.queries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn garbage_source_reference_is_a_miss_not_an_error() {
        let f = fixture(|s, u| vec![entry(s, u, "A1", at(2020, 1, 1, 0), None)]);

        let req = LogSearchRequest {
            source: Some("nonexistent-uuid".to_string()),
            ..Default::default()
        };

        let result = f.service.search(&req, &page()).await.unwrap();
        assert!(result.is_empty());
        assert_eq!(result.total_items, 0);
        assert_eq!(f.store.queries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn resolved_source_constrains_the_query() {
        let other = source("Visit IDs");
        let usr = user("jdoe");
        let src = source("Patient IDs");
        let entries = vec![
            entry(&src, &usr, "P-1", at(2020, 1, 1, 0), None),
            entry(&other, &usr, "V-1", at(2020, 1, 2, 0), None),
        ];
        let store = Arc::new(InMemoryLog::new(entries));
        let service = LogQueryService::new(
            Arc::new(StaticSources(vec![src.clone(), other.clone()])),
            Arc::new(StaticUsers(vec![usr.clone()])),
            store.clone(),
        );

        let req = LogSearchRequest {
            source: Some(src.id.to_string()),
            ..Default::default()
        };
        let result = service.search(&req, &page()).await.unwrap();
        assert_eq!(result.total_items, 1);
        assert_eq!(result.items[0].identifier, "P-1");
    }

    #[tokio::test]
    async fn identifier_and_date_range_combine() {
        let f = fixture(|s, u| {
            vec![
                // On the boundaries: both inclusive.
                entry(s, u, "ABC100", at(2020, 1, 1, 0), None),
                entry(s, u, "ABC100", at(2020, 12, 31, 18), None),
                // Outside the range.
                entry(s, u, "ABC100", at(2019, 6, 1, 0), None),
                entry(s, u, "ABC100", at(2021, 1, 1, 0), None),
                // Wrong identifier.
                entry(s, u, "XYZ900", at(2020, 6, 1, 0), None),
            ]
        });

        let req = LogSearchRequest {
            identifier: Some("ABC100".to_string()),
            from_date: Some("2020-01-01".to_string()),
            to_date: Some("2020-12-31".to_string()),
            ..Default::default()
        };

        let result = f.service.search(&req, &page()).await.unwrap();
        assert_eq!(result.total_items, 2);
        assert!(result.items.iter().all(|e| e.identifier == "ABC100"));
    }

    #[tokio::test]
    async fn comment_substring_filters_entries() {
        let f = fixture(|s, u| {
            vec![
                entry(s, u, "A1", at(2020, 1, 1, 0), Some("nightly batch import")),
                entry(s, u, "A2", at(2020, 1, 2, 0), Some("manual entry")),
                entry(s, u, "A3", at(2020, 1, 3, 0), None),
            ]
        });

        let req = LogSearchRequest {
            comment: Some("BATCH".to_string()),
            ..Default::default()
        };

        let result = f.service.search(&req, &page()).await.unwrap();
        assert_eq!(result.total_items, 1);
        assert_eq!(result.items[0].identifier, "A1");
    }

    #[tokio::test]
    async fn malformed_from_date_is_a_validation_failure() {
        let f = fixture(|s, u| vec![entry(s, u, "A1", at(2020, 1, 1, 0), None)]);

        let req = LogSearchRequest {
            from_date: Some("not-a-date".to_string()),
            ..Default::default()
        };

        let err = f.service.search(&req, &page()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert!(err.message.contains("fromDate"));
        assert_eq!(f.store.queries.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn blank_parameters_place_no_constraint() {
        let f = fixture(|s, u| {
            vec![
                entry(s, u, "A1", at(2020, 1, 1, 0), None),
                entry(s, u, "A2", at(2020, 1, 2, 0), None),
            ]
        });

        let req = LogSearchRequest {
            source: Some("   ".to_string()),
            identifier: Some(String::new()),
            from_date: Some(String::new()),
            ..Default::default()
        };

        let result = f.service.search(&req, &page()).await.unwrap();
        assert_eq!(result.total_items, 2);
    }

    #[tokio::test]
    async fn generated_by_filter_matches_only_that_user() {
        let src = source("Patient IDs");
        let jdoe = user("jdoe");
        let asmith = user("asmith");
        let entries = vec![
            entry(&src, &jdoe, "P-1", at(2020, 1, 1, 0), None),
            entry(&src, &asmith, "P-2", at(2020, 1, 2, 0), None),
        ];
        let store = Arc::new(InMemoryLog::new(entries));
        let service = LogQueryService::new(
            Arc::new(StaticSources(vec![src.clone()])),
            Arc::new(StaticUsers(vec![jdoe.clone(), asmith.clone()])),
            store,
        );

        let req = LogSearchRequest {
            generated_by: Some(asmith.id.to_string()),
            ..Default::default()
        };
        let result = service.search(&req, &page()).await.unwrap();
        assert_eq!(result.total_items, 1);
        assert_eq!(result.items[0].identifier, "P-2");
    }
}

// search-core/src/search.rs
//! Case-insensitive substring search over the catalog

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::catalog::Catalog;
use crate::error::SearchError;
use crate::models::ContentEntry;

/// A non-blank, normalized search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    needle: String,
}

impl Query {
    /// Returns `None` when `raw` is empty after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            needle: text.to_lowercase(),
        })
    }

    /// The trimmed query as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The trimmed, lower-cased query used for matching.
    pub fn needle(&self) -> &str {
        &self.needle
    }
}

/// Searches the shared catalog.
///
/// Results keep catalog order and are never truncated; surfaces that show a
/// preview cut the list themselves.
#[derive(Debug, Clone)]
pub struct SearchService {
    catalog: Arc<Catalog>,
    latency: Duration,
}

impl SearchService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            latency: Duration::ZERO,
        }
    }

    /// Delay every asynchronous search by `latency`, as a remote call would.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search(&self, raw: &str) -> Vec<ContentEntry> {
        match Query::parse(raw) {
            Some(query) => self.search_query(&query),
            None => Vec::new(),
        }
    }

    pub fn search_query(&self, query: &Query) -> Vec<ContentEntry> {
        let results: Vec<ContentEntry> = self
            .catalog
            .indexed()
            .iter()
            .filter(|indexed| indexed.matches(query.needle()))
            .map(|indexed| indexed.entry.clone())
            .collect();

        tracing::debug!(query = query.text(), hits = results.len(), "catalog scanned");
        results
    }

    /// Synchronous search that honours `cancel` on both sides of the scan.
    pub fn search_cancellable(
        &self,
        raw: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<ContentEntry>, SearchError> {
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }
        let results = self.search(raw);
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }
        Ok(results)
    }

    /// Asynchronous search, optionally delayed by the configured latency.
    pub async fn search_async(
        &self,
        raw: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<ContentEntry>, SearchError> {
        if !self.latency.is_zero() {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(SearchError::Cancelled),
                _ = tokio::time::sleep(self.latency) => {}
            }
        }
        self.search_cancellable(raw, cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn service() -> SearchService {
        let catalog = Catalog::new(vec![
            ContentEntry::new(
                1,
                "MySQL Performance Tuning",
                "Documentation",
                "/resources/mysql",
                "Guide to optimizing MySQL databases...",
            ),
            ContentEntry::new(
                2,
                "PostgreSQL Security Best Practices",
                "Blog Post",
                "/resources/postgres",
                "How to secure your PostgreSQL instances...",
            ),
        ])
        .unwrap();
        SearchService::new(Arc::new(catalog))
    }

    fn ids(results: &[ContentEntry]) -> Vec<u32> {
        results.iter().map(|e| e.id).collect()
    }

    #[rstest]
    #[case("mysql", vec![1])]
    #[case("security", vec![2])]
    #[case("database", vec![1])]
    #[case("xyz123", vec![])]
    #[case("  MySQL  ", vec![1])]
    #[case("s", vec![1, 2])]
    fn matches_title_or_content(
        service: SearchService,
        #[case] query: &str,
        #[case] expected: Vec<u32>,
    ) {
        assert_eq!(ids(&service.search(query)), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_query_yields_nothing(service: SearchService, #[case] query: &str) {
        assert!(Query::parse(query).is_none());
        assert!(service.search(query).is_empty());
    }

    #[rstest]
    #[case("Documentation")]
    #[case("/resources")]
    #[case("Blog")]
    fn never_matches_type_or_path(service: SearchService, #[case] query: &str) {
        assert!(service.search(query).is_empty());
    }

    #[rstest]
    fn case_insensitive(service: SearchService) {
        assert_eq!(service.search("MySQL"), service.search("mysql"));
        assert_eq!(service.search("POSTGRESQL"), service.search("postgresql"));
    }

    #[rstest]
    fn repeated_search_is_identical(service: SearchService) {
        assert_eq!(service.search("s"), service.search("s"));
    }

    #[test]
    fn query_keeps_trimmed_text_and_lowered_needle() {
        let query = Query::parse("  MySQL Tuning ").unwrap();
        assert_eq!(query.text(), "MySQL Tuning");
        assert_eq!(query.needle(), "mysql tuning");
    }

    #[test]
    fn builtin_catalog_finds_every_mysql_entry() {
        let service = SearchService::new(Arc::new(Catalog::builtin().unwrap()));
        let results = service.search("mysql");
        assert!(!results.is_empty());
        assert!(results.iter().all(|e| {
            e.title.to_lowercase().contains("mysql") || e.content.to_lowercase().contains("mysql")
        }));
        let mut sorted = ids(&results);
        sorted.sort();
        assert_eq!(sorted, ids(&results), "results keep catalog order");
    }

    #[rstest]
    fn cancelled_token_fails_instead_of_returning_empty(service: SearchService) {
        let token = CancellationToken::new();
        token.cancel();
        assert_eq!(
            service.search_cancellable("mysql", &token),
            Err(SearchError::Cancelled)
        );
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn latency_is_interrupted_by_cancellation(service: SearchService) {
        let service = service.with_latency(Duration::from_secs(5));
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            canceller.cancel();
        });

        let started = tokio::time::Instant::now();
        let result = service.search_async("mysql", &token).await;
        assert_eq!(result, Err(SearchError::Cancelled));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn latency_delays_results(service: SearchService) {
        let service = service.with_latency(Duration::from_millis(250));
        let started = tokio::time::Instant::now();
        let result = service.search_async("security", &CancellationToken::new()).await;
        assert_eq!(ids(&result.unwrap()), vec![2]);
        assert!(started.elapsed() >= Duration::from_millis(250));
    }
}

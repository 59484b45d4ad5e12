//! Content repository client.
//!
//! Fetches page documents and the published-slug listing from the content
//! origin. The transport sits behind the [`ContentOrigin`] trait so the
//! rest of the engine is origin-agnostic; the production implementation is
//! [`HttpOrigin`] over `ureq`.
//!
//! ## Absence vs failure
//!
//! "No such document" is a normal outcome, not an error: HTTP 404 maps to
//! `Ok(None)`. Everything else — timeout, non-success status, malformed
//! body — is a [`ContentError`] surfaced to the caller, which owns turning
//! it into a user-visible error page. The client never fabricates
//! placeholder content.
//!
//! ## Bounded revalidation
//!
//! [`ContentClient`] fronts the origin with a TTL cache: lookups (hits and
//! misses alike) are served stale for up to the configured revalidation
//! window before the origin is consulted again. Staleness is bounded, not
//! eliminated — this is a caching policy, not a correctness guarantee.

use crate::config::OriginConfig;
use crate::types::Page;
use moka::sync::Cache;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("origin returned HTTP {0}")]
    Http(u16),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("malformed origin response: {0}")]
    Malformed(String),
}

impl From<ureq::Error> for ContentError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => Self::Http(code),
            ureq::Error::Transport(t) => Self::Transport(t.to_string()),
        }
    }
}

/// Transport seam for the content origin.
///
/// Two operations cover everything the engine consumes: a document lookup
/// by slug and the full published-slug listing.
pub trait ContentOrigin: Send + Sync {
    /// Fetch one page document. `Ok(None)` means the origin has no
    /// document for this slug.
    fn fetch_page(&self, slug: &str) -> Result<Option<Page>, ContentError>;

    /// Fetch every known published slug, in origin order.
    fn fetch_slugs(&self) -> Result<Vec<String>, ContentError>;
}

/// Production origin over HTTPS + JSON.
///
/// Document lookup: `GET {base}/pages/{slug}`. Slug listing:
/// `GET {base}/pages`. Public content, no authentication token.
pub struct HttpOrigin {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpOrigin {
    pub fn new(config: &OriginConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        Self {
            agent,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl ContentOrigin for HttpOrigin {
    fn fetch_page(&self, slug: &str) -> Result<Option<Page>, ContentError> {
        let url = self.endpoint(&format!("pages/{slug}"));
        log::debug!("fetching page document {url}");
        match self.agent.get(&url).call() {
            Ok(response) => {
                let page: Page = response
                    .into_json()
                    .map_err(|e| ContentError::Malformed(e.to_string()))?;
                Ok(Some(page))
            }
            Err(ureq::Error::Status(404, _)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn fetch_slugs(&self) -> Result<Vec<String>, ContentError> {
        let url = self.endpoint("pages");
        log::debug!("fetching slug listing {url}");
        let response = self.agent.get(&url).call()?;
        response
            .into_json()
            .map_err(|e| ContentError::Malformed(e.to_string()))
    }
}

/// Origin client with bounded revalidation.
///
/// Both found and not-found lookups are cached for the revalidation
/// window, so a hot missing slug cannot hammer the origin. A window of
/// zero disables caching entirely.
pub struct ContentClient {
    origin: Box<dyn ContentOrigin>,
    cache: Option<Cache<String, Option<Page>>>,
}

impl ContentClient {
    pub fn new(origin: Box<dyn ContentOrigin>, config: &OriginConfig) -> Self {
        let cache = (config.revalidate_secs > 0).then(|| {
            Cache::builder()
                .max_capacity(1024)
                .time_to_live(Duration::from_secs(config.revalidate_secs))
                .build()
        });
        Self { origin, cache }
    }

    /// Client over the production HTTP origin described by `config`.
    pub fn from_config(config: &OriginConfig) -> Self {
        Self::new(Box::new(HttpOrigin::new(config)), config)
    }

    /// Look a page up by canonical slug, through the revalidation cache.
    pub fn page_by_slug(&self, slug: &str) -> Result<Option<Page>, ContentError> {
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(slug) {
                log::debug!("cache hit for {slug}");
                return Ok(hit);
            }
        }
        let fetched = self.origin.fetch_page(slug)?;
        if let Some(cache) = &self.cache {
            cache.insert(slug.to_string(), fetched.clone());
        }
        Ok(fetched)
    }

    /// All published slugs, uncached — callers enumerate at most once per
    /// build.
    pub fn all_slugs(&self) -> Result<Vec<String>, ContentError> {
        self.origin.fetch_slugs()
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::test_helpers::page;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Mock origin that serves canned documents and records every call.
    /// Uses Mutex so it stays Send + Sync like the production origin.
    #[derive(Default)]
    pub struct MockOrigin {
        pages: HashMap<String, Page>,
        slugs: Vec<String>,
        failure: Option<ContentError>,
        calls: Mutex<Vec<String>>,
    }

    impl MockOrigin {
        pub fn with_pages(pages: Vec<Page>) -> Self {
            let slugs = pages.iter().map(|p| p.slug.clone()).collect();
            let pages = pages.into_iter().map(|p| (p.slug.clone(), p)).collect();
            Self {
                pages,
                slugs,
                ..Self::default()
            }
        }

        pub fn with_slugs(slugs: &[&str]) -> Self {
            Self {
                slugs: slugs.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }

        /// An origin where every call fails with the given error.
        pub fn failing(err: ContentError) -> Self {
            Self {
                failure: Some(err),
                ..Self::default()
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl ContentOrigin for MockOrigin {
        fn fetch_page(&self, slug: &str) -> Result<Option<Page>, ContentError> {
            self.calls.lock().unwrap().push(format!("page:{slug}"));
            match &self.failure {
                Some(err) => Err(err.clone()),
                None => Ok(self.pages.get(slug).cloned()),
            }
        }

        fn fetch_slugs(&self) -> Result<Vec<String>, ContentError> {
            self.calls.lock().unwrap().push("slugs".to_string());
            match &self.failure {
                Some(err) => Err(err.clone()),
                None => Ok(self.slugs.clone()),
            }
        }
    }

    fn cached_config() -> OriginConfig {
        OriginConfig {
            revalidate_secs: 60,
            ..OriginConfig::default()
        }
    }

    #[test]
    fn lookup_returns_document_for_known_slug() {
        let origin = MockOrigin::with_pages(vec![page("about")]);
        let client = ContentClient::new(Box::new(origin), &cached_config());
        let found = client.page_by_slug("about").unwrap();
        assert_eq!(found.unwrap().slug, "about");
    }

    #[test]
    fn lookup_returns_none_for_unknown_slug() {
        let origin = MockOrigin::with_pages(vec![page("about")]);
        let client = ContentClient::new(Box::new(origin), &cached_config());
        assert!(client.page_by_slug("missing").unwrap().is_none());
    }

    #[test]
    fn lookups_within_window_hit_origin_once() {
        let shared = std::sync::Arc::new(MockOrigin::with_pages(vec![page("about")]));
        let client = ContentClient::new(Box::new(SharedOrigin(shared.clone())), &cached_config());
        for _ in 0..3 {
            client.page_by_slug("about").unwrap();
        }
        assert_eq!(shared.call_count(), 1);
    }

    #[test]
    fn absence_is_cached_within_window() {
        let shared = std::sync::Arc::new(MockOrigin::with_pages(vec![]));
        let client = ContentClient::new(Box::new(SharedOrigin(shared.clone())), &cached_config());
        for _ in 0..3 {
            assert!(client.page_by_slug("ghost").unwrap().is_none());
        }
        assert_eq!(shared.call_count(), 1);
    }

    #[test]
    fn zero_window_disables_caching() {
        let shared = std::sync::Arc::new(MockOrigin::with_pages(vec![page("about")]));
        let config = OriginConfig {
            revalidate_secs: 0,
            ..OriginConfig::default()
        };
        let client = ContentClient::new(Box::new(SharedOrigin(shared.clone())), &config);
        for _ in 0..3 {
            client.page_by_slug("about").unwrap();
        }
        assert_eq!(shared.call_count(), 3);
    }

    #[test]
    fn transport_failure_propagates_as_error() {
        let origin = MockOrigin::failing(ContentError::Transport("connection refused".into()));
        let client = ContentClient::new(Box::new(origin), &cached_config());
        assert!(matches!(
            client.page_by_slug("about"),
            Err(ContentError::Transport(_))
        ));
    }

    #[test]
    fn all_slugs_passes_through_uncached() {
        let shared = std::sync::Arc::new(MockOrigin::with_slugs(&["a", "b"]));
        let client = ContentClient::new(Box::new(SharedOrigin(shared.clone())), &cached_config());
        assert_eq!(client.all_slugs().unwrap(), vec!["a", "b"]);
        assert_eq!(client.all_slugs().unwrap(), vec!["a", "b"]);
        assert_eq!(shared.call_count(), 2);
    }

    /// Lets a test keep a handle on the origin while the client owns a box.
    pub struct SharedOrigin(pub std::sync::Arc<MockOrigin>);

    impl ContentOrigin for SharedOrigin {
        fn fetch_page(&self, slug: &str) -> Result<Option<Page>, ContentError> {
            self.0.fetch_page(slug)
        }

        fn fetch_slugs(&self) -> Result<Vec<String>, ContentError> {
            self.0.fetch_slugs()
        }
    }
}

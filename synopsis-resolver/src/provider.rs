//! Trait definition for pluggable search providers.
//!
//! A provider turns a title into an ordered list of catalog [`Candidate`]s
//! by querying some external search engine restricted to the catalog site.

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::types::Candidate;

/// A search backend that discovers catalog links for a title.
///
/// Implementors own:
///
/// - URL construction with query encoding (`site:<catalog> <title>`)
/// - the HTTP request with appropriate headers and timeout
/// - HTML parsing into [`Candidate`] values, preserving discovery order
///
/// All implementations must be `Send + Sync` so resolutions can run on any
/// runtime worker.
pub trait SearchProvider: Send + Sync {
    /// Search for catalog pages matching `title`.
    ///
    /// An empty vector means the search ran but found nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] if the request fails or returns a non-success
    /// status. The resolution engine treats errors like an empty result.
    fn candidates(
        &self,
        title: &str,
        config: &ResolverConfig,
    ) -> impl std::future::Future<Output = Result<Vec<Candidate>, ResolveError>> + Send;

    /// Human-readable provider name for logs.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{Resolver, Strategy};
    use crate::types::{PathKind, Slug};
    use std::sync::Mutex;

    /// Records every query title; fails when it has no candidates to give.
    #[derive(Default)]
    struct RecordingProvider {
        candidates: Vec<Candidate>,
        seen: Mutex<Vec<String>>,
    }

    impl SearchProvider for RecordingProvider {
        async fn candidates(
            &self,
            title: &str,
            _config: &ResolverConfig,
        ) -> Result<Vec<Candidate>, ResolveError> {
            if let Ok(mut seen) = self.seen.lock() {
                seen.push(title.to_owned());
            }
            if self.candidates.is_empty() {
                return Err(ResolveError::Http("connection reset".into()));
            }
            Ok(self.candidates.clone())
        }

        fn name(&self) -> &'static str {
            "Recording"
        }
    }

    fn offline_config() -> ResolverConfig {
        ResolverConfig {
            catalog_base_url: "http://127.0.0.1:9".into(),
            probe_timeout_seconds: 1,
            page_timeout_seconds: 1,
            ..Default::default()
        }
    }

    fn seen(resolver: &Resolver<RecordingProvider>) -> Vec<String> {
        resolver.provider().seen.lock().unwrap().clone()
    }

    #[test]
    fn providers_must_be_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<crate::providers::DuckDuckGoProvider>();
    }

    #[tokio::test]
    async fn provider_receives_trimmed_title() {
        let resolver = Resolver::new(
            RecordingProvider {
                candidates: vec![Candidate {
                    raw_link: "www.manga-news.com/index.php/serie/Naruto".into(),
                    path_kind: PathKind::Primary,
                    slug: Slug::new("Naruto"),
                }],
                ..Default::default()
            },
            offline_config(),
        )
        .unwrap();

        let resolution = resolver.resolve_slug("  Naruto \t").await.unwrap().unwrap();
        assert_eq!(resolution.slug().as_str(), "Naruto");
        assert_eq!(seen(&resolver), vec!["Naruto".to_owned()]);
    }

    #[tokio::test]
    async fn provider_receives_stripped_title_when_configured() {
        let config = ResolverConfig {
            strip_parenthesized: true,
            ..offline_config()
        };
        let resolver = Resolver::new(RecordingProvider::default(), config).unwrap();

        let _ = resolver.attempt(Strategy::Search, "Berserk").await;
        let _ = resolver.resolve_slug("Berserk (Deluxe)").await.unwrap();
        assert_eq!(seen(&resolver), vec!["Berserk".to_owned(), "Berserk".to_owned()]);
    }

    #[tokio::test]
    async fn provider_failure_is_absorbed_by_search_strategy() {
        let resolver = Resolver::new(RecordingProvider::default(), offline_config()).unwrap();

        assert!(resolver.attempt(Strategy::Search, "Naruto").await.is_none());
        // Probes against the closed port fail too; the engine still answers Ok.
        assert!(resolver.resolve_slug("Naruto").await.unwrap().is_none());
        assert_eq!(seen(&resolver).len(), 2);
    }
}

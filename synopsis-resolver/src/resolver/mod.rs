//! Title-to-page resolution: ordered strategies, fuzzy selection, synopsis.
//!
//! A [`Resolver`] tries each [`Strategy`] in [`STRATEGY_ORDER`] exactly
//! once and stops at the first one that yields a [`Resolution`]:
//!
//! 1. search the provider for catalog links and pick one by fuzzy match
//! 2. probe the guessed slug under [`PathKind::Primary`]
//! 3. probe the guessed slug under [`PathKind::AlternateOriginal`]
//!
//! Failed network steps are logged and treated as "no result" for that
//! strategy; nothing is retried and nothing is cached.

pub mod fuzzy;

use crate::config::ResolverConfig;
use crate::error::{ResolveError, Result};
use crate::http;
use crate::normalize::{strip_parenthesized, title_to_direct_slug};
use crate::provider::SearchProvider;
use crate::providers::DuckDuckGoProvider;
use crate::synopsis::fetch_synopsis;
use crate::types::{catalog_page_url, PathKind, Resolution, SynopsisOutcome};
use tracing::Instrument;

/// One way of locating the catalog page for a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Query the search provider and fuzzy-match its catalog links.
    Search,
    /// Request the guessed page URL under one namespace and accept it on 2xx.
    DirectProbe(PathKind),
}

/// Strategies in priority order.
pub const STRATEGY_ORDER: [Strategy; 3] = [
    Strategy::Search,
    Strategy::DirectProbe(PathKind::PROBE_ORDER[0]),
    Strategy::DirectProbe(PathKind::PROBE_ORDER[1]),
];

/// Stateless resolution engine over a search provider.
///
/// Cheap to share behind an `Arc`; concurrent calls do not interact.
pub struct Resolver<P = DuckDuckGoProvider> {
    provider: P,
    config: ResolverConfig,
}

impl Resolver<DuckDuckGoProvider> {
    /// Resolver backed by DuckDuckGo.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Config`] if `config` is invalid.
    pub fn duckduckgo(config: ResolverConfig) -> Result<Self> {
        Self::new(DuckDuckGoProvider, config)
    }
}

impl<P: SearchProvider> Resolver<P> {
    /// Build a resolver after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Config`] if `config` is invalid.
    pub fn new(provider: P, config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Resolve `title` to a catalog page and extract its synopsis.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidTitle`] if the title is blank (after
    /// optional parenthesis stripping). Every network failure is absorbed
    /// into the returned [`SynopsisOutcome`].
    pub async fn resolve_synopsis(&self, title: &str) -> Result<SynopsisOutcome> {
        let title = self.prepare_title(title)?;
        let span = tracing::info_span!("resolve_synopsis", title = %title);
        async {
            let Some(resolution) = self.run_strategies(&title).await else {
                tracing::warn!("no catalog page found");
                return Ok(SynopsisOutcome::TitleNotFound);
            };
            tracing::info!(%resolution, "catalog page resolved");

            match fetch_synopsis(&resolution, &self.config).await {
                Some(summary) => Ok(SynopsisOutcome::Found {
                    resolution,
                    summary,
                }),
                None => Ok(SynopsisOutcome::SynopsisNotFound { resolution }),
            }
        }
        .instrument(span)
        .await
    }

    /// Resolve `title` to a catalog location without fetching the page.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidTitle`] if the title is blank.
    pub async fn resolve_slug(&self, title: &str) -> Result<Option<Resolution>> {
        let title = self.prepare_title(title)?;
        let span = tracing::info_span!("resolve_slug", title = %title);
        Ok(self.run_strategies(&title).instrument(span).await)
    }

    /// Run a single strategy for `title`.
    pub async fn attempt(&self, strategy: Strategy, title: &str) -> Option<Resolution> {
        match strategy {
            Strategy::Search => self.search(title).await,
            Strategy::DirectProbe(path_kind) => self.probe(path_kind, title).await,
        }
    }

    async fn run_strategies(&self, title: &str) -> Option<Resolution> {
        for strategy in STRATEGY_ORDER {
            tracing::debug!(?strategy, "trying strategy");
            if let Some(resolution) = self.attempt(strategy, title).await {
                return Some(resolution);
            }
        }
        None
    }

    fn prepare_title(&self, title: &str) -> Result<String> {
        let prepared = if self.config.strip_parenthesized {
            strip_parenthesized(title)
        } else {
            title.trim().to_owned()
        };
        if prepared.is_empty() {
            return Err(ResolveError::InvalidTitle("title is empty".into()));
        }
        Ok(prepared)
    }

    async fn search(&self, title: &str) -> Option<Resolution> {
        let provider = self.provider.name();
        match self.provider.candidates(title, &self.config).await {
            Ok(candidates) if candidates.is_empty() => {
                tracing::info!(provider, "search returned no catalog links");
                None
            }
            Ok(candidates) => {
                tracing::debug!(provider, count = candidates.len(), "search candidates");
                fuzzy::select_candidate(title, &candidates, self.config.fuzzy_ratio)
            }
            Err(ResolveError::Status(status)) => {
                tracing::warn!(provider, status, "search returned HTTP error");
                None
            }
            Err(e) => {
                tracing::warn!(provider, error = %e, "search failed");
                None
            }
        }
    }

    async fn probe(&self, path_kind: PathKind, title: &str) -> Option<Resolution> {
        let slug = title_to_direct_slug(title);
        // An empty slug would hit the namespace listing page, not a series page.
        if slug.is_empty() {
            tracing::debug!(%path_kind, "title has no slug characters, skipping probe");
            return None;
        }
        let url = catalog_page_url(&self.config.catalog_base_url, path_kind, &slug);
        tracing::debug!(%url, "probing direct URL");

        match page_exists(&url, &self.config).await {
            Ok(()) => {
                tracing::info!(%url, "direct URL exists");
                Some(Resolution::new(path_kind, slug))
            }
            Err(ResolveError::Status(status)) => {
                tracing::debug!(%url, status, "direct URL rejected");
                None
            }
            Err(e) => {
                tracing::warn!(%url, error = %e, "direct URL probe failed");
                None
            }
        }
    }
}

async fn page_exists(url: &str, config: &ResolverConfig) -> Result<()> {
    let client = http::build_catalog_client(config, config.probe_timeout_seconds)?;
    client.get(url).send().await?.error_for_status()?;
    Ok(())
}

//! Resolver configuration with sensible defaults.
//!
//! [`ResolverConfig`] controls where the catalog and search provider live,
//! per-request timeouts, request headers and the fuzzy-match ratio. The
//! defaults point at the live Manga-News catalog and the DuckDuckGo HTML
//! endpoint.

use crate::error::ResolveError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for title resolution and synopsis extraction.
///
/// Use [`Default::default()`] for the live services, or construct with
/// field overrides (tests point both base URLs at a mock server).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Scheme and authority of the catalog, e.g. `https://www.manga-news.com`.
    pub catalog_base_url: String,
    /// Domain used in the search provider's `site:` filter.
    pub catalog_site: String,
    /// Search provider endpoint receiving the `q` query parameter.
    pub search_base_url: String,
    /// Timeout for the search provider request, in seconds.
    pub search_timeout_seconds: u64,
    /// Timeout for each direct-guess existence probe, in seconds.
    pub probe_timeout_seconds: u64,
    /// Timeout for the synopsis page fetch, in seconds.
    pub page_timeout_seconds: u64,
    /// `Accept-Language` sent to the search provider.
    pub search_language: String,
    /// Custom User-Agent for the search provider. If `None`, rotates through a
    /// built-in list of realistic browser User-Agents.
    pub search_user_agent: Option<String>,
    /// User-Agent for catalog probes and page fetches.
    pub page_user_agent: String,
    /// Fraction of the normalised title length allowed as edit distance for a
    /// confident fuzzy match.
    pub fuzzy_ratio: f64,
    /// Drop `(...)` groups from the title before resolving it.
    pub strip_parenthesized: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            catalog_base_url: "https://www.manga-news.com".to_owned(),
            catalog_site: "manga-news.com".to_owned(),
            search_base_url: "https://html.duckduckgo.com/html/".to_owned(),
            search_timeout_seconds: 15,
            probe_timeout_seconds: 10,
            page_timeout_seconds: 10,
            search_language: "fr-FR,fr;q=0.9".to_owned(),
            search_user_agent: None,
            page_user_agent: "Mozilla/5.0".to_owned(),
            fuzzy_ratio: 0.4,
            strip_parenthesized: false,
        }
    }
}

impl ResolverConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - every timeout must be greater than 0
    /// - both base URLs must parse and have a host
    /// - `catalog_site` must not be empty
    /// - `fuzzy_ratio` must lie in `0.0..=1.0`
    pub fn validate(&self) -> Result<(), ResolveError> {
        for (name, value) in [
            ("search_timeout_seconds", self.search_timeout_seconds),
            ("probe_timeout_seconds", self.probe_timeout_seconds),
            ("page_timeout_seconds", self.page_timeout_seconds),
        ] {
            if value == 0 {
                return Err(ResolveError::Config(format!(
                    "{name} must be greater than 0"
                )));
            }
        }
        self.catalog_url()?;
        parse_with_host("search_base_url", &self.search_base_url)?;
        if self.catalog_site.trim().is_empty() {
            return Err(ResolveError::Config("catalog_site must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.fuzzy_ratio) {
            return Err(ResolveError::Config(
                "fuzzy_ratio must be between 0.0 and 1.0".into(),
            ));
        }
        Ok(())
    }

    /// The catalog base URL, parsed.
    pub fn catalog_url(&self) -> Result<Url, ResolveError> {
        parse_with_host("catalog_base_url", &self.catalog_base_url)
    }

    /// Host (plus explicit port, if any) that search-result display URLs
    /// must point at, e.g. `www.manga-news.com`.
    pub fn catalog_authority(&self) -> Result<String, ResolveError> {
        let url = self.catalog_url()?;
        let host = url.host_str().unwrap_or_default();
        Ok(match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_owned(),
        })
    }
}

fn parse_with_host(name: &str, raw: &str) -> Result<Url, ResolveError> {
    let url = Url::parse(raw)
        .map_err(|e| ResolveError::Config(format!("{name} is not a valid URL: {e}")))?;
    if url.host_str().is_none() {
        return Err(ResolveError::Config(format!("{name} must have a host")));
    }
    Ok(url)
}

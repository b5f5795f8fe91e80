//! HTTP clients for the search provider and the catalog.
//!
//! Search requests get a browser-like (rotated) User-Agent; catalog probes
//! and page fetches get the plain configured one. Every client carries the
//! timeout of the single step it is built for.

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use rand::seq::SliceRandom;
use std::time::Duration;

/// Realistic browser User-Agent strings, rotated per search request.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Build a [`reqwest::Client`] for the search provider.
///
/// The client has:
/// - Cookie store enabled (consent pages)
/// - `search_timeout_seconds` as overall timeout
/// - Random User-Agent from built-in rotation list (or custom if configured)
///
/// # Errors
///
/// Returns [`ResolveError::Http`] if the client cannot be constructed.
pub fn build_search_client(config: &ResolverConfig) -> Result<reqwest::Client, ResolveError> {
    let ua = match config.search_user_agent {
        Some(ref custom) => custom.clone(),
        None => random_user_agent().to_owned(),
    };
    build_client(ua, config.search_timeout_seconds)
}

/// Build a [`reqwest::Client`] for catalog requests with the given timeout.
///
/// # Errors
///
/// Returns [`ResolveError::Http`] if the client cannot be constructed.
pub fn build_catalog_client(
    config: &ResolverConfig,
    timeout_seconds: u64,
) -> Result<reqwest::Client, ResolveError> {
    build_client(config.page_user_agent.clone(), timeout_seconds)
}

fn build_client(user_agent: String, timeout_seconds: u64) -> Result<reqwest::Client, ResolveError> {
    reqwest::Client::builder()
        .cookie_store(true)
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(user_agent)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| ResolveError::Http(format!("failed to build HTTP client: {e}")))
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // USER_AGENTS is non-empty; choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_user_agent_returns_valid_ua() {
        let ua = random_user_agent();
        assert!(USER_AGENTS.contains(&ua));
        assert!(ua.contains("Mozilla/5.0"));
    }

    #[test]
    fn build_search_client_with_default_config() {
        let config = ResolverConfig::default();
        assert!(build_search_client(&config).is_ok());
    }

    #[test]
    fn build_search_client_with_custom_ua() {
        let config = ResolverConfig {
            search_user_agent: Some("CustomBot/1.0".into()),
            ..Default::default()
        };
        assert!(build_search_client(&config).is_ok());
    }

    #[test]
    fn build_catalog_client_with_probe_timeout() {
        let config = ResolverConfig::default();
        assert!(build_catalog_client(&config, config.probe_timeout_seconds).is_ok());
    }
}

//! # synopsis-resolver
//!
//! Resolve a free-text manga title to its Manga-News series page and extract
//! the synopsis, even though the catalog exposes no search API.
//!
//! ## Design
//!
//! - Searches DuckDuckGo's HTML endpoint with `site:manga-news.com <title>`
//!   and keeps result URLs shaped like catalog series pages
//! - Picks among them by Levenshtein distance over normalised keys, falling
//!   back to the first search hit when none is close enough
//! - Without usable search results, probes the guessed slug under both
//!   catalog namespaces (`serie`, then `serie-vo`)
//! - Extracts the synopsis with an ordered chain of CSS selectors covering
//!   the catalog's different page templates
//!
//! Every network step has its own timeout and is tried once. Failures are
//! logged and absorbed; callers only see the final [`SynopsisOutcome`].

pub mod config;
pub mod error;
pub mod http;
pub mod normalize;
pub mod provider;
pub mod providers;
pub mod resolver;
pub mod synopsis;
pub mod types;

pub use config::ResolverConfig;
pub use error::{ResolveError, Result};
pub use provider::SearchProvider;
pub use resolver::{Resolver, Strategy, STRATEGY_ORDER};
pub use types::{Candidate, PathKind, Resolution, Slug, SynopsisOutcome};

/// Resolve `title` and extract its synopsis using DuckDuckGo.
///
/// # Errors
///
/// Returns [`ResolveError::Config`] if `config` is invalid, or
/// [`ResolveError::InvalidTitle`] if `title` is blank.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> synopsis_resolver::Result<()> {
/// let config = synopsis_resolver::ResolverConfig::default();
/// match synopsis_resolver::resolve_synopsis("Death Note", &config).await? {
///     synopsis_resolver::SynopsisOutcome::Found { summary, .. } => println!("{summary}"),
///     other => println!("{other:?}"),
/// }
/// # Ok(())
/// # }
/// ```
pub async fn resolve_synopsis(title: &str, config: &ResolverConfig) -> Result<SynopsisOutcome> {
    Resolver::duckduckgo(config.clone())?
        .resolve_synopsis(title)
        .await
}

/// Resolve `title` with the default (live) configuration.
///
/// # Errors
///
/// Same as [`resolve_synopsis`].
pub async fn resolve_synopsis_default(title: &str) -> Result<SynopsisOutcome> {
    resolve_synopsis(title, &ResolverConfig::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolve_validates_config_zero_timeout() {
        let config = ResolverConfig {
            search_timeout_seconds: 0,
            ..Default::default()
        };
        let result = resolve_synopsis("Naruto", &config).await;
        assert!(result.unwrap_err().to_string().contains("timeout"));
    }

    #[tokio::test]
    async fn resolve_validates_config_bad_url() {
        let config = ResolverConfig {
            search_base_url: "::".into(),
            ..Default::default()
        };
        let result = resolve_synopsis("Naruto", &config).await;
        assert!(result.unwrap_err().to_string().contains("search_base_url"));
    }

    #[tokio::test]
    async fn resolve_rejects_empty_title() {
        let result = resolve_synopsis("", &ResolverConfig::default()).await;
        assert!(matches!(result, Err(ResolveError::InvalidTitle(_))));
    }
}

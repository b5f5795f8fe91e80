//! DuckDuckGo search provider. Uses the scraper-friendly HTML endpoint, no JavaScript required.
//!
//! Uses the HTML-only endpoint at `https://html.duckduckgo.com/html/`. Each
//! organic result renders its display URL in a `.result__url` element; that
//! text is matched against the catalog's series URL shape.

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::http;
use crate::provider::SearchProvider;
use crate::types::{Candidate, PathKind, Slug};
use regex::Regex;
use scraper::{Html, Selector};

/// DuckDuckGo HTML search scraper.
///
/// Queries `site:<catalog_site> <title>` with a French `Accept-Language` so
/// the catalog's localized listings rank first.
pub struct DuckDuckGoProvider;

impl SearchProvider for DuckDuckGoProvider {
    async fn candidates(
        &self,
        title: &str,
        config: &ResolverConfig,
    ) -> Result<Vec<Candidate>, ResolveError> {
        let query = format!("site:{} {title}", config.catalog_site);
        tracing::trace!(%query, "DuckDuckGo search");

        let client = http::build_search_client(config)?;

        let response = client
            .get(&config.search_base_url)
            .query(&[("q", query.as_str())])
            .header("Accept-Language", config.search_language.as_str())
            .send()
            .await?
            .error_for_status()?;

        let html = response
            .text()
            .await
            .map_err(|e| ResolveError::Http(format!("DuckDuckGo response read failed: {e}")))?;

        tracing::trace!(bytes = html.len(), "DuckDuckGo response received");

        extract_candidates(&html, &config.catalog_authority()?)
    }

    fn name(&self) -> &'static str {
        "DuckDuckGo"
    }
}

/// Parse a DuckDuckGo results page into catalog candidates.
///
/// `catalog_authority` is the catalog host (with port, if non-default) that
/// display URLs must point at. Non-matching results are skipped; the output
/// keeps document order.
///
/// # Errors
///
/// Returns [`ResolveError::Parse`] only if the selector or URL pattern cannot
/// be built.
pub fn extract_candidates(
    html: &str,
    catalog_authority: &str,
) -> Result<Vec<Candidate>, ResolveError> {
    let document = Html::parse_document(html);

    let url_sel = Selector::parse(".result__url")
        .map_err(|e| ResolveError::Parse(format!("invalid result URL selector: {e:?}")))?;
    let pattern = series_url_pattern(catalog_authority)?;

    let mut candidates = Vec::new();

    for element in document.select(&url_sel) {
        let link_text = element.text().collect::<String>().trim().to_string();
        tracing::debug!(link = %link_text, "result URL");

        let Some(caps) = pattern.captures(&link_text) else {
            continue;
        };
        let Some(path_kind) = PathKind::from_segment(&caps[1]) else {
            continue;
        };
        let slug = Slug::new(&caps[2]);
        tracing::debug!(%path_kind, %slug, "matched catalog link");

        candidates.push(Candidate {
            raw_link: link_text,
            path_kind,
            slug,
        });
    }

    tracing::debug!(count = candidates.len(), "DuckDuckGo candidates parsed");
    Ok(candidates)
}

/// `[https://]<authority>/index.php/(serie|serie-vo)/<slug>[/]`, anchored at
/// the end. The scheme is optional because DuckDuckGo usually renders display
/// URLs without one.
fn series_url_pattern(catalog_authority: &str) -> Result<Regex, ResolveError> {
    let pattern = format!(
        r"(?:^|https?://){}/index\.php/(serie|serie-vo)/([^/\s]+)/?$",
        regex::escape(catalog_authority)
    );
    Regex::new(&pattern).map_err(|e| ResolveError::Parse(format!("invalid URL pattern: {e}")))
}

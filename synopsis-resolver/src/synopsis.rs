//! Synopsis extraction from catalog series pages.
//!
//! Series pages come in several templates, so the synopsis is located with
//! an ordered chain of CSS selectors. Earlier selectors are more specific;
//! the first one whose first match has non-empty text wins.

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::http;
use crate::types::Resolution;
use scraper::{ElementRef, Html, Node, Selector};

/// One entry of the selector chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummarySelector {
    /// Short name used in logs.
    pub name: &'static str,
    /// CSS selector; only its first match in the document is considered.
    pub css: &'static str,
}

/// Selectors tried in order until one yields text.
pub const SELECTOR_CHAIN: [SummarySelector; 5] = [
    SummarySelector {
        name: "summary-bigsize",
        css: "div#summary div.bigsize",
    },
    SummarySelector {
        name: "summary-card-body",
        css: "div#summary div.card-body p",
    },
    SummarySelector {
        name: "summary-card-text",
        css: "div#summary div.card-text",
    },
    SummarySelector {
        name: "synopsis-description",
        css: r#"div#synopsis span[itemprop="description"]"#,
    },
    SummarySelector {
        name: "resume",
        css: "div.resume",
    },
];

/// Elements whose boundaries separate words even without whitespace in the
/// markup.
const BREAKING_TAGS: &[&str] = &["br", "p", "div", "li"];

/// Fetch the page for `resolution` and extract its synopsis.
///
/// Returns `None` if the page is unreachable, answers with a non-success
/// status, or no selector yields text. The log line tells status failures
/// apart from transport failures.
pub async fn fetch_synopsis(resolution: &Resolution, config: &ResolverConfig) -> Option<String> {
    let url = resolution.page_url(&config.catalog_base_url);
    tracing::debug!(%url, "fetching series page");

    let html = match fetch_page(&url, config).await {
        Ok(html) => html,
        Err(ResolveError::Status(status)) => {
            tracing::warn!(%url, status, "series page returned HTTP error");
            return None;
        }
        Err(e) => {
            tracing::warn!(%url, error = %e, "series page request failed");
            return None;
        }
    };

    let synopsis = extract_synopsis(&html);
    if synopsis.is_none() {
        tracing::warn!(%url, "no selector matched a synopsis");
    }
    synopsis
}

async fn fetch_page(url: &str, config: &ResolverConfig) -> Result<String, ResolveError> {
    let client = http::build_catalog_client(config, config.page_timeout_seconds)?;
    let response = client.get(url).send().await?.error_for_status()?;
    let html = response
        .text()
        .await
        .map_err(|e| ResolveError::Http(format!("series page read failed: {e}")))?;
    tracing::trace!(bytes = html.len(), "series page received");
    Ok(html)
}

/// Apply [`SELECTOR_CHAIN`] to a series page.
///
/// Returns the text of the first selector whose first match is non-empty,
/// with tags stripped and whitespace collapsed to single spaces.
pub fn extract_synopsis(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for entry in &SELECTOR_CHAIN {
        let Ok(selector) = Selector::parse(entry.css) else {
            continue;
        };
        let Some(element) = document.select(&selector).next() else {
            tracing::debug!(selector = entry.name, "selector matched nothing");
            continue;
        };
        let text = element_text(element);
        if text.is_empty() {
            tracing::debug!(selector = entry.name, "selector matched empty text");
            continue;
        }
        tracing::info!(selector = entry.name, chars = text.len(), "synopsis extracted");
        return Some(text);
    }

    None
}

/// Text content of `element` with tags stripped.
fn element_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => raw.push_str(text),
            Node::Element(el) if BREAKING_TAGS.contains(&el.name()) => raw.push(' '),
            _ => {}
        }
    }
    normalise_whitespace(&raw)
}

/// Collapse every whitespace run to one space and trim.
fn normalise_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

//! Core types: catalog namespaces, slugs, search candidates and resolutions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two URL namespaces the catalog files series under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathKind {
    /// Localized (French edition) listing, `/index.php/serie/`.
    #[serde(rename = "serie")]
    Primary,
    /// Original-language listing, `/index.php/serie-vo/`.
    #[serde(rename = "serie-vo")]
    AlternateOriginal,
}

impl PathKind {
    /// Order in which direct-guess probes try the namespaces.
    pub const PROBE_ORDER: [PathKind; 2] = [PathKind::Primary, PathKind::AlternateOriginal];

    /// The URL path segment for this namespace.
    pub fn segment(&self) -> &'static str {
        match self {
            Self::Primary => "serie",
            Self::AlternateOriginal => "serie-vo",
        }
    }

    /// Parse a URL path segment back into a namespace.
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "serie" => Some(Self::Primary),
            "serie-vo" => Some(Self::AlternateOriginal),
            _ => None,
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// A catalog URL path segment identifying one series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Wrap a path segment. No validation: search-derived slugs keep whatever
    /// casing and escaping the search result carried.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The slug text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the slug is empty (a title made only of symbols).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog link found on a search results page, not yet checked against
/// the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The display URL text exactly as the search provider rendered it.
    pub raw_link: String,
    /// Namespace parsed from the link.
    pub path_kind: PathKind,
    /// Slug parsed from the link.
    pub slug: Slug,
}

impl Candidate {
    /// The resolution this candidate stands for.
    pub fn to_resolution(&self) -> Resolution {
        Resolution::new(self.path_kind, self.slug.clone())
    }
}

/// A resolved catalog location. Immutable; the slug never travels without
/// its namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    path_kind: PathKind,
    slug: Slug,
}

impl Resolution {
    /// Pair a namespace with a slug.
    pub fn new(path_kind: PathKind, slug: Slug) -> Self {
        Self { path_kind, slug }
    }

    pub fn path_kind(&self) -> PathKind {
        self.path_kind
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Full page URL under `catalog_base_url`.
    pub fn page_url(&self, catalog_base_url: &str) -> String {
        catalog_page_url(catalog_base_url, self.path_kind, &self.slug)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.path_kind, self.slug)
    }
}

pub(crate) fn catalog_page_url(base: &str, path_kind: PathKind, slug: &Slug) -> String {
    format!(
        "{}/index.php/{}/{}",
        base.trim_end_matches('/'),
        path_kind.segment(),
        slug
    )
}

/// Terminal outcome of resolving a title all the way to its synopsis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynopsisOutcome {
    /// The page was found and a synopsis extracted.
    Found {
        resolution: Resolution,
        summary: String,
    },
    /// No strategy located a catalog page for the title.
    TitleNotFound,
    /// A page was located but it was unreachable or had no synopsis.
    SynopsisNotFound { resolution: Resolution },
}

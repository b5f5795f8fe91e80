//! Fuzzy selection of the best search candidate for a title.
//!
//! Every candidate slug is compared with the title by Levenshtein distance
//! over their comparison keys. The closest candidate wins if its distance is
//! within `ratio * len(title key)`; otherwise the first candidate in
//! discovery order is returned, on the assumption that the search engine's
//! top organic hit is usually right.
//!
//! An all-symbol title has an empty key and therefore a bound of `0.0`:
//! only an exact (empty) match passes, everything else falls back to the
//! first candidate.

use crate::normalize::normalize_for_comparison;
use crate::types::{Candidate, Resolution};

/// Default fraction of the title key length accepted as edit distance.
pub const DEFAULT_FUZZY_RATIO: f64 = 0.4;

/// Distance bound for a title key of `key_len` characters.
pub fn max_allowed_distance(key_len: usize, ratio: f64) -> f64 {
    key_len as f64 * ratio
}

/// Distance between a title key and a candidate slug (hyphens read as spaces).
pub fn slug_distance(title_key: &str, slug: &str) -> usize {
    let candidate_key = normalize_for_comparison(&slug.replace('-', " "));
    strsim::levenshtein(title_key, &candidate_key)
}

/// Pick a resolution from `candidates` for `title`.
///
/// Returns `None` only when `candidates` is empty.
pub fn select_candidate(title: &str, candidates: &[Candidate], ratio: f64) -> Option<Resolution> {
    let first = candidates.first()?;
    let key = normalize_for_comparison(title);
    let max_allowed = max_allowed_distance(key.len(), ratio);

    let mut best = first;
    let mut best_distance = usize::MAX;
    for candidate in candidates {
        let distance = slug_distance(&key, candidate.slug.as_str());
        tracing::debug!(
            link = %candidate.raw_link,
            slug = %candidate.slug,
            path_kind = %candidate.path_kind,
            distance,
            "scored candidate"
        );
        if distance < best_distance {
            best_distance = distance;
            best = candidate;
        }
    }

    if best_distance as f64 <= max_allowed {
        tracing::info!(
            slug = %best.slug,
            path_kind = %best.path_kind,
            distance = best_distance,
            max_allowed,
            "selected best fuzzy match"
        );
        Some(best.to_resolution())
    } else {
        tracing::info!(
            best_distance,
            max_allowed,
            slug = %first.slug,
            path_kind = %first.path_kind,
            "no confident fuzzy match, falling back to first result"
        );
        Some(first.to_resolution())
    }
}

//! Fuzzy matching of free-text activity descriptions against the registry.
//!
//! Scoring is token overlap with partial credit, not edit distance:
//!
//! - identical tokens add 1.0,
//! - a token contained in the other adds 0.7,
//! - tokens of length >= 3 where the longer contains the shorter add 0.5.
//!
//! The pairwise sum is divided by the larger token count and clipped to 1.0.
//! Exact equality of the normalized strings always scores 1.0.

use tracing::debug;

use crate::factor::{EmissionFactor, GLOBAL_REGION};
use crate::registry::FactorRegistry;

/// Confidence added when a region-specific override replaces the generic match.
pub const DEFAULT_REGIONAL_BOOST: f64 = 0.1;

const IDENTICAL_TOKEN: f64 = 1.0;
const CONTAINED_TOKEN: f64 = 0.7;
const SIMILAR_TOKEN: f64 = 0.5;
const MIN_SIMILAR_LEN: usize = 3;

// ---------------------------------------------------------------------------
// Normalization and scoring
// ---------------------------------------------------------------------------

/// Lowercase, replace everything outside `[a-z0-9 ]` with a space, collapse
/// runs of whitespace and trim.
pub fn normalize_activity(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Score a normalized input against a canonical registry activity, in `[0, 1]`.
pub fn match_score(input: &str, activity: &str) -> f64 {
    if input == activity {
        return 1.0;
    }

    let input_tokens: Vec<&str> = input.split_whitespace().collect();
    let activity_tokens: Vec<&str> = activity.split_whitespace().collect();
    if input_tokens.is_empty() || activity_tokens.is_empty() {
        return 0.0;
    }

    let mut score = 0.0;
    for a in &input_tokens {
        for b in &activity_tokens {
            score += token_score(a, b);
        }
    }

    let denom = input_tokens.len().max(activity_tokens.len()) as f64;
    (score / denom).min(1.0)
}

fn token_score(a: &str, b: &str) -> f64 {
    if a == b {
        IDENTICAL_TOKEN
    } else if a.contains(b) || b.contains(a) {
        CONTAINED_TOKEN
    } else if similar_tokens(a, b) {
        SIMILAR_TOKEN
    } else {
        0.0
    }
}

fn similar_tokens(a: &str, b: &str) -> bool {
    if a.len() < MIN_SIMILAR_LEN || b.len() < MIN_SIMILAR_LEN {
        return false;
    }
    let (longer, shorter) = if a.len() > b.len() { (a, b) } else { (b, a) };
    longer.contains(shorter)
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// The registry entry chosen for an activity description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorMatch<'r> {
    pub factor: &'r EmissionFactor,
    /// Final confidence in `[0, 1]`, including any regional boost.
    pub confidence: f64,
    /// Whether a region-specific override replaced the generic match.
    pub regional: bool,
}

impl<'r> FactorMatch<'r> {
    /// Canonical activity used for aggregation buckets.
    pub fn activity(&self) -> &'r str {
        &self.factor.activity
    }
}

/// Best-scoring entry for `text`, ignoring region. Ties keep registry order.
pub fn best_generic_match<'r>(
    registry: &'r FactorRegistry,
    text: &str,
) -> Option<(&'r EmissionFactor, f64)> {
    let normalized = normalize_activity(text);
    let mut best: Option<(&EmissionFactor, f64)> = None;

    for factor in registry.iter() {
        let score = match_score(&normalized, &factor.activity);
        if score > best.map_or(0.0, |(_, s)| s) {
            best = Some((factor, score));
            if score >= 1.0 {
                break;
            }
        }
    }

    best
}

/// Match `text` to a registry entry, preferring `region` when an override
/// exists for the matched activity.
pub fn match_activity<'r>(
    registry: &'r FactorRegistry,
    text: &str,
    region: &str,
    regional_boost: f64,
) -> Option<FactorMatch<'r>> {
    let (generic, score) = best_generic_match(registry, text)?;
    let mut found = FactorMatch {
        factor: generic,
        confidence: score.min(1.0),
        regional: false,
    };

    if region != GLOBAL_REGION {
        if let Some(local) = registry.regional_override(&generic.activity, region) {
            debug!(
                activity = %generic.activity,
                region,
                factor_id = %local.id,
                "regional override applied"
            );
            found.factor = local;
            // NaN boosts collapse to 0 through `max`.
            found.confidence = (found.confidence + regional_boost.max(0.0)).clamp(0.0, 1.0);
            found.regional = true;
        }
    }

    Some(found)
}

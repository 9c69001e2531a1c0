//! Fuzzy team-name resolution
//!
//! Maps free-text input to the closest canonical roster name using
//! case-insensitive Jaro-Winkler similarity on a 0-100 scale. A candidate
//! is accepted only when it scores strictly above the acceptance threshold,
//! so unrelated input reports "not found" instead of a bad guess.

use strsim::jaro_winkler;

/// Default acceptance threshold (0-100 scale).
pub const DEFAULT_MIN_SCORE: f64 = 80.0;

/// Resolve `input` against `roster`, returning the single best-scoring
/// canonical name when it clears `min_score`.
///
/// Deterministic for a fixed roster; ties keep the earlier roster entry.
pub fn resolve<'a>(input: &str, roster: &'a [String], min_score: f64) -> Option<&'a str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let mut best: Option<(&str, f64)> = None;
    for name in roster {
        let score = jaro_winkler(&needle, &name.to_lowercase()) * 100.0;
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((name.as_str(), score));
        }
    }

    match best {
        Some((name, score)) if score > min_score => {
            tracing::debug!(input, matched = name, score, "resolved team name");
            Some(name)
        }
        Some((name, score)) => {
            tracing::debug!(input, closest = name, score, "no team above threshold");
            None
        }
        None => None,
    }
}

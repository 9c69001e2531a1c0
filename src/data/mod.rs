//! Raw fixture table ingestion
//!
//! Reads the double-entry match CSV (one row per fixture, home/away columns)
//! into [`RawMatch`] rows. Malformed dates and missing scores are tolerated
//! per row; only an unreadable or structurally broken file fails the load.

use std::path::Path;

use crate::error::LoadError;
use crate::types::RawMatch;

/// Load the raw fixture table from `path`.
///
/// Runs exactly once at startup. Column headers follow the upstream data
/// export (`HomeTeam`, `AwayTeam`, `MatchDate`, ...); unknown columns are
/// ignored so richer exports load unchanged.
pub fn load_matches<P: AsRef<Path>>(path: P) -> Result<Vec<RawMatch>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())?;

    let mut matches = Vec::new();
    for row in reader.deserialize() {
        let raw: RawMatch = row?;
        matches.push(raw);
    }

    tracing::info!(
        rows = matches.len(),
        path = %path.as_ref().display(),
        "loaded raw fixture table"
    );
    Ok(matches)
}

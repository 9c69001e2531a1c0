//! Feature row assembly
//!
//! Builds the single inference row from the two teams' latest history
//! records and the caller-supplied market odds. Values are produced by
//! name, then materialized in the classifier's declared schema order;
//! hard-coding the order here would silently corrupt predictions the next
//! time the artifact is retrained with reordered columns.

use std::collections::HashMap;

use crate::error::{PredictorError, Result};
use crate::types::TeamMatchRecord;

/// Assemble the feature row for a home/away pairing in `schema` order.
///
/// `home_latest` and `away_latest` are each team's most recent record.
/// Missing rating/form values default to 0.0 in the row.
pub fn assemble(
    home_latest: &TeamMatchRecord,
    away_latest: &TeamMatchRecord,
    odds_home: f64,
    odds_draw: f64,
    odds_away: f64,
    schema: &[String],
) -> Result<Vec<f64>> {
    let mut values: HashMap<&str, f64> = HashMap::new();
    values.insert("team_code", home_latest.team_code as f64);
    values.insert("opponent_code", away_latest.team_code as f64);
    // The prediction is always posed from the home venue.
    values.insert("venue_code", 1.0);
    // Fixed placeholder carried over from training.
    values.insert("day_code", 5.0);
    values.insert("elo_for", home_latest.elo_for.unwrap_or(0.0));
    // Known quirk preserved from training: the away side's own elo_for,
    // not a rating computed relative to the home team.
    values.insert("elo_against", away_latest.elo_for.unwrap_or(0.0));
    values.insert("form_for", home_latest.form_for.unwrap_or(0.0));
    values.insert("odds_for", odds_home);
    values.insert("odds_draw", odds_draw);
    values.insert("odds_against", odds_away);

    schema
        .iter()
        .map(|name| {
            values.get(name.as_str()).copied().ok_or_else(|| {
                PredictorError::Assembly(format!("no value for schema feature {:?}", name))
            })
        })
        .collect()
}

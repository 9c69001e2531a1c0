//! Match history normalization
//!
//! Turns the raw double-entry fixture table (one row per match, home/away
//! columns) into a long-form table with one [`TeamMatchRecord`] per
//! (team, match, venue-role) pair. Built once at startup and immutable for
//! the process lifetime.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::types::{MatchResult, RawMatch, TeamMatchRecord, Venue};

/// The loaded long-form history table plus its categorical codebook and
/// the canonical roster.
#[derive(Debug)]
pub struct HistoryTable {
    records: Vec<TeamMatchRecord>,
    codes: BTreeMap<String, u32>,
    roster: Vec<String>,
}

impl HistoryTable {
    /// Normalize the full raw table.
    ///
    /// Each raw match emits one record per venue role whose team name is
    /// present. Codes are assigned after the table is built, over the
    /// distinct names seen in either the team or opponent position, in
    /// lexicographic order; `team_code` and `opponent_code` share the
    /// codebook so codes are comparable across roles.
    pub fn build(raw_matches: &[RawMatch]) -> Self {
        let mut records = Vec::with_capacity(raw_matches.len() * 2);
        for raw in raw_matches {
            for venue in [Venue::Home, Venue::Away] {
                if let Some(record) = derive_record(raw, venue) {
                    records.push(record);
                }
            }
        }

        let mut codes = BTreeMap::new();
        for record in &records {
            codes.entry(record.team.clone()).or_insert(0);
            if let Some(opponent) = &record.opponent {
                codes.entry(opponent.clone()).or_insert(0);
            }
        }
        for (i, code) in codes.values_mut().enumerate() {
            *code = i as u32;
        }

        for record in &mut records {
            record.team_code = codes[&record.team];
            record.opponent_code = record.opponent.as_ref().map(|o| codes[o]);
        }

        let mut roster: Vec<String> = Vec::new();
        for record in &records {
            if !roster.contains(&record.team) {
                roster.push(record.team.clone());
            }
        }

        tracing::info!(
            raw = raw_matches.len(),
            records = records.len(),
            teams = roster.len(),
            "normalized match history"
        );

        Self {
            records,
            codes,
            roster,
        }
    }

    pub fn records(&self) -> &[TeamMatchRecord] {
        &self.records
    }

    /// Distinct team names, in first-appearance order. This is the fuzzy
    /// resolver's candidate set.
    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn code_of(&self, name: &str) -> Option<u32> {
        self.codes.get(name).copied()
    }

    /// The team's most recent record by date. Dated records always outrank
    /// undated ones; with no dated record at all, any undated one is
    /// returned rather than nothing, matching how the table was consumed
    /// at training time.
    pub fn latest(&self, team: &str) -> Option<&TeamMatchRecord> {
        self.records
            .iter()
            .filter(|r| r.team == team)
            .max_by_key(|r| r.date)
    }
}

/// Derive one role-tagged record from a raw match, or `None` when that
/// role's team name is missing.
fn derive_record(raw: &RawMatch, venue: Venue) -> Option<TeamMatchRecord> {
    let (team, opponent) = match venue {
        Venue::Home => (raw.home_team.as_ref()?, raw.away_team.clone()),
        Venue::Away => (raw.away_team.as_ref()?, raw.home_team.clone()),
    };
    let (score_for, score_against) = match venue {
        Venue::Home => (raw.home_score, raw.away_score),
        Venue::Away => (raw.away_score, raw.home_score),
    };
    let (elo_for, elo_against, form_for, odds_for, odds_against) = match venue {
        Venue::Home => (
            raw.home_elo,
            raw.away_elo,
            raw.form5_home,
            raw.odd_home,
            raw.odd_away,
        ),
        Venue::Away => (
            raw.away_elo,
            raw.home_elo,
            raw.form5_away,
            raw.odd_away,
            raw.odd_home,
        ),
    };

    Some(TeamMatchRecord {
        team: team.clone(),
        opponent,
        venue,
        date: raw.date,
        elo_for,
        elo_against,
        form_for,
        odds_for,
        odds_draw: raw.odd_draw,
        odds_against,
        result: result_from_scores(score_for, score_against),
        team_code: 0,
        opponent_code: None,
    })
}

/// Outcome from the acting side's perspective. A missing or NaN score never
/// compares greater or lesser, so such matches fall through to Draw for
/// both roles.
fn result_from_scores(score_for: Option<f64>, score_against: Option<f64>) -> MatchResult {
    match score_for
        .zip(score_against)
        .and_then(|(f, a)| f.partial_cmp(&a))
    {
        Some(Ordering::Greater) => MatchResult::Win,
        Some(Ordering::Less) => MatchResult::Loss,
        _ => MatchResult::Draw,
    }
}

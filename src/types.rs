//! Core types shared across the prediction pipeline

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One played fixture, as it appears in the raw double-entry table.
///
/// Every field except the team names is tolerated missing; an unparseable
/// date is coerced to `None` and excluded from recency-dependent logic.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMatch {
    #[serde(rename = "HomeTeam", default, deserialize_with = "de_opt_string")]
    pub home_team: Option<String>,
    #[serde(rename = "AwayTeam", default, deserialize_with = "de_opt_string")]
    pub away_team: Option<String>,
    #[serde(rename = "MatchDate", default, deserialize_with = "de_lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "FTHome", default)]
    pub home_score: Option<f64>,
    #[serde(rename = "FTAway", default)]
    pub away_score: Option<f64>,
    #[serde(rename = "HomeElo", default)]
    pub home_elo: Option<f64>,
    #[serde(rename = "AwayElo", default)]
    pub away_elo: Option<f64>,
    #[serde(rename = "Form5Home", default)]
    pub form5_home: Option<f64>,
    #[serde(rename = "Form5Away", default)]
    pub form5_away: Option<f64>,
    #[serde(rename = "OddHome", default)]
    pub odd_home: Option<f64>,
    #[serde(rename = "OddDraw", default)]
    pub odd_draw: Option<f64>,
    #[serde(rename = "OddAway", default)]
    pub odd_away: Option<f64>,
    #[serde(rename = "FTResult", default, deserialize_with = "de_opt_string")]
    pub ft_result: Option<String>,
}

/// Empty CSV fields become `None` rather than `Some("")`.
fn de_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

/// Parses `YYYY-MM-DD`; anything unparseable is coerced to `None`.
fn de_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()))
}

/// Which side a team played on in a given match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Venue {
    Home,
    Away,
}

impl Venue {
    pub fn opposite(&self) -> Venue {
        match self {
            Venue::Home => Venue::Away,
            Venue::Away => Venue::Home,
        }
    }
}

/// Match outcome from the acting team's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

impl MatchResult {
    /// The single-letter class label the classifier was trained with.
    pub fn class_label(&self) -> &'static str {
        match self {
            MatchResult::Win => "W",
            MatchResult::Loss => "L",
            MatchResult::Draw => "D",
        }
    }

    pub fn from_class_label(label: &str) -> Option<MatchResult> {
        match label {
            "W" => Some(MatchResult::Win),
            "L" => Some(MatchResult::Loss),
            "D" => Some(MatchResult::Draw),
            _ => None,
        }
    }
}

/// One row of the long-form history table: a single team's view of a
/// single match. Two of these are derived per raw match, one per venue role.
#[derive(Debug, Clone)]
pub struct TeamMatchRecord {
    pub team: String,
    /// `None` when the raw row named only the acting side.
    pub opponent: Option<String>,
    pub venue: Venue,
    pub date: Option<NaiveDate>,
    pub elo_for: Option<f64>,
    pub elo_against: Option<f64>,
    pub form_for: Option<f64>,
    pub odds_for: Option<f64>,
    pub odds_draw: Option<f64>,
    pub odds_against: Option<f64>,
    pub result: MatchResult,
    /// Categorical code for `team`, shared codebook with `opponent_code`.
    pub team_code: u32,
    pub opponent_code: Option<u32>,
}

/// Head-to-head record between two teams, derived per request.
#[derive(Debug, Clone, Serialize)]
pub struct HeadToHeadSummary {
    pub summary: String,
    pub team1_wins: u32,
    pub team2_wins: u32,
    pub draws: u32,
    /// Up to five most recent meetings, most recent first.
    pub last_5: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest {
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub odds_home: f64,
    #[serde(default)]
    pub odds_draw: f64,
    #[serde(default)]
    pub odds_away: f64,
}

/// Probability triple over the three outcomes. The classifier decides the
/// magnitudes; classes it does not emit default to 0 and the triple is not
/// renormalized.
#[derive(Debug, Clone, Serialize)]
pub struct OutcomeProbabilities {
    pub home_team_win_prob: f64,
    pub draw_prob: f64,
    pub away_team_win_prob: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    pub found_home_team: String,
    pub found_away_team: String,
    pub prediction: OutcomeProbabilities,
    pub head_to_head: HeadToHeadSummary,
}

//! Head-to-head analysis between two teams
//!
//! Works directly on the raw fixture rows rather than the normalized table,
//! re-deriving outcome counts from the full-time result code. Tolerates
//! missing dates, scores and result codes without failing.

use crate::types::{HeadToHeadSummary, RawMatch};

/// Cumulative head-to-head record for `team1` vs `team2`, in either
/// orientation, plus the five most recent meetings rendered as text.
pub fn head_to_head(team1: &str, team2: &str, raw_matches: &[RawMatch]) -> HeadToHeadSummary {
    let mut meetings: Vec<&RawMatch> = raw_matches
        .iter()
        .filter(|m| {
            let home = m.home_team.as_deref();
            let away = m.away_team.as_deref();
            (home == Some(team1) && away == Some(team2))
                || (home == Some(team2) && away == Some(team1))
        })
        .collect();

    if meetings.is_empty() {
        return HeadToHeadSummary {
            summary: "No historical matches found.".to_string(),
            team1_wins: 0,
            team2_wins: 0,
            draws: 0,
            last_5: Vec::new(),
        };
    }

    let mut team1_wins = 0;
    let mut team2_wins = 0;
    let mut draws = 0;
    for m in &meetings {
        let result = m.ft_result.as_deref().unwrap_or("");
        let team1_home = m.home_team.as_deref() == Some(team1);
        let team1_away = m.away_team.as_deref() == Some(team1);
        if (result == "H" && team1_home) || (result == "A" && team1_away) {
            team1_wins += 1;
        } else if result == "D" {
            draws += 1;
        } else {
            team2_wins += 1;
        }
    }

    // Most recent first, undated rows last.
    meetings.sort_by(|a, b| b.date.cmp(&a.date));
    let last_5 = meetings.iter().take(5).map(|m| render_meeting(m)).collect();

    HeadToHeadSummary {
        summary: format!(
            "{} Wins: {} | {} Wins: {} | Draws: {}",
            team1, team1_wins, team2, team2_wins, draws
        ),
        team1_wins,
        team2_wins,
        draws,
        last_5,
    }
}

/// `"YYYY-MM-DD: Home h-a Away"`, with missing scores rendered as 0.
fn render_meeting(m: &RawMatch) -> String {
    let date = m
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown date".to_string());
    format!(
        "{}: {} {}-{} {}",
        date,
        m.home_team.as_deref().unwrap_or(""),
        m.home_score.unwrap_or(0.0) as i64,
        m.away_score.unwrap_or(0.0) as i64,
        m.away_team.as_deref().unwrap_or(""),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn meeting(
        home: &str,
        away: &str,
        day: u32,
        hs: Option<f64>,
        aw: Option<f64>,
        result: Option<&str>,
    ) -> RawMatch {
        RawMatch {
            home_team: Some(home.to_string()),
            away_team: Some(away.to_string()),
            date: NaiveDate::from_ymd_opt(2024, 1, day),
            home_score: hs,
            away_score: aw,
            home_elo: None,
            away_elo: None,
            form5_home: None,
            form5_away: None,
            odd_home: None,
            odd_draw: None,
            odd_away: None,
            ft_result: result.map(String::from),
        }
    }

    #[test]
    fn test_no_meetings() {
        let rows = vec![meeting("Chelsea", "Liverpool", 1, Some(1.0), Some(0.0), Some("H"))];
        let h2h = head_to_head("Arsenal", "Chelsea", &rows);
        assert_eq!(h2h.summary, "No historical matches found.");
        assert_eq!(h2h.team1_wins, 0);
        assert_eq!(h2h.team2_wins, 0);
        assert_eq!(h2h.draws, 0);
        assert!(h2h.last_5.is_empty());
    }

    #[test]
    fn test_single_meeting_attribution() {
        let rows = vec![meeting("Arsenal", "Chelsea", 2, Some(2.0), Some(1.0), Some("H"))];
        let h2h = head_to_head("Arsenal", "Chelsea", &rows);
        assert_eq!(h2h.team1_wins, 1);
        assert_eq!(h2h.team2_wins, 0);
        assert_eq!(h2h.draws, 0);
        assert_eq!(h2h.last_5, vec!["2024-01-02: Arsenal 2-1 Chelsea"]);
    }

    #[test]
    fn test_both_orientations_counted() {
        let rows = vec![
            meeting("Arsenal", "Chelsea", 1, Some(2.0), Some(0.0), Some("H")),
            meeting("Chelsea", "Arsenal", 2, Some(0.0), Some(1.0), Some("A")),
            meeting("Chelsea", "Arsenal", 3, Some(1.0), Some(1.0), Some("D")),
            meeting("Chelsea", "Arsenal", 4, Some(3.0), Some(0.0), Some("H")),
        ];
        let h2h = head_to_head("Arsenal", "Chelsea", &rows);
        assert_eq!(h2h.team1_wins, 2);
        assert_eq!(h2h.team2_wins, 1);
        assert_eq!(h2h.draws, 1);
    }

    #[test]
    fn test_win_counts_symmetric_in_argument_order() {
        let rows = vec![
            meeting("Arsenal", "Chelsea", 1, Some(2.0), Some(0.0), Some("H")),
            meeting("Chelsea", "Arsenal", 2, Some(0.0), Some(1.0), Some("A")),
            meeting("Chelsea", "Arsenal", 3, Some(1.0), Some(1.0), Some("D")),
        ];
        let ab = head_to_head("Arsenal", "Chelsea", &rows);
        let ba = head_to_head("Chelsea", "Arsenal", &rows);
        assert_eq!(ab.team1_wins, ba.team2_wins);
        assert_eq!(ab.team2_wins, ba.team1_wins);
        assert_eq!(ab.draws, ba.draws);
    }

    #[test]
    fn test_last_5_sorted_and_capped() {
        let rows: Vec<RawMatch> = (1..=7)
            .map(|d| meeting("Arsenal", "Chelsea", d, Some(1.0), Some(0.0), Some("H")))
            .collect();
        let h2h = head_to_head("Arsenal", "Chelsea", &rows);
        assert_eq!(h2h.last_5.len(), 5);
        assert!(h2h.last_5[0].starts_with("2024-01-07"));
        assert!(h2h.last_5[4].starts_with("2024-01-03"));
    }

    #[test]
    fn test_missing_scores_render_as_zero() {
        let rows = vec![meeting("Arsenal", "Chelsea", 5, None, None, Some("D"))];
        let h2h = head_to_head("Arsenal", "Chelsea", &rows);
        assert_eq!(h2h.last_5, vec!["2024-01-05: Arsenal 0-0 Chelsea"]);
        assert_eq!(h2h.draws, 1);
    }

    #[test]
    fn test_missing_date_renders_and_sorts_last() {
        let mut undated = meeting("Arsenal", "Chelsea", 1, Some(1.0), Some(0.0), Some("H"));
        undated.date = None;
        let rows = vec![
            undated,
            meeting("Arsenal", "Chelsea", 2, Some(0.0), Some(0.0), Some("D")),
        ];
        let h2h = head_to_head("Arsenal", "Chelsea", &rows);
        assert_eq!(h2h.last_5.len(), 2);
        assert!(h2h.last_5[0].starts_with("2024-01-02"));
        assert!(h2h.last_5[1].starts_with("unknown date"));
    }

    #[test]
    fn test_missing_result_code_counts_for_team2() {
        // Faithful to how the counts were always derived: an absent code
        // falls through to the team2 branch.
        let rows = vec![meeting("Arsenal", "Chelsea", 1, Some(2.0), Some(1.0), None)];
        let h2h = head_to_head("Arsenal", "Chelsea", &rows);
        assert_eq!(h2h.team1_wins, 0);
        assert_eq!(h2h.team2_wins, 1);
    }
}

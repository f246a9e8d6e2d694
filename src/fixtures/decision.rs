use crate::config::LeagueFormat;
use crate::matches::{resolve_outcome, Match, Side};

use super::models::FixtureStatus;

/// Result of resolving one fixture's matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureDecision {
    pub status: FixtureStatus,
    /// Outcome locked in by the regular matches alone
    pub effectively_completed: bool,
    pub team1_regular_wins: u32,
    pub team2_regular_wins: u32,
    /// Matches that stay visible and countable
    pub retained: Vec<Match>,
    /// Tiebreaks made irrelevant by an early decision
    pub excluded: Vec<Match>,
}

/// Completed if every match is, in progress if some are, scheduled otherwise
pub fn generic_status(matches: &[Match]) -> FixtureStatus {
    let completed = matches.iter().filter(|m| m.is_completed()).count();
    if !matches.is_empty() && completed == matches.len() {
        FixtureStatus::Completed
    } else if completed > 0 {
        FixtureStatus::InProgress
    } else {
        FixtureStatus::Scheduled
    }
}

/// Once all regular matches are in and one side holds the majority, the
/// fixture is over: the tiebreak drops out, even if it was already played.
pub fn decide_fixture(matches: Vec<Match>, format: &LeagueFormat) -> FixtureDecision {
    let completed_regular: Vec<&Match> = matches
        .iter()
        .filter(|m| !m.is_tiebreak() && m.is_completed())
        .collect();

    let (mut team1_wins, mut team2_wins) = (0, 0);
    for m in &completed_regular {
        match resolve_outcome(m).winner {
            Some(Side::Team1) => team1_wins += 1,
            Some(Side::Team2) => team2_wins += 1,
            None => {}
        }
    }

    let all_regular_in = completed_regular.len() as u32 >= format.regular_matches;
    let majority = team1_wins >= format.decision_majority || team2_wins >= format.decision_majority;

    if all_regular_in && majority {
        let (excluded, retained): (Vec<Match>, Vec<Match>) =
            matches.into_iter().partition(|m| m.is_tiebreak());
        return FixtureDecision {
            status: FixtureStatus::Completed,
            effectively_completed: true,
            team1_regular_wins: team1_wins,
            team2_regular_wins: team2_wins,
            retained,
            excluded,
        };
    }

    FixtureDecision {
        status: generic_status(&matches),
        effectively_completed: false,
        team1_regular_wins: team1_wins,
        team2_regular_wins: team2_wins,
        retained: matches,
        excluded: Vec::new(),
    }
}

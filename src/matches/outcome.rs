use serde::{Deserialize, Serialize};

use super::models::{Match, Side};

/// Game and point tallies for one match, plus who took it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub team1_games: u32,
    pub team2_games: u32,
    pub team1_points: u32,
    pub team2_points: u32,
    /// `None` when both sides won the same number of games
    pub winner: Option<Side>,
}

impl MatchOutcome {
    pub fn games(&self, side: Side) -> u32 {
        match side {
            Side::Team1 => self.team1_games,
            Side::Team2 => self.team2_games,
        }
    }

    pub fn points(&self, side: Side) -> u32 {
        match side {
            Side::Team1 => self.team1_points,
            Side::Team2 => self.team2_points,
        }
    }
}

/// Compares the two sides game by game over `1..=games_count`. Missing scores
/// count as zero and a level game goes to nobody. Point totals saturate.
pub fn resolve_outcome(m: &Match) -> MatchOutcome {
    let mut outcome = MatchOutcome::default();

    for game in 1..=m.games_count {
        let team1 = m.scores.game(Side::Team1, game);
        let team2 = m.scores.game(Side::Team2, game);
        outcome.team1_points = outcome.team1_points.saturating_add(team1);
        outcome.team2_points = outcome.team2_points.saturating_add(team2);

        if team1 > team2 {
            outcome.team1_games += 1;
        } else if team2 > team1 {
            outcome.team2_games += 1;
        }
    }

    outcome.winner = if outcome.team1_games > outcome.team2_games {
        Some(Side::Team1)
    } else if outcome.team2_games > outcome.team1_games {
        Some(Side::Team2)
    } else {
        None
    };

    outcome
}

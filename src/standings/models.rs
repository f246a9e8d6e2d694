use serde::{Deserialize, Serialize};

use crate::config::LeagueFormat;
use crate::matches::Team;

/// A team's league record across its non-playoff fixtures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team_id: String,
    pub team_name: String,
    /// 1-based rank once sorted
    pub position: usize,
    pub battle_wins: u32,
    pub battle_losses: u32,
    pub points: u32,
    pub game_wins: u32,
    pub game_losses: u32,
    pub points_won: u32,
    pub points_lost: u32,
    pub games_difference: i64,
    pub points_difference: i64,
}

impl TeamStanding {
    pub fn new(team: &Team) -> Self {
        Self {
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            ..Self::default()
        }
    }

    pub fn apply(&mut self, stat: &CollectedStat, format: &LeagueFormat) {
        match *stat {
            CollectedStat::Tally {
                game_wins,
                game_losses,
                points_won,
                points_lost,
            } => {
                self.game_wins = self.game_wins.saturating_add(game_wins);
                self.game_losses = self.game_losses.saturating_add(game_losses);
                self.points_won = self.points_won.saturating_add(points_won);
                self.points_lost = self.points_lost.saturating_add(points_lost);
            }
            CollectedStat::Battle { won: true } => {
                self.battle_wins = self.battle_wins.saturating_add(1);
                self.points = self.points.saturating_add(format.points_per_battle_win);
            }
            CollectedStat::Battle { won: false } => {
                self.battle_losses = self.battle_losses.saturating_add(1);
            }
        }
        self.games_difference = i64::from(self.game_wins) - i64::from(self.game_losses);
        self.points_difference = i64::from(self.points_won) - i64::from(self.points_lost);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectedStat {
    /// Games and points from one regular match
    Tally {
        game_wins: u32,
        game_losses: u32,
        points_won: u32,
        points_lost: u32,
    },
    /// A decided fixture
    Battle { won: bool },
}

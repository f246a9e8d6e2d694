use crate::config::LeagueFormat;
use crate::fixtures::Fixture;
use crate::matches::{resolve_outcome, Side};

use super::super::{CollectedStat, CollectedStatBatch, FixtureCollector};

/// Games and points from completed regular matches. The tiebreak never feeds
/// these totals, played or not.
pub struct GameTallyCollector;

impl GameTallyCollector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GameTallyCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureCollector for GameTallyCollector {
    fn collect(&self, fixture: &Fixture, side: Side, _format: &LeagueFormat) -> CollectedStatBatch {
        fixture
            .matches
            .iter()
            .filter(|m| m.is_completed() && !m.is_tiebreak())
            .map(|m| {
                let outcome = resolve_outcome(m);
                CollectedStat::Tally {
                    game_wins: outcome.games(side),
                    game_losses: outcome.games(side.opposite()),
                    points_won: outcome.points(side),
                    points_lost: outcome.points(side.opposite()),
                }
            })
            .collect()
    }

    fn collector_name(&self) -> &'static str {
        "GameTallyCollector"
    }
}

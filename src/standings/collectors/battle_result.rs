use crate::config::LeagueFormat;
use crate::fixtures::{Fixture, FixtureStatus};
use crate::matches::{resolve_outcome, Side};

use super::super::{CollectedStat, CollectedStatBatch, FixtureCollector};

/// The side that has taken the fixture, if any.
///
/// A side wins outright once its completed-match wins (tiebreak included)
/// reach half the fixture's current match count, rounded up. If both or
/// neither reach it, a completed fixture goes to whoever won more matches and
/// a level one stays undecided.
pub fn fixture_winner(fixture: &Fixture) -> Option<Side> {
    let (mut team1_wins, mut team2_wins) = (0usize, 0usize);
    for m in fixture.matches.iter().filter(|m| m.is_completed()) {
        match resolve_outcome(m).winner {
            Some(Side::Team1) => team1_wins += 1,
            Some(Side::Team2) => team2_wins += 1,
            None => {}
        }
    }

    let threshold = fixture.matches.len().div_ceil(2);
    if threshold > 0 {
        match (team1_wins >= threshold, team2_wins >= threshold) {
            (true, false) => return Some(Side::Team1),
            (false, true) => return Some(Side::Team2),
            _ => {}
        }
    }

    if fixture.status != FixtureStatus::Completed {
        return None;
    }
    match team1_wins.cmp(&team2_wins) {
        std::cmp::Ordering::Greater => Some(Side::Team1),
        std::cmp::Ordering::Less => Some(Side::Team2),
        std::cmp::Ordering::Equal => None,
    }
}

/// Battle win or loss once a fixture is decided
pub struct BattleResultCollector;

impl BattleResultCollector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BattleResultCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureCollector for BattleResultCollector {
    fn collect(&self, fixture: &Fixture, side: Side, _format: &LeagueFormat) -> CollectedStatBatch {
        fixture_winner(fixture)
            .map(|winner| CollectedStat::Battle { won: winner == side })
            .into_iter()
            .collect()
    }

    fn collector_name(&self) -> &'static str {
        "BattleResultCollector"
    }
}

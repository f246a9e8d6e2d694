use serde::{Deserialize, Serialize};

use crate::engine::StandingsEngine;
use crate::fixtures::Fixture;
use crate::matches::{ingest, Match, MatchRecord, Team, TeamDirectory};
use crate::standings::TeamStanding;

/// Everything the display surfaces read for one tournament, computed from a
/// single snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentView {
    pub tournament_id: String,
    pub revision: u64,
    pub fixtures: Vec<Fixture>,
    pub standings: Vec<TeamStanding>,
    /// Every match in display order
    pub matches: Vec<Match>,
}

impl TournamentView {
    pub fn empty(tournament_id: &str) -> Self {
        Self {
            tournament_id: tournament_id.to_string(),
            ..Self::default()
        }
    }

    pub fn compute(
        tournament_id: &str,
        revision: u64,
        records: &[MatchRecord],
        teams: &[Team],
        engine: &StandingsEngine,
    ) -> Self {
        let matches = ingest(records.iter().cloned());
        let directory = TeamDirectory::new(teams);
        let fixtures = engine.compute_fixtures_with(&matches, &directory);
        let standings = engine.standings_from_fixtures(&fixtures, teams);

        Self {
            tournament_id: tournament_id.to_string(),
            revision,
            matches: engine.order_matches(&matches),
            fixtures,
            standings,
        }
    }

    /// The fixture a match was grouped into, including as an excluded tiebreak
    pub fn fixture_for(&self, match_id: &str) -> Option<&Fixture> {
        self.fixtures.iter().find(|fixture| {
            fixture.find_match(match_id).is_some()
                || fixture.excluded_matches.iter().any(|m| m.id == match_id)
        })
    }

    pub fn standing(&self, team_id: &str) -> Option<&TeamStanding> {
        self.standings.iter().find(|s| s.team_id == team_id)
    }
}

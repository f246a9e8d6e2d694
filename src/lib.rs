// League standings and fixture aggregation engine
//
// Turns a snapshot of match records into fixtures, a league table and a
// display order for matches. The pure computations live in `matches`,
// `fixtures` and `standings`; `store`, `event` and `live` keep views current as
// the store changes.

pub mod config;
pub mod engine;
pub mod event;
pub mod fixtures;
pub mod live;
pub mod matches;
pub mod reveal;
pub mod shared;
pub mod standings;
pub mod store;

pub use config::{EngineConfig, LeagueFormat};
pub use engine::StandingsEngine;
pub use event::{EventBus, TournamentEvent, TournamentSubscription};
pub use fixtures::{Fixture, FixtureStatus};
pub use live::{LiveStandings, StandingsHub, TournamentView};
pub use matches::{ingest, order_matches, Match, MatchKind, MatchRecord, MatchStatus, MatchType, Team};
pub use shared::EngineError;
pub use standings::TeamStanding;
pub use store::{InMemoryMatchStore, MatchStore, StoreError};

/// Fixtures for a snapshot under the default league format
pub fn compute_fixtures(matches: &[Match]) -> Vec<Fixture> {
    StandingsEngine::default().compute_fixtures(matches)
}

/// Sorted league table under the default league format
pub fn compute_standings(matches: &[Match], teams: &[Team]) -> Vec<TeamStanding> {
    StandingsEngine::default().compute_standings(matches, teams)
}

/// Reveal check against the local clock with the default lead time
pub fn should_show_player_names(m: &Match, fixture: Option<&Fixture>) -> bool {
    StandingsEngine::default().should_show_player_names(m, fixture)
}

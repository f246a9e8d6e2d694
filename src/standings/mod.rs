pub mod collectors;
pub mod service;

pub mod models;
mod sorter;

pub use models::*;
pub use service::{StandingsService, StandingsServiceBuilder};
pub use sorter::{compare_standings, sort_standings};

use crate::config::LeagueFormat;
use crate::fixtures::Fixture;
use crate::matches::Side;

pub type CollectedStatBatch = Vec<CollectedStat>;

/// Pulls one side's contribution out of one eligible fixture. Collectors run
/// against every league fixture a team plays in; the service folds what they
/// return into the team's standing.
pub trait FixtureCollector: Send + Sync {
    fn collect(&self, fixture: &Fixture, side: Side, format: &LeagueFormat) -> CollectedStatBatch;

    fn collector_name(&self) -> &'static str;
}

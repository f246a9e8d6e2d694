use std::sync::Arc;

use tracing::debug;

use crate::config::LeagueFormat;
use crate::fixtures::{Fixture, FixtureStatus};
use crate::matches::Team;

use super::{
    collectors::{BattleResultCollector, GameTallyCollector},
    sort_standings, FixtureCollector, TeamStanding,
};

/// Folds fixtures into a sorted league table
#[derive(Clone)]
pub struct StandingsService {
    collectors: Vec<Arc<dyn FixtureCollector>>,
    format: LeagueFormat,
}

impl StandingsService {
    pub fn builder() -> StandingsServiceBuilder {
        StandingsServiceBuilder::new()
    }

    pub fn format(&self) -> &LeagueFormat {
        &self.format
    }

    /// League fixtures that have started count; playoffs never do
    pub fn is_eligible(fixture: &Fixture) -> bool {
        fixture.is_league()
            && matches!(
                fixture.status,
                FixtureStatus::Completed | FixtureStatus::InProgress
            )
    }

    /// One row per team in `teams`, including teams with nothing played yet
    pub fn compute(&self, fixtures: &[Fixture], teams: &[Team]) -> Vec<TeamStanding> {
        let eligible: Vec<&Fixture> = fixtures.iter().filter(|f| Self::is_eligible(f)).collect();

        let mut standings: Vec<TeamStanding> = teams
            .iter()
            .map(|team| self.standing_for(team, &eligible))
            .collect();
        sort_standings(&mut standings);

        debug!(
            teams = standings.len(),
            fixtures = eligible.len(),
            "Computed standings"
        );
        standings
    }

    fn standing_for(&self, team: &Team, fixtures: &[&Fixture]) -> TeamStanding {
        let mut standing = TeamStanding::new(team);
        for fixture in fixtures {
            let Some(side) = fixture.side_of(team) else {
                continue;
            };
            for collector in &self.collectors {
                for stat in collector.collect(fixture, side, &self.format) {
                    standing.apply(&stat, &self.format);
                }
            }
        }
        standing
    }
}

pub struct StandingsServiceBuilder {
    collectors: Vec<Arc<dyn FixtureCollector>>,
    format: LeagueFormat,
}

impl StandingsServiceBuilder {
    fn new() -> Self {
        Self {
            collectors: vec![
                Arc::new(GameTallyCollector::new()),
                Arc::new(BattleResultCollector::new()),
            ],
            format: LeagueFormat::default(),
        }
    }

    pub fn with_collector(mut self, collector: Arc<dyn FixtureCollector>) -> Self {
        self.collectors.push(collector);
        self
    }

    pub fn with_format(mut self, format: LeagueFormat) -> Self {
        self.format = format;
        self
    }

    pub fn build(self) -> StandingsService {
        StandingsService {
            collectors: self.collectors,
            format: self.format,
        }
    }
}

impl Default for StandingsService {
    fn default() -> Self {
        Self::builder().build()
    }
}

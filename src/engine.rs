use chrono::NaiveDateTime;

use crate::config::{EngineConfig, LeagueFormat};
use crate::fixtures::{build_fixtures, Fixture};
use crate::matches::{order_matches, Match, Team, TeamDirectory};
use crate::reveal;
use crate::shared::EngineError;
use crate::standings::{StandingsService, TeamStanding};

/// The engine's operations bound to one configuration
#[derive(Clone)]
pub struct StandingsEngine {
    config: EngineConfig,
    standings: StandingsService,
}

impl Default for StandingsEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            standings: StandingsService::builder().with_format(config.format).build(),
            config,
        }
    }
}

impl StandingsEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            standings: StandingsService::builder().with_format(config.format).build(),
            config,
        })
    }

    /// Same engine with a different league format
    pub fn with_format(&self, format: LeagueFormat) -> Result<Self, EngineError> {
        Self::new(self.config.clone().with_format(format))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn compute_fixtures(&self, matches: &[Match]) -> Vec<Fixture> {
        self.compute_fixtures_with(matches, &TeamDirectory::default())
    }

    /// Fixtures with display names and legacy keys resolved against `directory`
    pub fn compute_fixtures_with(&self, matches: &[Match], directory: &TeamDirectory) -> Vec<Fixture> {
        build_fixtures(matches, directory, &self.config)
    }

    pub fn compute_standings(&self, matches: &[Match], teams: &[Team]) -> Vec<TeamStanding> {
        let directory = TeamDirectory::new(teams);
        let fixtures = self.compute_fixtures_with(matches, &directory);
        self.standings_from_fixtures(&fixtures, teams)
    }

    pub fn standings_from_fixtures(&self, fixtures: &[Fixture], teams: &[Team]) -> Vec<TeamStanding> {
        self.standings.compute(fixtures, teams)
    }

    pub fn order_matches(&self, matches: &[Match]) -> Vec<Match> {
        order_matches(matches)
    }

    pub fn should_show_player_names(&self, m: &Match, fixture: Option<&Fixture>) -> bool {
        reveal::should_show_player_names(m, fixture, self.config.reveal_lead())
    }

    pub fn should_show_player_names_at(
        &self,
        m: &Match,
        fixture: Option<&Fixture>,
        now: NaiveDateTime,
    ) -> bool {
        reveal::should_show_player_names_at(m, fixture, now, self.config.reveal_lead())
    }
}

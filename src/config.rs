use std::env;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::shared::EngineError;

/// Fixture markers that take a fixture out of the league table.
pub const DEFAULT_PLAYOFF_MARKERS: [&str; 6] = [
    "playoff",
    "Qualifier",
    "Qualifier 1",
    "Qualifier 2",
    "Eliminator",
    "Final",
];

/// Longest accepted reveal lead: one week
pub const MAX_REVEAL_LEAD_MINUTES: i64 = 7 * 24 * 60;

/// Shape of a league fixture: how many regular matches it has and how many of
/// them settle it before the gamebreaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueFormat {
    pub regular_matches: u32,
    pub decision_majority: u32,
    pub points_per_battle_win: u32,
}

impl Default for LeagueFormat {
    fn default() -> Self {
        Self {
            regular_matches: 6,
            decision_majority: 4,
            points_per_battle_win: 3,
        }
    }
}

impl LeagueFormat {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.regular_matches == 0 {
            return Err(EngineError::invalid_config(
                "a fixture needs at least one regular match",
            ));
        }
        if self.decision_majority.saturating_mul(2) <= self.regular_matches {
            return Err(EngineError::invalid_config(format!(
                "decision majority {} is not a majority of {} regular matches",
                self.decision_majority, self.regular_matches
            )));
        }
        if self.decision_majority > self.regular_matches {
            return Err(EngineError::invalid_config(format!(
                "decision majority {} exceeds {} regular matches",
                self.decision_majority, self.regular_matches
            )));
        }
        Ok(())
    }
}

/// Configuration for the whole engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub format: LeagueFormat,
    /// How long before the scheduled start player names become visible
    pub reveal_lead_minutes: i64,
    pub playoff_markers: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            format: LeagueFormat::default(),
            reveal_lead_minutes: 55,
            playoff_markers: DEFAULT_PLAYOFF_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `LEAGUE_REGULAR_MATCHES`, `LEAGUE_DECISION_MAJORITY`,
    /// `LEAGUE_POINTS_PER_WIN` and `REVEAL_LEAD_MINUTES`.
    pub fn from_env() -> Result<Self, EngineError> {
        let mut config = Self::default();

        if let Some(value) = env_number::<u32>("LEAGUE_REGULAR_MATCHES") {
            config.format.regular_matches = value;
        }
        if let Some(value) = env_number::<u32>("LEAGUE_DECISION_MAJORITY") {
            config.format.decision_majority = value;
        }
        if let Some(value) = env_number::<u32>("LEAGUE_POINTS_PER_WIN") {
            config.format.points_per_battle_win = value;
        }
        if let Some(value) = env_number::<i64>("REVEAL_LEAD_MINUTES") {
            config.reveal_lead_minutes = value;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_format(mut self, format: LeagueFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_reveal_lead_minutes(mut self, minutes: i64) -> Self {
        self.reveal_lead_minutes = minutes;
        self
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        self.format.validate()?;
        if self.reveal_lead_minutes < 0 {
            return Err(EngineError::invalid_config(
                "reveal lead time cannot be negative",
            ));
        }
        if self.reveal_lead_minutes > MAX_REVEAL_LEAD_MINUTES {
            return Err(EngineError::invalid_config(format!(
                "reveal lead of {} minutes exceeds {MAX_REVEAL_LEAD_MINUTES}",
                self.reveal_lead_minutes
            )));
        }
        Ok(())
    }

    /// Clamped to the accepted range, so an unvalidated config cannot overflow
    pub fn reveal_lead(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.reveal_lead_minutes.clamp(0, MAX_REVEAL_LEAD_MINUTES))
    }

    pub fn is_playoff_marker(&self, fixture_type: &str) -> bool {
        let fixture_type = fixture_type.trim();
        self.playoff_markers
            .iter()
            .any(|marker| marker.eq_ignore_ascii_case(fixture_type))
    }
}

fn env_number<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparseable configuration value");
            None
        }
    }
}

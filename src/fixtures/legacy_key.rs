use chrono::NaiveDate;
use thiserror::Error;

use crate::matches::{parse_date, TeamDirectory};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupingError {
    #[error("No date segment in fixture key: {0}")]
    MissingDate(String),

    #[error("No court after the date in fixture key: {0}")]
    MissingCourt(String),

    #[error("No team separator in fixture key: {0}")]
    MissingSeparator(String),
}

/// Older fixtures were grouped by `Team1_vs_Team2_YYYY-MM-DD_Court`.
/// Team names and courts may themselves contain underscores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyFixtureKey {
    pub team1: String,
    pub team2: String,
    pub date: NaiveDate,
    pub court: String,
}

impl LegacyFixtureKey {
    pub const SEPARATOR: &'static str = "_vs_";

    pub fn looks_legacy(key: &str) -> bool {
        key.contains(Self::SEPARATOR)
    }

    /// The rightmost date-shaped segment splits teams from court. With a
    /// directory, the team split whose halves are both registered names wins;
    /// otherwise the first separator is used.
    pub fn parse(key: &str, directory: Option<&TeamDirectory>) -> Result<Self, GroupingError> {
        let segments: Vec<&str> = key.split('_').collect();

        let (date_index, date) = segments
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, segment)| parse_date(segment).map(|date| (index, date)))
            .ok_or_else(|| GroupingError::MissingDate(key.to_string()))?;

        let court = segments[date_index + 1..].join("_");
        if court.trim().is_empty() {
            return Err(GroupingError::MissingCourt(key.to_string()));
        }

        let teams = segments[..date_index].join("_");
        let splits: Vec<(&str, &str)> = teams
            .match_indices(Self::SEPARATOR)
            .map(|(index, _)| (&teams[..index], &teams[index + Self::SEPARATOR.len()..]))
            .filter(|(left, right)| !left.trim().is_empty() && !right.trim().is_empty())
            .collect();

        let known_split = directory.and_then(|directory| {
            splits
                .iter()
                .find(|(left, right)| directory.contains_name(left) && directory.contains_name(right))
        });
        let (team1, team2) = known_split
            .or_else(|| splits.first())
            .ok_or_else(|| GroupingError::MissingSeparator(key.to_string()))?;

        Ok(Self {
            team1: team1.trim().to_string(),
            team2: team2.trim().to_string(),
            date,
            court: court.trim().to_string(),
        })
    }

    pub fn canonical(&self) -> String {
        format!(
            "{}{}{}_{}_{}",
            self.team1,
            Self::SEPARATOR,
            self.team2,
            self.date.format("%Y-%m-%d"),
            self.court
        )
    }
}

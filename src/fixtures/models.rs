use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::matches::{Match, PlayoffInfo, Side, SideRef, Team};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixtureStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
}

/// All matches between one ordered pair of sides under one group key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub key: String,
    pub team1: SideRef,
    pub team2: SideRef,
    pub team1_name: String,
    pub team2_name: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub court: Option<String>,
    /// Matches still in play for this fixture, in display order
    pub matches: Vec<Match>,
    /// Tiebreak matches dropped once the fixture was decided early
    pub excluded_matches: Vec<Match>,
    pub status: FixtureStatus,
    pub effectively_completed: bool,
    pub fixture_type: Option<String>,
    pub is_playoff: bool,
    pub playoff: PlayoffInfo,
}

impl Fixture {
    pub fn side_of(&self, team: &Team) -> Option<Side> {
        if self.team1.is_team(team) {
            Some(Side::Team1)
        } else if self.team2.is_team(team) {
            Some(Side::Team2)
        } else {
            None
        }
    }

    pub fn side_ref(&self, side: Side) -> &SideRef {
        match side {
            Side::Team1 => &self.team1,
            Side::Team2 => &self.team2,
        }
    }

    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }

    pub fn completed_matches(&self) -> usize {
        self.matches.iter().filter(|m| m.is_completed()).count()
    }

    pub fn find_match(&self, match_id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    /// Counts towards the league table
    pub fn is_league(&self) -> bool {
        !self.is_playoff
    }
}

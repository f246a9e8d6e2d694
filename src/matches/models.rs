use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use super::kind::{MatchKind, MatchType};

pub const DEFAULT_GAMES_COUNT: u32 = 3;
/// Larger declared counts are clamped at ingestion
pub const MAX_GAMES_COUNT: u32 = 15;

/// A match document exactly as the store hands it over
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchRecord {
    pub id: String,
    pub tournament_id: String,
    pub team1_id: Option<String>,
    pub team2_id: Option<String>,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub match_type: Option<String>,
    pub match_type_label: Option<String>,
    pub games_count: Option<u32>,
    pub team1_scores: BTreeMap<u32, u32>,
    pub team2_scores: BTreeMap<u32, u32>,
    pub status: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub fixture_group_id: Option<String>,
    pub court: Option<String>,
    pub match_order: Option<i64>,
    pub sequence: Option<i64>,
    pub match_number: Option<i64>,
    pub fixture_type: Option<String>,
    pub playoff_stage: Option<String>,
    pub playoff_number: Option<u32>,
    pub playoff_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub tournament_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Team1,
    Team2,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Team1 => Side::Team2,
            Side::Team2 => Side::Team1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Completed,
    Live,
}

impl MatchStatus {
    /// Unknown spellings come back as `None`
    pub fn parse(raw: &str) -> Option<Self> {
        let key: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "" | "scheduled" | "upcoming" | "pending" => Some(MatchStatus::Scheduled),
            "inprogress" | "ongoing" => Some(MatchStatus::InProgress),
            "completed" | "complete" | "finished" => Some(MatchStatus::Completed),
            "live" => Some(MatchStatus::Live),
            _ => None,
        }
    }

    /// Started but not finished
    pub fn is_underway(self) -> bool {
        matches!(self, MatchStatus::InProgress | MatchStatus::Live)
    }
}

/// One side of a match: an id when the team is registered, a display name always
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideRef {
    pub id: Option<String>,
    pub name: String,
}

impl SideRef {
    pub fn new(id: Option<String>, name: Option<String>) -> Self {
        let id = id.filter(|id| !id.trim().is_empty());
        let name = name.unwrap_or_default().trim().to_string();
        Self { id, name }
    }

    pub fn same_team(&self, other: &SideRef) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => !self.name.is_empty() && self.name == other.name,
        }
    }

    pub fn is_team(&self, team: &Team) -> bool {
        match &self.id {
            Some(id) => *id == team.id,
            None => !self.name.is_empty() && self.name == team.name.trim(),
        }
    }
}

/// Per-game points for both sides; a missing entry is an unplayed game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScores {
    pub team1: BTreeMap<u32, u32>,
    pub team2: BTreeMap<u32, u32>,
}

impl MatchScores {
    pub fn game(&self, side: Side, game: u32) -> u32 {
        let scores = match side {
            Side::Team1 => &self.team1,
            Side::Team2 => &self.team2,
        };
        scores.get(&game).copied().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoffInfo {
    pub stage: Option<String>,
    pub number: Option<u32>,
    pub name: Option<String>,
}

impl PlayoffInfo {
    pub fn is_empty(&self) -> bool {
        self.stage.is_none() && self.number.is_none() && self.name.is_none()
    }
}

/// A match after ingestion: every string-typed field is resolved once here
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub tournament_id: String,
    pub team1: SideRef,
    pub team2: SideRef,
    pub match_type: MatchType,
    pub label: Option<String>,
    pub games_count: u32,
    pub scores: MatchScores,
    pub status: MatchStatus,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub fixture_group_id: Option<String>,
    pub court: Option<String>,
    pub sequence: Option<i64>,
    pub fixture_type: Option<String>,
    pub playoff: PlayoffInfo,
}

impl Match {
    pub fn from_record(record: MatchRecord) -> Self {
        let status = match record.status.as_deref() {
            None => MatchStatus::Scheduled,
            Some(raw) => MatchStatus::parse(raw).unwrap_or_else(|| {
                warn!(match_id = %record.id, status = %raw, "Unknown match status, treating as scheduled");
                MatchStatus::Scheduled
            }),
        };

        let date = record.date.as_deref().and_then(|raw| {
            let parsed = parse_date(raw);
            if parsed.is_none() {
                warn!(match_id = %record.id, date = %raw, "Unparseable match date");
            }
            parsed
        });
        let time = record.time.as_deref().and_then(|raw| {
            let parsed = parse_time(raw);
            if parsed.is_none() {
                warn!(match_id = %record.id, time = %raw, "Unparseable match time");
            }
            parsed
        });

        let games_count = match record.games_count {
            Some(count) if count > MAX_GAMES_COUNT => {
                warn!(
                    match_id = %record.id,
                    games_count = count,
                    max = MAX_GAMES_COUNT,
                    "Games count out of range, clamping"
                );
                MAX_GAMES_COUNT
            }
            Some(count) if count > 0 => count,
            _ => DEFAULT_GAMES_COUNT,
        };

        Self {
            match_type: MatchType::resolve(
                record.match_type.as_deref(),
                record.match_type_label.as_deref(),
            ),
            label: record.match_type_label,
            team1: SideRef::new(record.team1_id, record.team1_name),
            team2: SideRef::new(record.team2_id, record.team2_name),
            games_count,
            scores: MatchScores {
                team1: record.team1_scores,
                team2: record.team2_scores,
            },
            status,
            date,
            time,
            fixture_group_id: record
                .fixture_group_id
                .filter(|key| !key.trim().is_empty()),
            court: record.court.filter(|court| !court.trim().is_empty()),
            sequence: record
                .match_order
                .or(record.sequence)
                .or(record.match_number),
            fixture_type: record.fixture_type.filter(|ty| !ty.trim().is_empty()),
            playoff: PlayoffInfo {
                stage: record.playoff_stage,
                number: record.playoff_number,
                name: record.playoff_name,
            },
            id: record.id,
            tournament_id: record.tournament_id,
        }
    }

    pub fn kind(&self) -> MatchKind {
        self.match_type.kind()
    }

    pub fn is_tiebreak(&self) -> bool {
        self.kind() == MatchKind::Tiebreak
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    pub fn side(&self, side: Side) -> &SideRef {
        match side {
            Side::Team1 => &self.team1,
            Side::Team2 => &self.team2,
        }
    }

    /// True when both matches are between the same two sides, in the same order
    pub fn same_pairing(&self, other: &Match) -> bool {
        self.team1.same_team(&other.team1) && self.team2.same_team(&other.team2)
    }
}

/// Normalises a whole snapshot
pub fn ingest(records: impl IntoIterator<Item = MatchRecord>) -> Vec<Match> {
    records.into_iter().map(Match::from_record).collect()
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

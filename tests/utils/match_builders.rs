#![allow(dead_code)]

use std::collections::BTreeMap;

use standings_engine::matches::Side;
use standings_engine::{ingest, Match, MatchRecord, Team};

// ============================================================================
// Teams
// ============================================================================

pub fn team_id(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

pub fn team(name: &str) -> Team {
    Team {
        id: team_id(name),
        name: name.to_string(),
        logo_url: None,
        tournament_id: "t1".to_string(),
    }
}

// ============================================================================
// Single matches
// ============================================================================

/// Game scores for a 2-1 win by `winner`: 60 points to 55
fn two_one(winner: Side) -> (Vec<u32>, Vec<u32>) {
    let winning = vec![21, 18, 21];
    let losing = vec![15, 21, 19];
    match winner {
        Side::Team1 => (winning, losing),
        Side::Team2 => (losing, winning),
    }
}

pub struct MatchBuilder {
    record: MatchRecord,
}

impl MatchBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            record: MatchRecord {
                id: id.to_string(),
                tournament_id: "t1".to_string(),
                status: Some("scheduled".to_string()),
                date: Some("2024-03-09".to_string()),
                time: Some("18:00".to_string()),
                ..MatchRecord::default()
            },
        }
    }

    pub fn between(mut self, team1: &str, team2: &str) -> Self {
        self.record.team1_id = Some(team_id(team1));
        self.record.team2_id = Some(team_id(team2));
        self.record.team1_name = Some(team1.to_string());
        self.record.team2_name = Some(team2.to_string());
        self
    }

    pub fn tournament(mut self, tournament_id: &str) -> Self {
        self.record.tournament_id = tournament_id.to_string();
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.record.match_type_label = Some(label.to_string());
        self
    }

    pub fn group(mut self, key: &str) -> Self {
        self.record.fixture_group_id = Some(key.to_string());
        self
    }

    pub fn sequence(mut self, sequence: i64) -> Self {
        self.record.sequence = Some(sequence);
        self
    }

    pub fn date(mut self, date: Option<&str>) -> Self {
        self.record.date = date.map(str::to_string);
        self
    }

    pub fn time(mut self, time: Option<&str>) -> Self {
        self.record.time = time.map(str::to_string);
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.record.status = Some(status.to_string());
        self
    }

    pub fn fixture_type(mut self, fixture_type: &str) -> Self {
        self.record.fixture_type = Some(fixture_type.to_string());
        self
    }

    pub fn scores(mut self, team1: &[u32], team2: &[u32]) -> Self {
        self.record.team1_scores = (1..).zip(team1.iter().copied()).collect::<BTreeMap<_, _>>();
        self.record.team2_scores = (1..).zip(team2.iter().copied()).collect::<BTreeMap<_, _>>();
        self
    }

    /// Completed 2-1 in games for `winner`
    pub fn won_by(self, winner: Side) -> Self {
        let (team1, team2) = two_one(winner);
        self.scores(&team1, &team2).status("completed")
    }

    pub fn record(self) -> MatchRecord {
        self.record
    }

    pub fn build(self) -> Match {
        Match::from_record(self.record)
    }
}

// ============================================================================
// Whole league fixtures
// ============================================================================

pub const LEAGUE_LABELS: [&str; 6] = [
    "Men's Doubles",
    "Women's Doubles",
    "Men's Singles",
    "Women's Singles",
    "Men's Doubles(2)",
    "Mixed Doubles",
];

/// A league fixture: six regular matches and, unless removed, a Game Breaker.
/// Each result is the winning side of a completed 2-1 match, or `None` for a
/// match not played yet.
pub struct FixtureBuilder {
    key: String,
    team1: String,
    team2: String,
    regular: Vec<Option<Side>>,
    tiebreak: Option<Option<Side>>,
    tiebreak_label: String,
    fixture_type: Option<String>,
    date: Option<String>,
    time: Option<String>,
}

impl FixtureBuilder {
    pub fn new(key: &str, team1: &str, team2: &str) -> Self {
        Self {
            key: key.to_string(),
            team1: team1.to_string(),
            team2: team2.to_string(),
            regular: vec![None; 6],
            tiebreak: Some(None),
            tiebreak_label: "Game Breaker".to_string(),
            fixture_type: None,
            date: Some("2024-03-09".to_string()),
            time: Some("18:00".to_string()),
        }
    }

    pub fn regular(mut self, results: &[Option<Side>]) -> Self {
        self.regular = results.to_vec();
        self
    }

    pub fn tiebreak(mut self, result: Option<Side>) -> Self {
        self.tiebreak = Some(result);
        self
    }

    pub fn tiebreak_label(mut self, label: &str) -> Self {
        self.tiebreak_label = label.to_string();
        self
    }

    pub fn without_tiebreak(mut self) -> Self {
        self.tiebreak = None;
        self
    }

    pub fn fixture_type(mut self, fixture_type: &str) -> Self {
        self.fixture_type = Some(fixture_type.to_string());
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    pub fn time(mut self, time: &str) -> Self {
        self.time = Some(time.to_string());
        self
    }

    fn one(&self, index: usize, label: &str, result: Option<Side>) -> MatchRecord {
        let mut builder = MatchBuilder::new(&format!("{}-{}", self.key, index + 1))
            .between(&self.team1, &self.team2)
            .label(label)
            .group(&self.key)
            .date(self.date.as_deref())
            .time(self.time.as_deref());
        if let Some(fixture_type) = &self.fixture_type {
            builder = builder.fixture_type(fixture_type);
        }
        if let Some(winner) = result {
            builder = builder.won_by(winner);
        }
        builder.record()
    }

    pub fn records(self) -> Vec<MatchRecord> {
        let mut records: Vec<MatchRecord> = self
            .regular
            .iter()
            .enumerate()
            .map(|(index, result)| self.one(index, LEAGUE_LABELS[index % 6], *result))
            .collect();
        if let Some(result) = self.tiebreak {
            records.push(self.one(records.len(), &self.tiebreak_label, result));
        }
        records
    }

    pub fn build(self) -> Vec<Match> {
        ingest(self.records())
    }
}

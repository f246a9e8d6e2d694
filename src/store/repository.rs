use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::errors::StoreError;
use crate::event::{EventBus, TournamentEvent};
use crate::matches::{MatchRecord, Team};

/// Everything the engine needs for one tournament, read at one revision
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TournamentSnapshot {
    pub tournament_id: String,
    pub revision: u64,
    pub matches: Vec<MatchRecord>,
    pub teams: Vec<Team>,
}

/// Read side of the match/team document store
#[async_trait]
pub trait MatchStore: Send + Sync {
    async fn list_matches(&self, tournament_id: &str) -> Result<Vec<MatchRecord>, StoreError>;
    async fn list_teams(&self, tournament_id: &str) -> Result<Vec<Team>, StoreError>;

    /// Matches and teams together, consistent with each other
    async fn snapshot(&self, tournament_id: &str) -> Result<TournamentSnapshot, StoreError>;
}

#[derive(Debug, Default)]
struct TournamentDocuments {
    revision: u64,
    matches: BTreeMap<String, MatchRecord>,
    teams: Vec<Team>,
}

impl TournamentDocuments {
    fn match_list(&self) -> Vec<MatchRecord> {
        self.matches.values().cloned().collect()
    }
}

/// In-memory store. Every write bumps the tournament's revision and, with an
/// event bus attached, redelivers the tournament's full match list.
pub struct InMemoryMatchStore {
    tournaments: RwLock<HashMap<String, TournamentDocuments>>,
    event_bus: Option<EventBus>,
}

impl Default for InMemoryMatchStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self {
            tournaments: RwLock::new(HashMap::new()),
            event_bus: None,
        }
    }

    pub fn with_event_bus(event_bus: EventBus) -> Self {
        Self {
            tournaments: RwLock::new(HashMap::new()),
            event_bus: Some(event_bus),
        }
    }

    pub async fn tournament_ids(&self) -> Vec<String> {
        let tournaments = self.tournaments.read().await;
        let mut ids: Vec<String> = tournaments.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Replaces a tournament's matches and teams wholesale
    #[instrument(skip(self, matches, teams))]
    pub async fn load_snapshot(
        &self,
        tournament_id: &str,
        matches: Vec<MatchRecord>,
        teams: Vec<Team>,
    ) -> u64 {
        let mut tournaments = self.tournaments.write().await;
        let docs = tournaments.entry(tournament_id.to_string()).or_default();

        docs.matches = matches
            .into_iter()
            .map(|mut record| {
                record.tournament_id = tournament_id.to_string();
                if record.id.is_empty() {
                    record.id = Uuid::new_v4().to_string();
                }
                (record.id.clone(), record)
            })
            .collect();
        docs.teams = teams;
        docs.revision += 1;

        info!(
            tournament_id = %tournament_id,
            revision = docs.revision,
            matches = docs.matches.len(),
            teams = docs.teams.len(),
            "Loaded tournament snapshot"
        );

        self.emit_teams(tournament_id, docs).await;
        self.emit_matches(tournament_id, docs).await;
        docs.revision
    }

    /// Inserts or replaces a match. A record without an id is assigned one.
    #[instrument(skip(self, record))]
    pub async fn upsert_match(&self, mut record: MatchRecord) -> Result<(String, u64), StoreError> {
        if record.tournament_id.trim().is_empty() {
            return Err(StoreError::InvalidRecord(format!(
                "match {} has no tournament",
                record.id
            )));
        }
        if record.id.is_empty() {
            record.id = Uuid::new_v4().to_string();
        }

        let tournament_id = record.tournament_id.clone();
        let match_id = record.id.clone();

        let mut tournaments = self.tournaments.write().await;
        let docs = tournaments.entry(tournament_id.clone()).or_default();
        docs.matches.insert(match_id.clone(), record);
        docs.revision += 1;

        debug!(
            tournament_id = %tournament_id,
            match_id = %match_id,
            revision = docs.revision,
            "Match upserted"
        );

        self.emit_matches(&tournament_id, docs).await;
        Ok((match_id, docs.revision))
    }

    #[instrument(skip(self))]
    pub async fn remove_match(&self, tournament_id: &str, match_id: &str) -> Result<u64, StoreError> {
        let mut tournaments = self.tournaments.write().await;
        let docs = tournaments
            .get_mut(tournament_id)
            .ok_or_else(|| StoreError::UnknownTournament(tournament_id.to_string()))?;

        if docs.matches.remove(match_id).is_none() {
            return Err(StoreError::MatchNotFound(match_id.to_string()));
        }
        docs.revision += 1;

        debug!(
            tournament_id = %tournament_id,
            match_id = %match_id,
            revision = docs.revision,
            "Match removed"
        );

        self.emit_matches(tournament_id, docs).await;
        Ok(docs.revision)
    }

    #[instrument(skip(self, teams))]
    pub async fn set_teams(&self, tournament_id: &str, teams: Vec<Team>) -> u64 {
        let mut tournaments = self.tournaments.write().await;
        let docs = tournaments.entry(tournament_id.to_string()).or_default();
        docs.teams = teams;
        docs.revision += 1;

        debug!(
            tournament_id = %tournament_id,
            teams = docs.teams.len(),
            revision = docs.revision,
            "Teams replaced"
        );

        self.emit_teams(tournament_id, docs).await;
        docs.revision
    }

    // Events are sent while the write guard is held so subscribers see
    // revisions in order.
    async fn emit_matches(&self, tournament_id: &str, docs: &TournamentDocuments) {
        if let Some(bus) = &self.event_bus {
            bus.emit_to_tournament(
                tournament_id,
                TournamentEvent::SnapshotChanged {
                    tournament_id: tournament_id.to_string(),
                    revision: docs.revision,
                    matches: docs.match_list(),
                },
            )
            .await;
        }
    }

    async fn emit_teams(&self, tournament_id: &str, docs: &TournamentDocuments) {
        if let Some(bus) = &self.event_bus {
            bus.emit_to_tournament(
                tournament_id,
                TournamentEvent::TeamsChanged {
                    tournament_id: tournament_id.to_string(),
                    revision: docs.revision,
                    teams: docs.teams.clone(),
                },
            )
            .await;
        }
    }
}

#[async_trait]
impl MatchStore for InMemoryMatchStore {
    async fn list_matches(&self, tournament_id: &str) -> Result<Vec<MatchRecord>, StoreError> {
        let tournaments = self.tournaments.read().await;
        tournaments
            .get(tournament_id)
            .map(TournamentDocuments::match_list)
            .ok_or_else(|| StoreError::UnknownTournament(tournament_id.to_string()))
    }

    async fn list_teams(&self, tournament_id: &str) -> Result<Vec<Team>, StoreError> {
        let tournaments = self.tournaments.read().await;
        tournaments
            .get(tournament_id)
            .map(|docs| docs.teams.clone())
            .ok_or_else(|| StoreError::UnknownTournament(tournament_id.to_string()))
    }

    async fn snapshot(&self, tournament_id: &str) -> Result<TournamentSnapshot, StoreError> {
        let tournaments = self.tournaments.read().await;
        let docs = tournaments
            .get(tournament_id)
            .ok_or_else(|| StoreError::UnknownTournament(tournament_id.to_string()))?;
        Ok(TournamentSnapshot {
            tournament_id: tournament_id.to_string(),
            revision: docs.revision,
            matches: docs.match_list(),
            teams: docs.teams.clone(),
        })
    }
}

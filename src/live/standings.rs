use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{watch, Mutex as AsyncMutex, RwLock};
use tracing::{debug, info, instrument, warn};

use crate::config::LeagueFormat;
use crate::engine::StandingsEngine;
use crate::event::{TournamentEvent, TournamentEventError, TournamentEventHandler};
use crate::matches::{MatchRecord, Team};
use crate::shared::EngineError;
use crate::store::{MatchStore, TournamentSnapshot};

use super::view::TournamentView;

struct LiveTournament {
    matches: Vec<MatchRecord>,
    teams: Vec<Team>,
    matches_revision: u64,
    teams_revision: u64,
    /// Per-tournament format override
    engine: Option<StandingsEngine>,
    sender: watch::Sender<Arc<TournamentView>>,
}

impl LiveTournament {
    fn new(tournament_id: &str) -> Self {
        let (sender, _) = watch::channel(Arc::new(TournamentView::empty(tournament_id)));
        Self {
            matches: Vec::new(),
            teams: Vec::new(),
            matches_revision: 0,
            teams_revision: 0,
            engine: None,
            sender,
        }
    }

    fn revision(&self) -> u64 {
        self.matches_revision.max(self.teams_revision)
    }
}

/// Recomputes a tournament's view from scratch whenever its inputs change and
/// publishes it on a watch channel.
///
/// Work for one tournament is serialised behind its own lock; different
/// tournaments never wait on each other. Inputs older than what was already
/// applied are dropped, so a published view never goes backwards.
pub struct LiveStandings {
    engine: StandingsEngine,
    tournaments: RwLock<HashMap<String, Arc<AsyncMutex<LiveTournament>>>>,
    /// Source pulled from when events were lost
    store: Option<Arc<dyn MatchStore>>,
}

impl LiveStandings {
    pub fn new(engine: StandingsEngine) -> Self {
        Self {
            engine,
            tournaments: RwLock::new(HashMap::new()),
            store: None,
        }
    }

    pub fn with_store(engine: StandingsEngine, store: Arc<dyn MatchStore>) -> Self {
        Self {
            store: Some(store),
            ..Self::new(engine)
        }
    }

    /// Drops everything held for a tournament; open watchers see the channel close
    pub async fn forget(&self, tournament_id: &str) -> bool {
        let removed = self.tournaments.write().await.remove(tournament_id);
        if removed.is_some() {
            debug!(tournament_id = %tournament_id, "Dropped live tournament state");
        }
        removed.is_some()
    }

    pub async fn tournament_count(&self) -> usize {
        self.tournaments.read().await.len()
    }

    pub async fn watch(&self, tournament_id: &str) -> watch::Receiver<Arc<TournamentView>> {
        let tournament = self.tournament(tournament_id).await;
        let guard = tournament.lock().await;
        guard.sender.subscribe()
    }

    pub async fn current(&self, tournament_id: &str) -> Option<Arc<TournamentView>> {
        let tournament = {
            let tournaments = self.tournaments.read().await;
            tournaments.get(tournament_id)?.clone()
        };
        let guard = tournament.lock().await;
        let view = guard.sender.borrow().clone();
        Some(view)
    }

    /// Returns whether a new view was published
    pub async fn apply_matches(
        &self,
        tournament_id: &str,
        revision: u64,
        matches: Vec<MatchRecord>,
    ) -> bool {
        let tournament = self.tournament(tournament_id).await;
        let mut guard = tournament.lock().await;
        if revision <= guard.matches_revision {
            debug!(
                tournament_id = %tournament_id,
                revision,
                applied = guard.matches_revision,
                "Discarding stale match snapshot"
            );
            return false;
        }
        guard.matches = matches;
        guard.matches_revision = revision;
        self.publish(tournament_id, &guard);
        true
    }

    /// Returns whether a new view was published
    pub async fn apply_teams(&self, tournament_id: &str, revision: u64, teams: Vec<Team>) -> bool {
        let tournament = self.tournament(tournament_id).await;
        let mut guard = tournament.lock().await;
        if revision <= guard.teams_revision {
            debug!(
                tournament_id = %tournament_id,
                revision,
                applied = guard.teams_revision,
                "Discarding stale team list"
            );
            return false;
        }
        guard.teams = teams;
        guard.teams_revision = revision;
        self.publish(tournament_id, &guard);
        true
    }

    /// Applies whichever parts of a pulled snapshot are newer than what is held
    /// and returns the view current afterwards.
    pub async fn apply_snapshot(&self, snapshot: TournamentSnapshot) -> Arc<TournamentView> {
        let TournamentSnapshot {
            tournament_id,
            revision,
            matches,
            teams,
        } = snapshot;

        let tournament = self.tournament(&tournament_id).await;
        let mut guard = tournament.lock().await;

        let mut changed = false;
        if revision > guard.teams_revision {
            guard.teams = teams;
            guard.teams_revision = revision;
            changed = true;
        }
        if revision > guard.matches_revision {
            guard.matches = matches;
            guard.matches_revision = revision;
            changed = true;
        }

        if changed {
            self.publish(&tournament_id, &guard);
        } else {
            debug!(tournament_id = %tournament_id, revision, "Snapshot already applied");
        }
        let view = guard.sender.borrow().clone();
        view
    }

    /// Switches one tournament to another league format and republishes
    #[instrument(skip(self))]
    pub async fn set_format(
        &self,
        tournament_id: &str,
        format: LeagueFormat,
    ) -> Result<Arc<TournamentView>, EngineError> {
        let engine = self.engine.with_format(format)?;

        let tournament = self.tournament(tournament_id).await;
        let mut guard = tournament.lock().await;
        guard.engine = Some(engine);
        self.publish(tournament_id, &guard);

        info!(tournament_id = %tournament_id, "League format override applied");
        let view = guard.sender.borrow().clone();
        Ok(view)
    }

    async fn tournament(&self, tournament_id: &str) -> Arc<AsyncMutex<LiveTournament>> {
        {
            let tournaments = self.tournaments.read().await;
            if let Some(tournament) = tournaments.get(tournament_id) {
                return tournament.clone();
            }
        }

        let mut tournaments = self.tournaments.write().await;
        tournaments
            .entry(tournament_id.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(LiveTournament::new(tournament_id))))
            .clone()
    }

    fn publish(&self, tournament_id: &str, tournament: &LiveTournament) {
        let engine = tournament.engine.as_ref().unwrap_or(&self.engine);
        let view = TournamentView::compute(
            tournament_id,
            tournament.revision(),
            &tournament.matches,
            &tournament.teams,
            engine,
        );

        info!(
            tournament_id = %tournament_id,
            revision = view.revision,
            fixtures = view.fixtures.len(),
            teams = view.standings.len(),
            "Published standings"
        );
        tournament.sender.send_replace(Arc::new(view));
    }
}

#[async_trait]
impl TournamentEventHandler for LiveStandings {
    async fn handle_tournament_event(
        &self,
        tournament_id: &str,
        event: TournamentEvent,
    ) -> Result<(), TournamentEventError> {
        if event.tournament_id() != tournament_id {
            return Err(TournamentEventError::HandlerError(format!(
                "event for {} delivered to {}",
                event.tournament_id(),
                tournament_id
            )));
        }

        match event {
            TournamentEvent::SnapshotChanged {
                revision, matches, ..
            } => {
                self.apply_matches(tournament_id, revision, matches).await;
            }
            TournamentEvent::TeamsChanged { revision, teams, .. } => {
                self.apply_teams(tournament_id, revision, teams).await;
            }
        }
        Ok(())
    }

    async fn resync(&self, tournament_id: &str) -> Result<(), TournamentEventError> {
        let Some(store) = &self.store else {
            warn!(tournament_id = %tournament_id, "Events lost and no store to resync from");
            return Ok(());
        };
        let snapshot = store
            .snapshot(tournament_id)
            .await
            .map_err(|e| TournamentEventError::HandlerError(e.to_string()))?;
        let view = self.apply_snapshot(snapshot).await;
        info!(
            tournament_id = %tournament_id,
            revision = view.revision,
            "Resynced from store"
        );
        Ok(())
    }

    fn handler_name(&self) -> &'static str {
        "LiveStandings"
    }
}

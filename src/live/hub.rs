use futures::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{watch, Mutex as AsyncMutex};
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

use crate::config::LeagueFormat;
use crate::engine::StandingsEngine;
use crate::event::{EventBus, TournamentSubscription};
use crate::shared::EngineError;
use crate::store::MatchStore;

use super::standings::LiveStandings;
use super::view::TournamentView;

/// Keeps live views for the tournaments it tracks: one store subscription per
/// tournament feeding a shared [`LiveStandings`].
pub struct StandingsHub {
    store: Arc<dyn MatchStore>,
    event_bus: EventBus,
    live: Arc<LiveStandings>,
    subscriptions: AsyncMutex<HashMap<String, JoinHandle<()>>>,
}

impl StandingsHub {
    pub fn new(store: Arc<dyn MatchStore>, event_bus: EventBus, engine: StandingsEngine) -> Self {
        Self {
            live: Arc::new(LiveStandings::with_store(engine, store.clone())),
            store,
            event_bus,
            subscriptions: AsyncMutex::new(HashMap::new()),
        }
    }

    pub fn live(&self) -> Arc<LiveStandings> {
        self.live.clone()
    }

    /// Starts following a tournament and pulls its current snapshot
    #[instrument(skip(self))]
    pub async fn track(
        &self,
        tournament_id: &str,
    ) -> Result<watch::Receiver<Arc<TournamentView>>, EngineError> {
        {
            let mut subscriptions = self.subscriptions.lock().await;
            if !subscriptions.contains_key(tournament_id) {
                let handle = TournamentSubscription::new(
                    tournament_id.to_string(),
                    self.live.clone(),
                    self.event_bus.clone(),
                )
                .start()
                .await;
                subscriptions.insert(tournament_id.to_string(), handle);
                info!(tournament_id = %tournament_id, "Tracking tournament");
            }
        }

        self.refresh(tournament_id).await?;
        Ok(self.live.watch(tournament_id).await)
    }

    /// Stops the subscription and drops the tournament's live state. Returns
    /// false when the tournament was not tracked.
    pub async fn untrack(&self, tournament_id: &str) -> bool {
        let mut subscriptions = self.subscriptions.lock().await;
        match subscriptions.remove(tournament_id) {
            Some(handle) => {
                handle.abort();
                self.live.forget(tournament_id).await;
                info!(tournament_id = %tournament_id, "Stopped tracking tournament");
                true
            }
            None => false,
        }
    }

    pub async fn tracked(&self) -> Vec<String> {
        let subscriptions = self.subscriptions.lock().await;
        let mut ids: Vec<String> = subscriptions.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Pulls the tournament's snapshot straight from the store
    pub async fn refresh(&self, tournament_id: &str) -> Result<Arc<TournamentView>, EngineError> {
        let snapshot = self.store.snapshot(tournament_id).await?;
        Ok(self.live.apply_snapshot(snapshot).await)
    }

    /// Refreshes several tournaments concurrently
    pub async fn refresh_all(
        &self,
        tournament_ids: &[String],
    ) -> Vec<(String, Result<Arc<TournamentView>, EngineError>)> {
        join_all(tournament_ids.iter().map(|tournament_id| async move {
            let result = self.refresh(tournament_id).await;
            if let Err(e) = &result {
                warn!(tournament_id = %tournament_id, error = %e, "Refresh failed");
            }
            (tournament_id.clone(), result)
        }))
        .await
    }

    pub async fn set_format(
        &self,
        tournament_id: &str,
        format: LeagueFormat,
    ) -> Result<Arc<TournamentView>, EngineError> {
        self.live.set_format(tournament_id, format).await
    }

    pub async fn current(&self, tournament_id: &str) -> Result<Arc<TournamentView>, EngineError> {
        self.live
            .current(tournament_id)
            .await
            .ok_or_else(|| EngineError::NotFound(format!("tournament {tournament_id}")))
    }
}

impl Drop for StandingsHub {
    fn drop(&mut self) {
        for (_, handle) in self.subscriptions.get_mut().drain() {
            handle.abort();
        }
    }
}

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use standings_engine::{
    EventBus, InMemoryMatchStore, MatchRecord, StandingsEngine, StandingsHub, Team,
    TournamentView,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub event_bus: EventBus,
    pub store: Arc<InMemoryMatchStore>,
    pub hub: StandingsHub,
    pub views: Vec<(String, watch::Receiver<Arc<TournamentView>>)>,
}

impl TestSetup {
    pub fn view(&self, tournament_id: &str) -> watch::Receiver<Arc<TournamentView>> {
        self.views
            .iter()
            .find(|(id, _)| id == tournament_id)
            .map(|(_, receiver)| receiver.clone())
            .expect("tournament should be tracked")
    }
}

pub struct TestSetupBuilder {
    tournaments: Vec<(String, Vec<Team>, Vec<MatchRecord>)>,
    engine: StandingsEngine,
    bus_capacity: Option<usize>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            tournaments: vec![],
            engine: StandingsEngine::default(),
            bus_capacity: None,
        }
    }

    pub fn with_tournament(
        mut self,
        tournament_id: &str,
        teams: Vec<Team>,
        matches: Vec<MatchRecord>,
    ) -> Self {
        self.tournaments
            .push((tournament_id.to_string(), teams, matches));
        self
    }

    pub fn with_engine(mut self, engine: StandingsEngine) -> Self {
        self.engine = engine;
        self
    }

    /// A small capacity makes subscribers lag after a short burst of writes
    pub fn with_bus_capacity(mut self, capacity: usize) -> Self {
        self.bus_capacity = Some(capacity);
        self
    }

    pub async fn build(self) -> TestSetup {
        let event_bus = match self.bus_capacity {
            Some(capacity) => EventBus::with_capacity(capacity),
            None => EventBus::new(),
        };
        let store = Arc::new(InMemoryMatchStore::with_event_bus(event_bus.clone()));
        let hub = StandingsHub::new(store.clone(), event_bus.clone(), self.engine);

        let mut views = Vec::new();
        for (tournament_id, teams, matches) in self.tournaments {
            store.load_snapshot(&tournament_id, matches, teams).await;
            let receiver = hub
                .track(&tournament_id)
                .await
                .expect("tracking a loaded tournament should succeed");
            views.push((tournament_id, receiver));
        }

        TestSetup {
            event_bus,
            store,
            hub,
            views,
        }
    }
}

/// Waits until the published view reaches `revision`
pub async fn wait_for_revision(
    receiver: &mut watch::Receiver<Arc<TournamentView>>,
    revision: u64,
) -> Arc<TournamentView> {
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            {
                let view = receiver.borrow_and_update();
                if view.revision >= revision {
                    return view.clone();
                }
            }
            receiver
                .changed()
                .await
                .expect("view channel should stay open");
        }
    })
    .await
    .expect("view should reach the expected revision")
}

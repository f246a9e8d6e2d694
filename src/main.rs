use std::sync::Arc;

use serde::Deserialize;
use standings_engine::{
    EngineConfig, EngineError, EventBus, InMemoryMatchStore, MatchRecord, StandingsEngine,
    StandingsHub, Team,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// One tournament's documents as exported from the store
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TournamentFile {
    tournament_id: String,
    #[serde(default)]
    teams: Vec<Team>,
    #[serde(default)]
    matches: Vec<MatchRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Many(Vec<TournamentFile>),
    One(TournamentFile),
}

impl SnapshotFile {
    fn into_tournaments(self) -> Vec<TournamentFile> {
        match self {
            SnapshotFile::Many(tournaments) => tournaments,
            SnapshotFile::One(tournament) => vec![tournament],
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), EngineError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "standings_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path = std::env::args()
        .nth(1)
        .ok_or_else(|| EngineError::Snapshot("usage: standings-engine <snapshot.json>".into()))?;

    let config = EngineConfig::from_env()?;
    let engine = StandingsEngine::new(config)?;

    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| EngineError::Snapshot(format!("{path}: {e}")))?;
    let tournaments = serde_json::from_str::<SnapshotFile>(&raw)
        .map_err(|e| EngineError::Snapshot(format!("{path}: {e}")))?
        .into_tournaments();

    info!(path = %path, tournaments = tournaments.len(), "Loaded snapshot file");

    let event_bus = EventBus::new();
    let store = Arc::new(InMemoryMatchStore::with_event_bus(event_bus.clone()));
    let hub = StandingsHub::new(store.clone(), event_bus, engine);

    let mut ids = Vec::with_capacity(tournaments.len());
    for tournament in tournaments {
        store
            .load_snapshot(&tournament.tournament_id, tournament.matches, tournament.teams)
            .await;
        hub.track(&tournament.tournament_id).await?;
        ids.push(tournament.tournament_id);
    }

    let mut views = Vec::with_capacity(ids.len());
    for (tournament_id, result) in hub.refresh_all(&ids).await {
        let view = result?;
        info!(
            tournament_id = %tournament_id,
            revision = view.revision,
            fixtures = view.fixtures.len(),
            "Standings ready"
        );
        views.push(view.as_ref().clone());
    }

    let output = serde_json::to_string_pretty(&views)
        .map_err(|e| EngineError::Snapshot(format!("could not encode standings: {e}")))?;
    println!("{output}");
    Ok(())
}

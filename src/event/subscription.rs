use std::sync::Arc;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{bus::EventBus, events::TournamentEvent, handler::TournamentEventHandler};

/// Routes one tournament's events to a handler from a background task.
///
/// Whatever has queued up while the handler was busy is collapsed to the
/// newest event of each kind before the handler sees it; older snapshots are
/// never observable anyway.
pub struct TournamentSubscription {
    tournament_id: String,
    handler: Arc<dyn TournamentEventHandler>,
    event_bus: EventBus,
}

impl TournamentSubscription {
    pub fn new(
        tournament_id: String,
        handler: Arc<dyn TournamentEventHandler>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            tournament_id,
            handler,
            event_bus,
        }
    }

    /// Subscribes before returning, so no event emitted afterwards is missed
    pub async fn start(self) -> JoinHandle<()> {
        let tournament_id = self.tournament_id.clone();
        let handler_name = self.handler.handler_name();

        info!(
            tournament_id = %tournament_id,
            handler = handler_name,
            "Starting tournament subscription"
        );

        let mut receiver = self.event_bus.subscribe_to_tournament(&tournament_id).await;

        tokio::spawn(async move {
            loop {
                let first = match receiver.recv().await {
                    Ok(event) => event,
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(
                            tournament_id = %tournament_id,
                            handler = handler_name,
                            skipped,
                            "Subscription lagged, resyncing"
                        );
                        self.resync(&tournament_id).await;
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                };

                let mut pending = vec![first];
                let mut lagged = false;
                loop {
                    match receiver.try_recv() {
                        Ok(event) => pending.push(event),
                        Err(TryRecvError::Lagged(skipped)) => {
                            warn!(
                                tournament_id = %tournament_id,
                                handler = handler_name,
                                skipped,
                                "Subscription lagged while draining"
                            );
                            lagged = true;
                        }
                        Err(_) => break,
                    }
                }
                if lagged {
                    self.resync(&tournament_id).await;
                }

                let received = pending.len();
                let events = latest_per_kind(pending);
                if events.len() < received {
                    debug!(
                        tournament_id = %tournament_id,
                        handler = handler_name,
                        superseded = received - events.len(),
                        "Superseded events dropped"
                    );
                }

                for event in events {
                    let revision = event.revision();
                    if let Err(e) = self
                        .handler
                        .handle_tournament_event(&tournament_id, event)
                        .await
                    {
                        warn!(
                            tournament_id = %tournament_id,
                            handler = handler_name,
                            revision,
                            error = %e,
                            "Tournament event handler failed"
                        );
                    }
                }
            }

            info!(
                tournament_id = %tournament_id,
                handler = handler_name,
                "Tournament subscription ended"
            );
        })
    }

    async fn resync(&self, tournament_id: &str) {
        if let Err(e) = self.handler.resync(tournament_id).await {
            warn!(
                tournament_id = %tournament_id,
                handler = self.handler.handler_name(),
                error = %e,
                "Resync after lag failed"
            );
        }
    }
}

/// Newest event of each kind, oldest revision first
pub fn latest_per_kind(events: Vec<TournamentEvent>) -> Vec<TournamentEvent> {
    let mut teams: Option<TournamentEvent> = None;
    let mut snapshot: Option<TournamentEvent> = None;

    for event in events {
        let slot = match event {
            TournamentEvent::TeamsChanged { .. } => &mut teams,
            TournamentEvent::SnapshotChanged { .. } => &mut snapshot,
        };
        let newer = slot
            .as_ref()
            .map_or(true, |current| event.revision() >= current.revision());
        if newer {
            *slot = Some(event);
        }
    }

    let mut kept: Vec<TournamentEvent> = [teams, snapshot].into_iter().flatten().collect();
    kept.sort_by_key(TournamentEvent::revision);
    kept
}

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::debug;

use super::events::TournamentEvent;

const TOURNAMENT_CHANNEL_CAPACITY: usize = 64;

/// Per-tournament broadcast channels for store change notifications
#[derive(Debug, Clone)]
pub struct EventBus {
    /// tournament_id -> sender
    tournament_channels: Arc<RwLock<HashMap<String, broadcast::Sender<TournamentEvent>>>>,
    capacity: usize,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(TOURNAMENT_CHANNEL_CAPACITY)
    }

    /// Slow subscribers lag once `capacity` events are queued for them
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tournament_channels: Arc::new(RwLock::new(HashMap::new())),
            capacity: capacity.max(1),
        }
    }

    /// Emits an event to all subscribers of a tournament
    pub async fn emit_to_tournament(&self, tournament_id: &str, event: TournamentEvent) {
        let sender = self.sender(tournament_id).await;
        let event_type = event.event_type();
        let revision = event.revision();

        match sender.send(event) {
            Ok(receiver_count) => {
                debug!(
                    tournament_id = %tournament_id,
                    event_type,
                    revision,
                    receivers = receiver_count,
                    "Tournament event emitted"
                );
            }
            Err(_) => {
                debug!(
                    tournament_id = %tournament_id,
                    event_type,
                    revision,
                    "Tournament event emitted with no receivers"
                );
            }
        }
    }

    /// Subscribe to events for a specific tournament
    pub async fn subscribe_to_tournament(
        &self,
        tournament_id: &str,
    ) -> broadcast::Receiver<TournamentEvent> {
        self.sender(tournament_id).await.subscribe()
    }

    pub async fn subscriber_count(&self, tournament_id: &str) -> usize {
        let channels = self.tournament_channels.read().await;
        channels
            .get(tournament_id)
            .map(broadcast::Sender::receiver_count)
            .unwrap_or(0)
    }

    async fn sender(&self, tournament_id: &str) -> broadcast::Sender<TournamentEvent> {
        {
            let channels = self.tournament_channels.read().await;
            if let Some(sender) = channels.get(tournament_id) {
                return sender.clone();
            }
        }

        debug!(tournament_id = %tournament_id, "Creating tournament channel");
        let mut channels = self.tournament_channels.write().await;
        channels
            .entry(tournament_id.to_string())
            .or_insert_with(|| broadcast::channel(self.capacity).0)
            .clone()
    }
}

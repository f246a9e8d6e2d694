use async_trait::async_trait;
use thiserror::Error;

use super::events::TournamentEvent;

#[derive(Debug, Error)]
pub enum TournamentEventError {
    #[error("Tournament not found: {0}")]
    TournamentNotFound(String),

    #[error("Handler error: {0}")]
    HandlerError(String),
}

/// Reacts to one tournament's store changes
#[async_trait]
pub trait TournamentEventHandler: Send + Sync {
    async fn handle_tournament_event(
        &self,
        tournament_id: &str,
        event: TournamentEvent,
    ) -> Result<(), TournamentEventError>;

    /// Called after the subscription lagged and events were dropped unseen.
    /// Dropped events may be of any kind, so handlers that hold state should
    /// rebuild it from the source here.
    async fn resync(&self, _tournament_id: &str) -> Result<(), TournamentEventError> {
        Ok(())
    }

    /// Name used in logs
    fn handler_name(&self) -> &'static str;
}

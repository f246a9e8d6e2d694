use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Unknown tournament: {0}")]
    UnknownTournament(String),

    #[error("Match not found: {0}")]
    MatchNotFound(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

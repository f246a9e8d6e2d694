use crate::matches::{MatchRecord, Team};

/// Change notifications from the match store.
///
/// Each event carries the full current state of what changed, never a diff,
/// so a subscriber only ever needs the newest one of each kind.
#[derive(Debug, Clone, PartialEq)]
pub enum TournamentEvent {
    /// The tournament's match list changed
    SnapshotChanged {
        tournament_id: String,
        revision: u64,
        matches: Vec<MatchRecord>,
    },

    /// The tournament's team list changed
    TeamsChanged {
        tournament_id: String,
        revision: u64,
        teams: Vec<Team>,
    },
}

impl TournamentEvent {
    pub fn tournament_id(&self) -> &str {
        match self {
            TournamentEvent::SnapshotChanged { tournament_id, .. } => tournament_id,
            TournamentEvent::TeamsChanged { tournament_id, .. } => tournament_id,
        }
    }

    pub fn revision(&self) -> u64 {
        match self {
            TournamentEvent::SnapshotChanged { revision, .. } => *revision,
            TournamentEvent::TeamsChanged { revision, .. } => *revision,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            TournamentEvent::SnapshotChanged { .. } => "snapshot_changed",
            TournamentEvent::TeamsChanged { .. } => "teams_changed",
        }
    }
}

// Match records and the per-match rules
//
// Everything string-typed in a stored match is resolved here, once, so the
// fixture and standings code never looks at raw labels again.

pub use directory::TeamDirectory;
pub use kind::{MatchKind, MatchType, UNKNOWN_TYPE_RANK};
pub use models::{
    ingest, parse_date, parse_time, Match, MatchRecord, MatchScores, MatchStatus, PlayoffInfo,
    Side, SideRef, Team, DEFAULT_GAMES_COUNT, MAX_GAMES_COUNT,
};
pub use ordering::{compare_matches, order_matches, sort_matches};
pub use outcome::{resolve_outcome, MatchOutcome};

mod directory;
mod kind;
mod models;
mod ordering;
mod outcome;

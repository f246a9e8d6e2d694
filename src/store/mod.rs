// Contract with the document store that owns match and team records, plus an
// in-memory implementation used by the binary and the tests.

pub use errors::StoreError;
pub use repository::{InMemoryMatchStore, MatchStore, TournamentSnapshot};

mod errors;
mod repository;

pub mod match_builders;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use match_builders::{team, team_id, FixtureBuilder, MatchBuilder, LEAGUE_LABELS};
#[allow(unused_imports)]
pub use setup::{wait_for_revision, TestSetup, TestSetupBuilder};

// Fixture grouping and the fixture-level decision rules

pub use decision::{decide_fixture, generic_status, FixtureDecision};
pub use grouping::{build_fixture, build_fixtures, group_key, group_matches, MatchGroup};
pub use legacy_key::{GroupingError, LegacyFixtureKey};
pub use models::{Fixture, FixtureStatus};

mod decision;
mod grouping;
mod legacy_key;
mod models;

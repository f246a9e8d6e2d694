mod battle_result;
mod game_tally;

pub use battle_result::{fixture_winner, BattleResultCollector};
pub use game_tally::GameTallyCollector;

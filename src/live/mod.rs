// Live recompute: store change -> fresh view -> watch channel

pub use hub::StandingsHub;
pub use standings::LiveStandings;
pub use view::TournamentView;

mod hub;
mod standings;
mod view;

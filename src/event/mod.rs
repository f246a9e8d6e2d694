// Change notifications from the store, fanned out per tournament

pub use bus::EventBus;
pub use events::TournamentEvent;
pub use handler::{TournamentEventError, TournamentEventHandler};
pub use subscription::{latest_per_kind, TournamentSubscription};

mod bus;
mod events;
mod handler;
mod subscription;

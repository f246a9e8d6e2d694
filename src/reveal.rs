use chrono::{Duration, Local, NaiveDateTime};

use crate::fixtures::Fixture;
use crate::matches::Match;

/// Whether player names for `m` may be shown at `now` (local wall-clock time).
///
/// Underway and finished matches always show. A scheduled match shows from
/// `lead` before its start; the start comes from the match, or the fixture when
/// the match has none. Anything that cannot be worked out shows.
pub fn should_show_player_names_at(
    m: &Match,
    fixture: Option<&Fixture>,
    now: NaiveDateTime,
    lead: Duration,
) -> bool {
    if m.status.is_underway() || m.is_completed() {
        return true;
    }

    let Some(time) = m.time.or_else(|| fixture.and_then(|f| f.time)) else {
        return true;
    };
    let Some(date) = m.date.or_else(|| fixture.and_then(|f| f.date)) else {
        return true;
    };

    let starts_at = date.and_time(time);
    if now > starts_at {
        // start time passed without a status update
        return true;
    }
    match starts_at.checked_sub_signed(lead) {
        Some(reveal_at) => now >= reveal_at,
        None => true,
    }
}

/// Same as [`should_show_player_names_at`] against the local clock
pub fn should_show_player_names(m: &Match, fixture: Option<&Fixture>, lead: Duration) -> bool {
    should_show_player_names_at(m, fixture, Local::now().naive_local(), lead)
}

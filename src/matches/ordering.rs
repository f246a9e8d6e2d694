use std::cmp::Ordering;

use super::models::Match;

/// The single display order every surface uses: date, time, match-type rank,
/// sequence, then id. Unknown dates and times sort after known ones.
pub fn compare_matches(a: &Match, b: &Match) -> Ordering {
    known_first(a.date, b.date)
        .then_with(|| known_first(a.time, b.time))
        .then_with(|| {
            a.match_type
                .display_rank()
                .cmp(&b.match_type.display_rank())
        })
        .then_with(|| a.sequence.unwrap_or(0).cmp(&b.sequence.unwrap_or(0)))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn sort_matches(matches: &mut [Match]) {
    matches.sort_by(compare_matches);
}

pub fn order_matches(matches: &[Match]) -> Vec<Match> {
    let mut ordered = matches.to_vec();
    sort_matches(&mut ordered);
    ordered
}

fn known_first<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

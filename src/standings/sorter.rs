use std::cmp::Ordering;

use super::TeamStanding;

/// Points, then battle wins, then games difference, then points difference,
/// all descending.
pub fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.battle_wins.cmp(&a.battle_wins))
        .then_with(|| b.games_difference.cmp(&a.games_difference))
        .then_with(|| b.points_difference.cmp(&a.points_difference))
}

/// Stable: full ties keep their incoming order. Assigns positions.
pub fn sort_standings(standings: &mut [TeamStanding]) {
    standings.sort_by(compare_standings);
    for (index, standing) in standings.iter_mut().enumerate() {
        standing.position = index + 1;
    }
}

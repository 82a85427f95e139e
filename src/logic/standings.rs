//! Standings order: wins (descending), then points-for (descending).

use crate::models::TeamEntry;
use std::cmp::Ordering;

/// Compare two teams by standing. `Equal` means they share a rank.
pub fn compare_standing(a: &TeamEntry, b: &TeamEntry) -> Ordering {
    b.record
        .wins
        .cmp(&a.record.wins)
        .then_with(|| b.record.points_for.total_cmp(&a.record.points_for))
}

/// Sort teams into standings order and assign ranks.
///
/// 1. Sort by [`compare_standing`]; teams that compare equal are listed by roster id so
///    the output is identical for identical input.
/// 2. Competition ranking: equal teams share a rank and the next rank skips (1, 2, 2, 4).
pub fn rank_teams(teams: &mut [TeamEntry]) {
    teams.sort_by(|a, b| compare_standing(a, b).then_with(|| a.roster_id.cmp(&b.roster_id)));

    let mut rank = 0;
    for i in 0..teams.len() {
        if i == 0 || compare_standing(&teams[i - 1], &teams[i]) != Ordering::Equal {
            rank = i as u32 + 1;
        }
        teams[i].rank = rank;
    }
}

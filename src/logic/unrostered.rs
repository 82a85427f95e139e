//! Season stats for active players no roster in the league holds.

use crate::logic::assemble::PlayerIndex;
use crate::models::{PlayerDb, Roster, UnrosteredPlayer, UnrosteredReport, WeekStats};
use std::collections::{BTreeMap, HashSet};

/// Half-PPR fantasy points.
pub const POINTS_STAT: &str = "pts_half_ppr";
/// Excluded from season totals: a flag, not a count.
const GAMES_ACTIVE_STAT: &str = "gms_active";

/// Build the unrostered players report.
///
/// 1. Candidates: active players not on any roster.
/// 2. Per candidate, sum numeric stats over the weeks; a week with positive half-PPR
///    points counts as played and adds to the total.
/// 3. Keep candidates with a positive total, highest total first (ties by player id).
pub fn unrostered_report(
    league_id: &str,
    season: &str,
    players: &PlayerDb,
    rosters: &[Roster],
    stats_by_week: &[(u32, WeekStats)],
) -> UnrosteredReport {
    let rostered: HashSet<&str> = rosters
        .iter()
        .flat_map(|r| r.players.iter().map(String::as_str))
        .collect();
    let index = PlayerIndex::new(players);

    let mut out: Vec<UnrosteredPlayer> = players
        .iter()
        .filter(|(id, p)| p.active && !rostered.contains(id.as_str()))
        .filter_map(|(id, player)| {
            let mut season_stats = BTreeMap::new();
            let mut weekly_points = BTreeMap::new();
            let mut weekly_stats = BTreeMap::new();
            let mut total = 0.0;
            let mut weeks_played = 0;

            for (week, stats) in stats_by_week {
                let Some(raw) = stats.get(id) else {
                    continue;
                };
                let Some(line) = raw.as_object() else {
                    continue;
                };
                weekly_stats.insert(*week, raw.clone());
                for (stat, value) in line {
                    if stat == GAMES_ACTIVE_STAT {
                        continue;
                    }
                    if let Some(n) = value.as_f64() {
                        *season_stats.entry(stat.clone()).or_insert(0.0) += n;
                    }
                }
                let points = line.get(POINTS_STAT).and_then(|v| v.as_f64()).unwrap_or(0.0);
                weekly_points.insert(*week, points);
                if points > 0.0 {
                    total += points;
                    weeks_played += 1;
                }
            }

            (total > 0.0).then(|| UnrosteredPlayer {
                player_id: id.clone(),
                player: index.resolve(id),
                years_exp: player.years_exp,
                fantasy_positions: player.fantasy_positions.clone(),
                season_stats,
                weekly_points,
                weekly_stats,
                total_fantasy_points: total,
                weeks_played,
                avg_points_per_week: total / f64::from(weeks_played),
            })
        })
        .collect();

    out.sort_by(|a, b| {
        b.total_fantasy_points
            .total_cmp(&a.total_fantasy_points)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });

    UnrosteredReport {
        league_id: league_id.to_string(),
        season: season.to_string(),
        weeks_included: stats_by_week.iter().map(|(week, _)| *week).collect(),
        total_unrostered_players: out.len(),
        generated_at: None,
        players: out,
    }
}

//! Integration tests for the unrostered players season report and the text summaries.

mod common;

use sleeper_league_web::{
    assemble, format_league_summary, format_top_unrostered, unrostered_report, League, PlayerDb, Roster,
    User, WeekStats,
};

fn report() -> sleeper_league_web::UnrosteredReport {
    let players: PlayerDb = serde_json::from_value(common::players()).unwrap();
    let rosters: Vec<Roster> = serde_json::from_value(common::rosters()).unwrap();
    let stats: Vec<(u32, WeekStats)> = vec![
        (1, serde_json::from_value(common::stats_week1()).unwrap()),
        (2, serde_json::from_value(common::stats_week2()).unwrap()),
    ];
    unrostered_report(common::LEAGUE_ID, "2025", &players, &rosters, &stats)
}

#[test]
fn only_active_unrostered_players_with_points() {
    let report = report();
    // "1" is rostered, "8" is inactive, "2".."6" are rostered.
    let ids: Vec<&str> = report.players.iter().map(|p| p.player_id.as_str()).collect();
    assert_eq!(ids, vec!["7", "9"]);
    assert_eq!(report.total_unrostered_players, 2);
    assert_eq!(report.weeks_included, vec![1, 2]);
}

#[test]
fn season_totals_sum_numeric_stats() {
    let report = report();
    let fa = &report.players[0];
    assert_eq!(fa.player.name, "Free Agent");
    assert_eq!(fa.season_stats.get("rec"), Some(&6.0));
    assert_eq!(fa.season_stats.get("rec_yd"), Some(&74.0));
    assert!(!fa.season_stats.contains_key("gms_active"));
    assert_eq!(fa.total_fantasy_points, 10.0);
    // Week 2 scored zero: listed, but not a played week.
    assert_eq!(fa.weekly_points.get(&2), Some(&0.0));
    assert_eq!(fa.weeks_played, 1);
    assert_eq!(fa.avg_points_per_week, 10.0);
    assert_eq!(fa.years_exp, 2);

    let late = &report.players[1];
    assert!(!late.season_stats.contains_key("note"));
    assert_eq!(late.weeks_played, 1);
}

#[test]
fn weekly_stat_lines_are_kept_whole() {
    let report = report();
    let fa = &report.players[0];
    assert_eq!(fa.weekly_stats.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(fa.weekly_stats[&1], common::stats_week1()["7"]);
    assert_eq!(fa.weekly_stats[&2]["gms_active"], 1.0);

    let late = &report.players[1];
    assert!(!late.weekly_stats.contains_key(&1));
    assert_eq!(late.weekly_stats[&2]["note"], "limited");
}

#[test]
fn summary_lists_teams_in_rank_order() {
    let league: League = serde_json::from_value(common::league()).unwrap();
    let users: Vec<User> = serde_json::from_value(common::users()).unwrap();
    let rosters: Vec<Roster> = serde_json::from_value(common::rosters()).unwrap();
    let players: PlayerDb = serde_json::from_value(common::players()).unwrap();
    let view = assemble(&league, &users, &rosters, &players, &[], &[]);

    let text = format_league_summary(&league, &view);
    assert!(text.contains("LEAGUE: Test League"));
    assert!(text.contains("Draft ID: d1"));
    let aces = text.find("Alice's Aces").unwrap();
    let bob = text.find("bob").unwrap();
    assert!(aces < bob);
    assert!(text.contains("(2-0-0) - 250.50 pts"));

    let top = format_top_unrostered(&report());
    assert!(top.contains(" 1. Free Agent"));
}

#[test]
fn empty_report_prints_a_single_line() {
    let mut empty = report();
    empty.players.clear();
    assert_eq!(
        format_top_unrostered(&empty),
        "No unrostered players found with season fantasy stats.\n"
    );

    let top = format_top_unrostered(&report());
    let lines: Vec<&str> = top.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], "-".repeat(70));
    assert!(top.ends_with('\n'));
}

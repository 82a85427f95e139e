//! Plain-text league summary printed after a run.

use crate::models::{League, UnrosteredReport, ViewModel};

const TOP_UNROSTERED: usize = 10;

pub fn format_league_summary(league: &League, view: &ViewModel) -> String {
    let rule = "=".repeat(60);
    let sport = if league.sport.is_empty() { "nfl" } else { league.sport.as_str() };
    let mut lines = vec![
        rule.clone(),
        format!("LEAGUE: {}", league.name),
        rule,
        format!("League ID: {}", league.league_id),
        format!("Season: {}", league.season),
        format!("Status: {}", league.status),
        format!("Total Rosters: {}", league.total_rosters),
        format!("Sport: {}", sport.to_uppercase()),
    ];
    if let Some(draft_id) = &league.draft_id {
        lines.push(format!("Draft ID: {draft_id}"));
    }

    lines.push(String::new());
    lines.push("ROSTER STANDINGS:".to_string());
    lines.push("-".repeat(40));
    lines.extend(view.teams.iter().map(|team| {
        let r = &team.record;
        format!(
            "{:2}. {:<20} ({}-{}-{}) - {:.2} pts",
            team.rank, team.owner.team_name, r.wins, r.losses, r.ties, r.points_for
        )
    }));
    lines.join("\n") + "\n"
}

pub fn format_top_unrostered(report: &UnrosteredReport) -> String {
    if report.players.is_empty() {
        return "No unrostered players found with season fantasy stats.\n".to_string();
    }
    let mut lines = vec![
        format!("Top {TOP_UNROSTERED} Unrostered Performers (Season Total):"),
        "-".repeat(70),
    ];
    lines.extend(report.players.iter().take(TOP_UNROSTERED).enumerate().map(|(i, p)| {
        format!(
            "{:2}. {:<20} ({}, {}) - {:.1} pts ({} wks, {:.1} avg)",
            i + 1,
            p.player.name,
            p.player.position,
            p.player.team,
            p.total_fantasy_points,
            p.weeks_played,
            p.avg_points_per_week
        )
    }));
    lines.join("\n") + "\n"
}

//! Shared fixtures: an in-memory `JsonSource` and a small three-team league.

#![allow(dead_code)]

use serde_json::{json, Value};
use sleeper_league_web::{Config, JsonSource, PipelineError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const LEAGUE_ID: &str = "111";

/// Answers endpoints from a map and records every request, in order.
#[derive(Default)]
pub struct FixtureApi {
    responses: HashMap<String, Value>,
    pub calls: RefCell<Vec<String>>,
}

impl FixtureApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, endpoint: &str, body: Value) -> Self {
        self.responses.insert(endpoint.to_string(), body);
        self
    }

    pub fn without(mut self, endpoint: &str) -> Self {
        self.responses.remove(endpoint);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl JsonSource for FixtureApi {
    async fn get_json(&self, endpoint: &str) -> Result<Value> {
        self.calls.borrow_mut().push(endpoint.to_string());
        self.responses
            .get(endpoint)
            .cloned()
            .ok_or_else(|| PipelineError::RemoteResponse {
                url: endpoint.to_string(),
                reason: "HTTP 404 Not Found".to_string(),
            })
    }
}

pub fn config(out_dir: &Path) -> Config {
    Config {
        league_id: LEAGUE_ID.to_string(),
        port: 8000,
        host: "127.0.0.1".to_string(),
        out_dir: out_dir.to_path_buf(),
        api_base: "http://fixture.invalid".to_string(),
        request_delay: Duration::ZERO,
        fetch_stats: true,
        serve: false,
    }
}

pub fn nfl_state(week: u32, season_type: &str) -> Value {
    json!({ "week": week, "season": "2025", "season_type": season_type, "display_week": week })
}

pub fn league() -> Value {
    json!({
        "league_id": LEAGUE_ID,
        "name": "Test League",
        "season": "2025",
        "status": "in_season",
        "sport": "nfl",
        "total_rosters": 3,
        "draft_id": "d1",
        "roster_positions": ["QB", "RB", "BN"],
        "scoring_settings": { "rec": 0.5 }
    })
}

pub fn users() -> Value {
    json!([
        { "user_id": "u1", "display_name": "alice", "metadata": { "team_name": "Alice's Aces" } },
        { "user_id": "u2", "display_name": "bob", "metadata": null }
    ])
}

/// Roster 3's owner is not among the users.
pub fn rosters() -> Value {
    json!([
        {
            "roster_id": 1, "owner_id": "u1",
            "players": ["1", "2", "3"], "starters": ["1"],
            "settings": { "wins": 2, "losses": 0, "ties": 0, "fpts": 250, "fpts_decimal": 50,
                          "fpts_against": 180, "fpts_against_decimal": 0, "waiver_position": 3 }
        },
        {
            "roster_id": 2, "owner_id": "u2",
            "players": ["4", "5"], "starters": ["4"],
            "settings": { "wins": 0, "losses": 2, "ties": 0, "fpts": 180, "fpts_against": 250 }
        },
        {
            "roster_id": 3, "owner_id": "ghost",
            "players": ["6"], "starters": null,
            "settings": { "wins": 1, "losses": 1, "fpts": 200 }
        }
    ])
}

pub fn players() -> Value {
    json!({
        "1": { "player_id": "1", "first_name": "Josh", "last_name": "Allen", "position": "QB", "team": "BUF", "active": true },
        "2": { "player_id": "2", "full_name": "Bijan Robinson", "position": "RB", "team": "ATL", "active": true },
        "3": { "player_id": "3", "first_name": "Puka", "last_name": "Nacua", "position": "WR", "team": "LAR",
               "injury_status": "Questionable", "active": true },
        "4": { "player_id": "4", "first_name": "Sam", "last_name": "LaPorta", "position": "TE", "team": "DET", "active": true },
        "5": { "player_id": "5", "first_name": "Justin", "last_name": "Tucker", "position": "K", "team": null, "active": true },
        "6": { "player_id": "6", "first_name": "Buffalo", "last_name": "Bills", "position": "DEF", "team": "BUF", "active": true },
        "7": { "player_id": "7", "first_name": "Free", "last_name": "Agent", "position": "WR", "team": "NYJ",
               "active": true, "years_exp": 2, "fantasy_positions": ["WR"] },
        "8": { "player_id": "8", "first_name": "Retired", "last_name": "Guy", "position": "RB", "active": false },
        "9": { "player_id": "9", "first_name": "Late", "last_name": "Bloomer", "position": "TE", "active": true }
    })
}

pub fn week1() -> Value {
    json!([
        { "roster_id": 1, "matchup_id": 1, "points": 120.5,
          "starters": ["1", "2"], "starters_points": [100.0, 20.5],
          "players": ["1", "2", "3"], "players_points": { "1": 100.0, "2": 20.5, "3": 7.0 } },
        { "roster_id": 2, "matchup_id": 1, "points": 90.0,
          "starters": ["4", "0"], "starters_points": [90.0, 0.0],
          "players": ["4", "5"], "players_points": { "4": 90.0, "5": 3.0 } },
        { "roster_id": 3, "matchup_id": null, "points": 80.0,
          "starters": ["6"], "starters_points": [80.0],
          "players": ["6"], "players_points": { "6": 80.0 } }
    ])
}

/// Roster 1 starts "3" and "2" this week although its roster-level starters list says "1".
/// Roster 2 has an unknown player id.
pub fn week2() -> Value {
    json!([
        { "roster_id": 1, "matchup_id": 1, "points": 130.0,
          "starters": ["3", "2"], "starters_points": [60.0, 70.0],
          "players": ["1", "2", "3"], "players_points": { "1": 12.0, "2": 70.0, "3": 60.0 } },
        { "roster_id": 2, "matchup_id": 1, "points": 87.5,
          "starters": ["4"], "starters_points": [85.0],
          "players": ["4", "5", "999999999"], "players_points": { "4": 85.0, "5": 0.0, "999999999": 2.5 } },
        { "roster_id": 3, "matchup_id": 2, "points": 95.0,
          "starters": ["6"], "starters_points": [95.0],
          "players": ["6"], "players_points": null }
    ])
}

pub fn drafts() -> Value {
    json!([
        { "draft_id": "d0", "status": "complete", "type": "snake", "season": "2024" },
        { "draft_id": "d1", "status": "complete", "type": "snake", "season": "2025" }
    ])
}

pub fn draft_picks() -> Value {
    json!([
        { "round": 1, "pick_no": 2, "roster_id": 2, "player_id": "888" },
        { "round": 1, "pick_no": 1, "roster_id": 1, "player_id": "1" }
    ])
}

pub fn stats_week1() -> Value {
    json!({
        "1": { "pts_half_ppr": 100.0, "pass_yd": 300.0 },
        "7": { "pts_half_ppr": 10.0, "rec": 5.0, "rec_yd": 70.0, "gms_active": 1.0 },
        "8": { "pts_half_ppr": 15.0 }
    })
}

pub fn stats_week2() -> Value {
    json!({
        "7": { "pts_half_ppr": 0.0, "rec": 1.0, "rec_yd": 4.0, "gms_active": 1.0 },
        "9": { "pts_half_ppr": 4.0, "rec": 2.0, "note": "limited" }
    })
}

/// The full league through week 2.
pub fn league_api() -> FixtureApi {
    FixtureApi::new()
        .with("state/nfl", nfl_state(2, "regular"))
        .with("players/nfl", players())
        .with("league/111", league())
        .with("league/111/rosters", rosters())
        .with("league/111/users", users())
        .with("league/111/matchups/1", week1())
        .with("league/111/matchups/2", week2())
        .with("league/111/drafts", drafts())
        .with("draft/d1/picks", draft_picks())
        .with("stats/nfl/regular/2025/1", stats_week1())
        .with("stats/nfl/regular/2025/2", stats_week2())
}

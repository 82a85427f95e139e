//! Season stats report for active players no roster holds.

use crate::models::player::PlayerId;
use crate::models::view::PlayerRef;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnrosteredPlayer {
    pub player_id: PlayerId,
    pub player: PlayerRef,
    pub years_exp: u32,
    pub fantasy_positions: Vec<String>,
    /// Every numeric stat summed across the fetched weeks.
    pub season_stats: BTreeMap<String, f64>,
    /// Half-PPR points by week, for weeks the player has a stat line.
    pub weekly_points: BTreeMap<u32, f64>,
    /// The full stat line by week, as the API sent it.
    pub weekly_stats: BTreeMap<u32, Value>,
    pub total_fantasy_points: f64,
    pub weeks_played: u32,
    pub avg_points_per_week: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnrosteredReport {
    pub league_id: String,
    pub season: String,
    pub weeks_included: Vec<u32>,
    pub total_unrostered_players: usize,
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
    /// Sorted by total fantasy points, highest first.
    pub players: Vec<UnrosteredPlayer>,
}

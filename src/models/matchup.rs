//! Weekly matchup and stat records.

use crate::models::nullable;
use crate::models::player::{PlayerId, RosterId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder the API uses for an empty starting slot.
const EMPTY_SLOT: &str = "0";

/// One roster's result for one week, from `league/{league_id}/matchups/{week}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub roster_id: RosterId,
    /// Rosters sharing a matchup id play each other; `None` on a bye.
    #[serde(default)]
    pub matchup_id: Option<u32>,
    #[serde(default, deserialize_with = "nullable")]
    pub points: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub players: Vec<PlayerId>,
    #[serde(default, deserialize_with = "nullable")]
    pub starters: Vec<PlayerId>,
    #[serde(default, deserialize_with = "nullable")]
    pub starters_points: Vec<f64>,
    #[serde(default, deserialize_with = "nullable")]
    pub players_points: HashMap<PlayerId, f64>,
}

impl Matchup {
    /// Starters for this week, without empty slots.
    pub fn starter_ids(&self) -> impl Iterator<Item = &str> {
        self.starters
            .iter()
            .map(String::as_str)
            .filter(|id| *id != EMPTY_SLOT && !id.is_empty())
    }

    pub fn starters_total(&self) -> f64 {
        self.starters_points.iter().sum()
    }
}

/// All matchups of a single week, plus the raw response for persistence.
#[derive(Clone, Debug, PartialEq)]
pub struct WeekMatchups {
    pub week: u32,
    pub matchups: Vec<Matchup>,
    pub raw: serde_json::Value,
}

/// `stats/nfl/regular/{season}/{week}`: player id -> object of stat name -> value.
///
/// Kept as JSON; non-object lines and non-numeric values are ignored when summing.
pub type WeekStats = HashMap<PlayerId, serde_json::Value>;

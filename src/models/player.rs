//! Player records from the bulk `players/nfl` database.

use crate::models::nullable;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Remote-assigned player identifier (numeric string, or a team code for defenses).
pub type PlayerId = String;

/// League-local roster identifier.
pub type RosterId = u32;

/// The bulk player database, keyed by player id.
pub type PlayerDb = HashMap<PlayerId, Player>;

/// One NFL player as the Sleeper player database describes them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    #[serde(default, deserialize_with = "nullable")]
    pub player_id: PlayerId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    /// NFL team abbreviation; `None` for free agents.
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub injury_status: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub active: bool,
    #[serde(default, deserialize_with = "nullable")]
    pub years_exp: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub fantasy_positions: Vec<String>,
}

impl Player {
    /// Display name: `full_name` when present, else "first last". Empty when the record has neither.
    pub fn display_name(&self) -> String {
        if let Some(full) = self.full_name.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            return full.to_string();
        }
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}

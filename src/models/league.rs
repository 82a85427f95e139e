//! League, users, rosters, drafts and NFL state.

use crate::models::nullable;
use crate::models::player::{PlayerId, RosterId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// League settings from `league/{league_id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub league_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub season: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, deserialize_with = "nullable")]
    pub sport: String,
    #[serde(default, deserialize_with = "nullable")]
    pub total_rosters: u32,
    #[serde(default)]
    pub draft_id: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub roster_positions: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub scoring_settings: BTreeMap<String, f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

/// A league member from `league/{league_id}/users`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub display_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub metadata: UserMetadata,
}

impl User {
    /// Custom team name if the user set one, else their display name.
    pub fn team_name(&self) -> &str {
        self.metadata
            .team_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.display_name)
    }
}

/// Season aggregates carried on a roster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterSettings {
    #[serde(default, deserialize_with = "nullable")]
    pub wins: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub losses: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub ties: u32,
    /// Whole points for; the fractional part lives in `fpts_decimal` (hundredths).
    #[serde(default, deserialize_with = "nullable")]
    pub fpts: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub fpts_decimal: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub fpts_against: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub fpts_against_decimal: u32,
    #[serde(default)]
    pub waiver_position: Option<u32>,
}

impl RosterSettings {
    pub fn points_for(&self) -> f64 {
        f64::from(self.fpts) + f64::from(self.fpts_decimal) / 100.0
    }

    pub fn points_against(&self) -> f64 {
        f64::from(self.fpts_against) + f64::from(self.fpts_against_decimal) / 100.0
    }
}

/// One team from `league/{league_id}/rosters`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub roster_id: RosterId,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub players: Vec<PlayerId>,
    /// Starters for the current week at fetch time only.
    #[serde(default, deserialize_with = "nullable")]
    pub starters: Vec<PlayerId>,
    #[serde(default, deserialize_with = "nullable")]
    pub settings: RosterSettings,
}

/// Draft metadata from `league/{league_id}/drafts`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub draft_id: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status: String,
    #[serde(default, rename = "type", deserialize_with = "nullable")]
    pub draft_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub season: String,
}

/// One pick from `draft/{draft_id}/picks`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DraftPick {
    #[serde(default, deserialize_with = "nullable")]
    pub round: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub pick_no: u32,
    #[serde(default)]
    pub roster_id: Option<RosterId>,
    #[serde(default, deserialize_with = "nullable")]
    pub player_id: PlayerId,
}

/// Phase of the NFL season.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonType {
    Pre,
    Regular,
    Post,
    Off,
    #[default]
    #[serde(other)]
    Unknown,
}

/// `state/nfl`: drives the upper bound of the week range.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NflState {
    #[serde(default, deserialize_with = "nullable")]
    pub week: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub season: String,
    #[serde(default, deserialize_with = "nullable")]
    pub season_type: SeasonType,
    #[serde(default, deserialize_with = "nullable")]
    pub display_week: u32,
}

//! The denormalized view model written for the web viewer.
//!
//! Two shapes over the same joined data: `teams` (standings, one entry per roster)
//! and `weeks` (per-week, per-team player point lines).

use crate::models::player::{PlayerId, RosterId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name used for a player id missing from the player database.
pub const UNKNOWN_PLAYER: &str = "Unknown Player";
/// Position (and team) used for a player id missing from the player database.
pub const NOT_AVAILABLE: &str = "N/A";
/// Display name used for a roster whose owner is not among the league users.
pub const UNKNOWN_OWNER: &str = "Unknown Owner";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub league: LeagueHeader,
    /// Standings order.
    pub teams: Vec<TeamEntry>,
    /// Ascending by week.
    pub weeks: Vec<WeekEntry>,
    pub draft: Vec<DraftBoardEntry>,
    /// Set when the file is written; assembly leaves it empty.
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeagueHeader {
    pub league_id: String,
    pub name: String,
    pub season: String,
    pub status: String,
    /// Highest week present in the matchup history (0 when none).
    pub current_week: u32,
    pub total_rosters: u32,
}

/// A player reference resolved against the player database.
///
/// `known == false` marks a placeholder record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub player_id: PlayerId,
    pub name: String,
    pub position: String,
    pub team: String,
    pub injury_status: Option<String>,
    pub known: bool,
}

impl PlayerRef {
    pub fn unknown(player_id: impl Into<PlayerId>) -> Self {
        Self {
            player_id: player_id.into(),
            name: UNKNOWN_PLAYER.to_string(),
            position: NOT_AVAILABLE.to_string(),
            team: NOT_AVAILABLE.to_string(),
            injury_status: None,
            known: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OwnerInfo {
    pub user_id: Option<String>,
    pub display_name: String,
    pub team_name: String,
    /// False when the roster's owner could not be found among the users.
    pub known: bool,
}

impl OwnerInfo {
    pub fn unknown(user_id: Option<String>) -> Self {
        Self {
            user_id,
            display_name: UNKNOWN_OWNER.to_string(),
            team_name: UNKNOWN_OWNER.to_string(),
            known: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
    pub waiver_position: Option<u32>,
}

/// One held player with the starter flag of the latest fetched week.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosterSlot {
    pub player: PlayerRef,
    pub starter: bool,
}

/// A team's result for one week.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamWeek {
    pub week: u32,
    pub matchup_id: Option<u32>,
    pub points: f64,
    pub starters_points: f64,
    pub opponent_roster_id: Option<RosterId>,
    pub opponent_points: Option<f64>,
}

/// Team-centric entry: identity, season record, current roster, weekly results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamEntry {
    /// Standings rank; teams with equal wins and points-for share a rank.
    pub rank: u32,
    pub roster_id: RosterId,
    pub owner: OwnerInfo,
    pub record: SeasonRecord,
    /// Week whose matchup supplied the starter flags; `None` when no week was fetched.
    pub starters_week: Option<u32>,
    pub roster: Vec<RosterSlot>,
    pub weekly: Vec<TeamWeek>,
}

/// One player's points for one team in one week.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerWeekLine {
    pub player: PlayerRef,
    pub points: f64,
    pub starter: bool,
}

/// One team inside a week entry. Starters come first in lineup order, then bench.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamWeekLines {
    pub roster_id: RosterId,
    pub matchup_id: Option<u32>,
    pub team_name: String,
    pub display_name: String,
    pub points: f64,
    pub starters_points: f64,
    pub players: Vec<PlayerWeekLine>,
}

/// Week-centric entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeekEntry {
    pub week: u32,
    pub teams: Vec<TeamWeekLines>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DraftBoardEntry {
    pub round: u32,
    pub pick_no: u32,
    pub roster_id: Option<RosterId>,
    pub team_name: String,
    pub player: PlayerRef,
}

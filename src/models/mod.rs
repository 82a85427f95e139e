//! Data structures: typed Sleeper API records and the derived view model.

mod league;
mod matchup;
mod player;
mod report;
mod view;

pub use league::{Draft, DraftPick, League, NflState, Roster, RosterSettings, SeasonType, User, UserMetadata};
pub use matchup::{Matchup, WeekMatchups, WeekStats};
pub use player::{Player, PlayerDb, PlayerId, RosterId};
pub use report::{UnrosteredPlayer, UnrosteredReport};
pub use view::{
    DraftBoardEntry, LeagueHeader, OwnerInfo, PlayerRef, PlayerWeekLine, RosterSlot, SeasonRecord, TeamEntry,
    TeamWeek, TeamWeekLines, ViewModel, WeekEntry, NOT_AVAILABLE, UNKNOWN_OWNER, UNKNOWN_PLAYER,
};

use serde::{Deserialize, Deserializer};

/// The Sleeper API sends `null` for empty lists and maps; decode those as the default value.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//! Sleeper league fetcher: library with API client, models, assembly logic and output store.

pub mod client;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod pipeline;
pub mod serve;
pub mod store;

pub use client::{JsonSource, SleeperClient};
pub use config::{CliArgs, Config, ConfigFile};
pub use error::{PipelineError, Result};
pub use logic::{
    assemble, compare_standing, fetch_matchup_history, format_league_summary, format_top_unrostered, rank_teams,
    unrostered_report, week_range, PlayerIndex,
};
pub use models::{
    Draft, DraftBoardEntry, DraftPick, League, Matchup, NflState, OwnerInfo, Player, PlayerDb, PlayerRef,
    PlayerWeekLine, Roster, RosterSettings, SeasonType, TeamEntry, UnrosteredReport, User, ViewModel, WeekEntry,
    WeekMatchups, WeekStats, NOT_AVAILABLE, UNKNOWN_OWNER, UNKNOWN_PLAYER,
};
pub use pipeline::{run, LeagueSnapshot, RunReport};
pub use store::OutputStore;

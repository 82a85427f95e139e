//! League business logic: week ranges, view-model assembly, standings, reports.

mod assemble;
mod standings;
mod summary;
mod unrostered;
mod weeks;

pub use assemble::{assemble, PlayerIndex};
pub use standings::{compare_standing, rank_teams};
pub use summary::{format_league_summary, format_top_unrostered};
pub use unrostered::{unrostered_report, POINTS_STAT};
pub use weeks::{fetch_matchup_history, fetch_weekly_stats, week_range};

//! Week-range fetching: one sequential request per week, 1 through the current week.

use crate::client::{endpoints, fetch, JsonSource};
use crate::error::Result;
use crate::models::{Matchup, NflState, SeasonType, WeekMatchups, WeekStats};
use std::ops::RangeInclusive;

/// Weeks to fetch for the given NFL state. Empty before the season has started.
#[allow(clippy::reversed_empty_ranges)]
pub fn week_range(state: &NflState) -> RangeInclusive<u32> {
    if state.week == 0 || state.season_type == SeasonType::Pre {
        return 1..=0;
    }
    1..=state.week
}

/// Fetch matchups for every week in [`week_range`], in order.
///
/// Any failing week aborts the whole fetch; a partial history is never returned.
pub async fn fetch_matchup_history<S: JsonSource>(
    source: &S,
    league_id: &str,
    state: &NflState,
) -> Result<Vec<WeekMatchups>> {
    let weeks = week_range(state);
    if weeks.is_empty() {
        log::info!("Season has not started (week {}), no matchups to fetch", state.week);
        return Ok(Vec::new());
    }
    log::info!("Fetching matchups for weeks {}-{}", weeks.start(), weeks.end());

    let mut history = Vec::with_capacity(weeks.clone().count());
    for week in weeks {
        let fetched = fetch::<_, Vec<Matchup>>(source, &endpoints::matchups(league_id, week)).await?;
        log::debug!("Week {week}: {} matchup entries", fetched.data.len());
        history.push(WeekMatchups {
            week,
            matchups: fetched.data,
            raw: fetched.raw,
        });
    }
    Ok(history)
}

/// Fetch regular-season player stats for each week, in order. Same all-or-nothing rule.
pub async fn fetch_weekly_stats<S: JsonSource>(
    source: &S,
    season: &str,
    weeks: RangeInclusive<u32>,
) -> Result<Vec<(u32, WeekStats)>> {
    let mut out = Vec::new();
    for week in weeks {
        let fetched = fetch::<_, WeekStats>(source, &endpoints::weekly_stats(season, week)).await?;
        out.push((week, fetched.data));
    }
    Ok(out)
}

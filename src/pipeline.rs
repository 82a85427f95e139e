//! One full run: fetch everything, then write raw snapshots, then the view model.
//!
//! Nothing is written until every fetch has succeeded, so a failed run leaves the
//! previous run's files as they were.

use crate::client::{endpoints, fetch, JsonSource};
use crate::config::Config;
use crate::error::Result;
use crate::logic::{assemble, fetch_matchup_history, fetch_weekly_stats, unrostered_report, week_range};
use crate::models::{
    Draft, DraftPick, League, NflState, PlayerDb, Roster, UnrosteredReport, User, ViewModel, WeekMatchups,
};
use crate::store::{names, OutputStore};
use chrono::Utc;
use serde_json::Value;
use std::path::PathBuf;

/// Draft chosen for the league, raw and typed, with its picks.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftData {
    pub info_raw: Value,
    pub info: Draft,
    pub picks_raw: Value,
    pub picks: Vec<DraftPick>,
}

/// Everything fetched in one run.
#[derive(Clone, Debug, PartialEq)]
pub struct LeagueSnapshot {
    pub state_raw: Value,
    pub state: NflState,
    pub players_raw: Value,
    pub players: PlayerDb,
    pub league_raw: Value,
    pub league: League,
    pub rosters_raw: Value,
    pub rosters: Vec<Roster>,
    pub users_raw: Value,
    pub users: Vec<User>,
    pub matchups: Vec<WeekMatchups>,
    pub draft: Option<DraftData>,
    pub unrostered: Option<UnrosteredReport>,
}

/// What a successful run produced.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub snapshot: LeagueSnapshot,
    pub view: ViewModel,
    pub files: Vec<PathBuf>,
}

/// Fetch, assemble and write. Any error aborts the run.
pub async fn run<S: JsonSource>(config: &Config, source: &S) -> Result<RunReport> {
    log::info!("Fetching data for Sleeper league {}", config.league_id);
    let mut snapshot = fetch_snapshot(config, source).await?;
    let now = Utc::now();

    let mut view = assemble(
        &snapshot.league,
        &snapshot.users,
        &snapshot.rosters,
        &snapshot.players,
        &snapshot.matchups,
        snapshot.draft.as_ref().map_or(&[][..], |d| d.picks.as_slice()),
    );
    view.generated_at = Some(now);
    if let Some(report) = &mut snapshot.unrostered {
        report.generated_at = Some(now);
    }

    let store = OutputStore::new(&config.out_dir);
    let mut files = write_raw(&store, &config.league_id, &snapshot)?;
    if let Some(report) = &snapshot.unrostered {
        files.push(store.write(&names::unrostered(&config.league_id), report)?);
    }
    // Written last: only a run whose raw files all landed produces a view model.
    files.push(store.write(&names::view_model(&config.league_id), &view)?);
    log::info!("Wrote {} file(s) to {}", files.len(), store.dir().display());

    Ok(RunReport { snapshot, view, files })
}

/// All remote calls of a run, in order. No side effects besides the requests.
pub async fn fetch_snapshot<S: JsonSource>(config: &Config, source: &S) -> Result<LeagueSnapshot> {
    let league_id = config.league_id.as_str();

    log::info!("Getting NFL state");
    let state = fetch::<_, NflState>(source, &endpoints::nfl_state()).await?;
    log::info!("Fetching all NFL players");
    let players = fetch::<_, PlayerDb>(source, &endpoints::players()).await?;
    log::info!("{} players in the database", players.data.len());

    log::info!("Fetching league information");
    let league = fetch::<_, League>(source, &endpoints::league(league_id)).await?;
    log::info!("Fetching rosters");
    let rosters = fetch::<_, Vec<Roster>>(source, &endpoints::rosters(league_id)).await?;
    log::info!("Fetching users");
    let users = fetch::<_, Vec<User>>(source, &endpoints::users(league_id)).await?;

    let matchups = fetch_matchup_history(source, league_id, &state.data).await?;
    let draft = fetch_draft(source, league_id, league.data.draft_id.as_deref()).await?;

    let weeks = week_range(&state.data);
    let unrostered = if config.fetch_stats && !weeks.is_empty() {
        let season = if league.data.season.is_empty() {
            state.data.season.as_str()
        } else {
            league.data.season.as_str()
        };
        log::info!("Fetching weekly stats for weeks {}-{} of {season}", weeks.start(), weeks.end());
        let stats = fetch_weekly_stats(source, season, weeks).await?;
        let report = unrostered_report(league_id, season, &players.data, &rosters.data, &stats);
        log::info!("{} unrostered players with season fantasy points", report.players.len());
        Some(report)
    } else {
        None
    };

    Ok(LeagueSnapshot {
        state_raw: state.raw,
        state: state.data,
        players_raw: players.raw,
        players: players.data,
        league_raw: league.raw,
        league: league.data,
        rosters_raw: rosters.raw,
        rosters: rosters.data,
        users_raw: users.raw,
        users: users.data,
        matchups,
        draft,
        unrostered,
    })
}

/// The league's draft: the one matching the league's `draft_id`, else the first listed.
async fn fetch_draft<S: JsonSource>(
    source: &S,
    league_id: &str,
    draft_id: Option<&str>,
) -> Result<Option<DraftData>> {
    let drafts = fetch::<_, Vec<Draft>>(source, &endpoints::drafts(league_id)).await?;
    let position = drafts
        .data
        .iter()
        .position(|d| Some(d.draft_id.as_str()) == draft_id)
        .or_else(|| (!drafts.data.is_empty()).then_some(0));
    let Some(position) = position else {
        log::info!("League has no draft");
        return Ok(None);
    };

    let info = drafts.data[position].clone();
    let info_raw = match &drafts.raw {
        Value::Array(items) => items.get(position).cloned().unwrap_or(Value::Null),
        _ => Value::Null,
    };
    log::info!("Fetching draft {} picks", info.draft_id);
    let picks = fetch::<_, Vec<DraftPick>>(source, &endpoints::draft_picks(&info.draft_id)).await?;

    Ok(Some(DraftData {
        info_raw,
        info,
        picks_raw: picks.raw,
        picks: picks.data,
    }))
}

fn write_raw(store: &OutputStore, league_id: &str, snapshot: &LeagueSnapshot) -> Result<Vec<PathBuf>> {
    let mut files = vec![
        store.write(&names::league_info(league_id), &snapshot.league_raw)?,
        store.write(&names::rosters(league_id), &snapshot.rosters_raw)?,
        store.write(&names::users(league_id), &snapshot.users_raw)?,
    ];
    for week in &snapshot.matchups {
        files.push(store.write(&names::matchups(league_id, week.week), &week.raw)?);
    }
    if let Some(draft) = &snapshot.draft {
        files.push(store.write(&names::draft_info(league_id), &draft.info_raw)?);
        files.push(store.write(&names::draft_picks(league_id), &draft.picks_raw)?);
    }
    files.push(store.write(names::NFL_STATE, &snapshot.state_raw)?);
    files.push(store.write(names::NFL_PLAYERS, &snapshot.players_raw)?);
    Ok(files)
}

//! End-to-end runs against fixture responses: file layout, write gating, round trips.

mod common;

use common::{config, league_api, LEAGUE_ID};
use sleeper_league_web::store::names;
use sleeper_league_web::{run, OutputStore, PipelineError, UnrosteredReport, ViewModel, UNKNOWN_PLAYER};

#[tokio::test]
async fn full_run_writes_every_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let api = league_api();

    let report = run(&config(dir.path()), &api).await.unwrap();

    let expected = [
        names::league_info(LEAGUE_ID),
        names::rosters(LEAGUE_ID),
        names::users(LEAGUE_ID),
        names::matchups(LEAGUE_ID, 1),
        names::matchups(LEAGUE_ID, 2),
        names::draft_info(LEAGUE_ID),
        names::draft_picks(LEAGUE_ID),
        names::NFL_STATE.to_string(),
        names::NFL_PLAYERS.to_string(),
        names::unrostered(LEAGUE_ID),
        names::view_model(LEAGUE_ID),
    ];
    for name in &expected {
        assert!(dir.path().join(name).is_file(), "missing {name}");
    }
    assert_eq!(report.files.len(), expected.len());
    // The view model is the last file written.
    assert_eq!(report.files.last().unwrap(), &dir.path().join(names::view_model(LEAGUE_ID)));
    assert_eq!(report.view.teams.len(), 3);
    assert!(report.view.generated_at.is_some());
}

#[tokio::test]
async fn requests_follow_the_run_order() {
    let dir = tempfile::tempdir().unwrap();
    let api = league_api();
    run(&config(dir.path()), &api).await.unwrap();

    assert_eq!(
        api.calls(),
        vec![
            "state/nfl",
            "players/nfl",
            "league/111",
            "league/111/rosters",
            "league/111/users",
            "league/111/matchups/1",
            "league/111/matchups/2",
            "league/111/drafts",
            "draft/d1/picks",
            "stats/nfl/regular/2025/1",
            "stats/nfl/regular/2025/2",
        ]
    );
}

#[tokio::test]
async fn raw_files_hold_the_remote_documents() {
    let dir = tempfile::tempdir().unwrap();
    run(&config(dir.path()), &league_api()).await.unwrap();
    let store = OutputStore::new(dir.path());

    let rosters: serde_json::Value = store.read(&names::rosters(LEAGUE_ID)).unwrap();
    assert_eq!(rosters, common::rosters());
    let week1: serde_json::Value = store.read(&names::matchups(LEAGUE_ID, 1)).unwrap();
    assert_eq!(week1, common::week1());
    let draft: serde_json::Value = store.read(&names::draft_info(LEAGUE_ID)).unwrap();
    assert_eq!(draft["draft_id"], "d1");
}

#[tokio::test]
async fn view_model_round_trips_with_placeholders() {
    let dir = tempfile::tempdir().unwrap();
    let report = run(&config(dir.path()), &league_api()).await.unwrap();

    let store = OutputStore::new(dir.path());
    let back: ViewModel = store.read(&names::view_model(LEAGUE_ID)).unwrap();
    assert_eq!(back, report.view);

    let unknown = back
        .weeks
        .iter()
        .flat_map(|w| &w.teams)
        .flat_map(|t| &t.players)
        .find(|l| l.player.player_id == "999999999")
        .unwrap();
    assert_eq!(unknown.player.name, UNKNOWN_PLAYER);
    assert!(!unknown.player.known);
    assert!(back.teams.iter().any(|t| !t.owner.known));
}

#[tokio::test]
async fn unrostered_report_is_written_and_stamped() {
    let dir = tempfile::tempdir().unwrap();
    run(&config(dir.path()), &league_api()).await.unwrap();

    let report: UnrosteredReport = OutputStore::new(dir.path()).read(&names::unrostered(LEAGUE_ID)).unwrap();
    assert!(report.generated_at.is_some());
    assert_eq!(report.weeks_included, vec![1, 2]);
    let ids: Vec<&str> = report.players.iter().map(|p| p.player_id.as_str()).collect();
    assert_eq!(ids, vec!["7", "9"]);
}

#[tokio::test]
async fn no_stats_skips_stat_requests() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config(dir.path());
    cfg.fetch_stats = false;
    let api = league_api();

    let report = run(&cfg, &api).await.unwrap();

    assert!(report.snapshot.unrostered.is_none());
    assert!(api.calls().iter().all(|c| !c.starts_with("stats/")));
    assert!(!dir.path().join(names::unrostered(LEAGUE_ID)).exists());
}

#[tokio::test]
async fn preseason_run_writes_no_matchups() {
    let dir = tempfile::tempdir().unwrap();
    let api = league_api().with("state/nfl", common::nfl_state(0, "pre"));

    let report = run(&config(dir.path()), &api).await.unwrap();

    assert!(report.view.weeks.is_empty());
    assert!(api.calls().iter().all(|c| !c.contains("/matchups/") && !c.starts_with("stats/")));
    assert!(!dir.path().join(names::matchups(LEAGUE_ID, 1)).exists());
    assert!(dir.path().join(names::view_model(LEAGUE_ID)).is_file());
}

#[tokio::test]
async fn league_without_drafts_has_no_draft_files() {
    let dir = tempfile::tempdir().unwrap();
    let api = league_api().with("league/111/drafts", serde_json::json!([]));

    let report = run(&config(dir.path()), &api).await.unwrap();

    assert!(report.view.draft.is_empty());
    assert!(!api.calls().iter().any(|c| c.starts_with("draft/")));
    assert!(!dir.path().join(names::draft_picks(LEAGUE_ID)).exists());
}

#[tokio::test]
async fn failed_fetch_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let api = league_api().without("league/111/matchups/2");

    let err = run(&config(dir.path()), &api).await.unwrap_err();

    assert!(matches!(err, PipelineError::RemoteResponse { .. }));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn failed_run_keeps_previous_view_model() {
    let dir = tempfile::tempdir().unwrap();
    let first = run(&config(dir.path()), &league_api()).await.unwrap();

    let api = league_api().without("players/nfl");
    assert!(run(&config(dir.path()), &api).await.is_err());

    let kept: ViewModel = OutputStore::new(dir.path()).read(&names::view_model(LEAGUE_ID)).unwrap();
    assert_eq!(kept, first.view);
}

#[tokio::test]
async fn unknown_league_is_a_response_error() {
    let dir = tempfile::tempdir().unwrap();
    let api = league_api().with("league/111", serde_json::Value::Null);

    let err = run(&config(dir.path()), &api).await.unwrap_err();
    match err {
        PipelineError::RemoteResponse { url, .. } => assert_eq!(url, "league/111"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unwritable_output_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").unwrap();

    let err = run(&config(&blocker), &league_api()).await.unwrap_err();
    assert!(matches!(err, PipelineError::Write { .. }));
}

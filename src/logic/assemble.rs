//! View-model assembly: joins league, users, rosters, players, matchups and draft picks.
//!
//! Pure: no I/O and no clock. Unresolvable ids become placeholder records, never errors
//! and never dropped entries.

use crate::logic::standings::rank_teams;
use crate::models::{
    DraftBoardEntry, DraftPick, League, LeagueHeader, Matchup, OwnerInfo, PlayerDb, PlayerRef, PlayerWeekLine,
    Roster, RosterId, RosterSlot, SeasonRecord, TeamEntry, TeamWeek, TeamWeekLines, User, ViewModel, WeekEntry,
    WeekMatchups, NOT_AVAILABLE,
};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Player lookup by id, with placeholder substitution for ids the database lacks.
///
/// Borrows the already-keyed player database, so each lookup is a single hash probe.
pub struct PlayerIndex<'a> {
    players: &'a PlayerDb,
}

impl<'a> PlayerIndex<'a> {
    pub fn new(players: &'a PlayerDb) -> Self {
        Self { players }
    }

    pub fn resolve(&self, player_id: &str) -> PlayerRef {
        let Some(player) = self.players.get(player_id) else {
            return PlayerRef::unknown(player_id);
        };
        let name = player.display_name();
        PlayerRef {
            player_id: player_id.to_string(),
            name: if name.is_empty() { player_id.to_string() } else { name },
            position: player.position.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            team: player.team.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            injury_status: player.injury_status.clone(),
            known: true,
        }
    }
}

/// One week's matchups keyed by roster, with that week's starter sets.
struct WeekIndex<'a> {
    week: u32,
    by_roster: HashMap<RosterId, &'a Matchup>,
    starters: HashMap<RosterId, HashSet<&'a str>>,
}

impl<'a> WeekIndex<'a> {
    fn new(week: &'a WeekMatchups) -> Self {
        let by_roster = week.matchups.iter().map(|m| (m.roster_id, m)).collect();
        let starters = week
            .matchups
            .iter()
            .map(|m| (m.roster_id, m.starter_ids().collect()))
            .collect();
        Self {
            week: week.week,
            by_roster,
            starters,
        }
    }

    /// The other roster sharing `matchup`'s matchup id, if any.
    fn opponent(&self, matchup: &Matchup) -> Option<&'a Matchup> {
        let id = matchup.matchup_id?;
        self.by_roster
            .values()
            .copied()
            .filter(|m| m.matchup_id == Some(id) && m.roster_id != matchup.roster_id)
            .min_by_key(|m| m.roster_id)
    }
}

/// Build the view model.
///
/// `matchups_by_week` may be in any order; weeks are emitted ascending.
pub fn assemble(
    league: &League,
    users: &[User],
    rosters: &[Roster],
    players: &PlayerDb,
    matchups_by_week: &[WeekMatchups],
    draft_picks: &[DraftPick],
) -> ViewModel {
    let index = PlayerIndex::new(players);
    let owners = resolve_owners(users, rosters);
    let owner_of = |roster_id: RosterId| -> OwnerInfo {
        owners
            .get(&roster_id)
            .cloned()
            .unwrap_or_else(|| OwnerInfo::unknown(None))
    };

    let mut weeks: Vec<&WeekMatchups> = matchups_by_week.iter().collect();
    weeks.sort_by_key(|w| w.week);
    let week_indexes: Vec<WeekIndex> = weeks.iter().map(|w| WeekIndex::new(w)).collect();

    let week_entries = week_indexes
        .iter()
        .map(|wi| build_week_entry(wi, &index, &owner_of))
        .collect();

    let mut teams: Vec<TeamEntry> = rosters
        .iter()
        .map(|roster| build_team_entry(roster, owner_of(roster.roster_id), &week_indexes, &index))
        .collect();
    rank_teams(&mut teams);

    let mut picks: Vec<&DraftPick> = draft_picks.iter().collect();
    picks.sort_by_key(|p| (p.pick_no, p.round));
    let draft = picks
        .into_iter()
        .map(|pick| DraftBoardEntry {
            round: pick.round,
            pick_no: pick.pick_no,
            roster_id: pick.roster_id,
            team_name: pick
                .roster_id
                .map(|id| owner_of(id).team_name)
                .unwrap_or_else(|| OwnerInfo::unknown(None).team_name),
            player: index.resolve(&pick.player_id),
        })
        .collect();

    ViewModel {
        league: LeagueHeader {
            league_id: league.league_id.clone(),
            name: league.name.clone(),
            season: league.season.clone(),
            status: league.status.clone(),
            current_week: weeks.last().map_or(0, |w| w.week),
            total_rosters: league.total_rosters,
        },
        teams,
        weeks: week_entries,
        draft,
        generated_at: None,
    }
}

/// Owner info per roster id. Rosters without a matching user get the placeholder owner.
fn resolve_owners(users: &[User], rosters: &[Roster]) -> HashMap<RosterId, OwnerInfo> {
    let users_by_id: HashMap<&str, &User> = users.iter().map(|u| (u.user_id.as_str(), u)).collect();
    rosters
        .iter()
        .map(|roster| {
            let owner = roster
                .owner_id
                .as_deref()
                .and_then(|id| users_by_id.get(id))
                .map(|user| OwnerInfo {
                    user_id: Some(user.user_id.clone()),
                    display_name: user.display_name.clone(),
                    team_name: user.team_name().to_string(),
                    known: true,
                })
                .unwrap_or_else(|| OwnerInfo::unknown(roster.owner_id.clone()));
            (roster.roster_id, owner)
        })
        .collect()
}

fn build_team_entry(roster: &Roster, owner: OwnerInfo, weeks: &[WeekIndex], index: &PlayerIndex) -> TeamEntry {
    let weekly: Vec<TeamWeek> = weeks
        .iter()
        .filter_map(|wi| {
            let matchup = wi.by_roster.get(&roster.roster_id)?;
            let opponent = wi.opponent(matchup);
            Some(TeamWeek {
                week: wi.week,
                matchup_id: matchup.matchup_id,
                points: matchup.points,
                starters_points: matchup.starters_total(),
                opponent_roster_id: opponent.map(|o| o.roster_id),
                opponent_points: opponent.map(|o| o.points),
            })
        })
        .collect();

    // Starter flags come from the latest week this roster played, never from `roster.starters`.
    let latest = weeks
        .iter()
        .rev()
        .find(|wi| wi.by_roster.contains_key(&roster.roster_id));
    let starters = latest.and_then(|wi| wi.starters.get(&roster.roster_id));
    let slots = roster
        .players
        .iter()
        .map(|id| RosterSlot {
            player: index.resolve(id),
            starter: starters.is_some_and(|s| s.contains(id.as_str())),
        })
        .collect();

    let s = &roster.settings;
    TeamEntry {
        rank: 0,
        roster_id: roster.roster_id,
        owner,
        record: SeasonRecord {
            wins: s.wins,
            losses: s.losses,
            ties: s.ties,
            points_for: s.points_for(),
            points_against: s.points_against(),
            waiver_position: s.waiver_position,
        },
        starters_week: latest.map(|wi| wi.week),
        roster: slots,
        weekly,
    }
}

fn build_week_entry(wi: &WeekIndex, index: &PlayerIndex, owner_of: &impl Fn(RosterId) -> OwnerInfo) -> WeekEntry {
    let mut matchups: Vec<&Matchup> = wi.by_roster.values().copied().collect();
    matchups.sort_by_key(|m| (m.matchup_id.is_none(), m.matchup_id, m.roster_id));

    let teams = matchups
        .into_iter()
        .map(|m| {
            let owner = owner_of(m.roster_id);
            TeamWeekLines {
                roster_id: m.roster_id,
                matchup_id: m.matchup_id,
                team_name: owner.team_name,
                display_name: owner.display_name,
                points: m.points,
                starters_points: m.starters_total(),
                players: player_lines(m, index),
            }
        })
        .collect();
    WeekEntry { week: wi.week, teams }
}

/// Every player the matchup mentions: starters in lineup order, then bench by points.
///
/// Players come from `starters`, `players` and `players_points`; a player only listed
/// without points scores 0.
fn player_lines(matchup: &Matchup, index: &PlayerIndex) -> Vec<PlayerWeekLine> {
    let points_of = |id: &str| matchup.players_points.get(id).copied().unwrap_or(0.0);

    let mut seen = HashSet::new();
    let mut lines: Vec<PlayerWeekLine> = matchup
        .starter_ids()
        .filter(|id| seen.insert(*id))
        .map(|id| PlayerWeekLine {
            player: index.resolve(id),
            points: points_of(id),
            starter: true,
        })
        .collect();

    let bench: BTreeSet<&str> = matchup
        .players
        .iter()
        .map(String::as_str)
        .chain(matchup.players_points.keys().map(String::as_str))
        .filter(|id| !seen.contains(id))
        .collect();
    let mut bench: Vec<PlayerWeekLine> = bench
        .into_iter()
        .map(|id| PlayerWeekLine {
            player: index.resolve(id),
            points: points_of(id),
            starter: false,
        })
        .collect();
    bench.sort_by(|a, b| {
        b.points
            .total_cmp(&a.points)
            .then_with(|| a.player.player_id.cmp(&b.player.player_id))
    });

    lines.append(&mut bench);
    lines
}

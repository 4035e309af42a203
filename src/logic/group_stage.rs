//! Group stage: round-robin scheduling and standings.

use crate::models::{
    EventSink, Fixture, Group, GroupStandingsTable, RoundType, Team, TeamId, Tournament,
    TournamentError, TournamentEvent, TournamentState,
};
use rand::Rng;

/// Every unordered pair of the group's teams, once.
///
/// The head team plays all remaining teams, then leaves the pool; repeat until one is left.
pub fn round_robin_fixtures(group: &Group) -> Vec<(TeamId, TeamId)> {
    let mut pairs = Vec::new();
    for (i, &home) in group.teams.iter().enumerate() {
        for &away in &group.teams[i + 1..] {
            pairs.push((home, away));
        }
    }
    pairs
}

/// Play every group's round robin. Each fixture is played exactly once and stored on its group.
pub fn play_group_stage<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
    events: &mut dyn EventSink,
) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::Setup {
        return Err(TournamentError::InvalidState);
    }
    if tournament.groups.iter().any(|g| !g.fixtures.is_empty()) {
        return Err(TournamentError::InvalidState);
    }

    for gi in 0..tournament.groups.len() {
        let name = tournament.groups[gi].name.clone();
        let pairs = round_robin_fixtures(&tournament.groups[gi]);
        log::info!("Group {} has started ({} matches)", name, pairs.len());
        events.emit(TournamentEvent::GroupStarted { group: name });

        let mut played = Vec::with_capacity(pairs.len());
        for (home_id, away_id) in pairs {
            let (home, away) = tournament.team_pair_mut(home_id, away_id)?;
            let mut fixture = Fixture::new(home_id, away_id, RoundType::GroupStage);
            fixture.outcome = Some(home.play_match(away, RoundType::GroupStage, rng, events));
            played.push(fixture);
        }
        tournament.groups[gi].fixtures = played;
    }
    Ok(())
}

/// Order `teams` by points, then settle ties between neighbours by their head-to-head result.
///
/// One pass over adjacent pairs only: a three-way tie is not resolved transitively.
pub fn rank_by_points_and_head_to_head(teams: &mut [&Team]) {
    teams.sort_by(|a, b| b.points.cmp(&a.points));
    for i in 0..teams.len().saturating_sub(1) {
        let (current, next) = (teams[i], teams[i + 1]);
        if current.points != next.points {
            continue;
        }
        let current_won = current.has_beaten(&next.name);
        let next_won = next.has_beaten(&current.name);
        if !current_won && next_won {
            teams.swap(i, i + 1);
        }
    }
}

/// Rank every group, record group ranks and placements, and retain the final tables.
pub fn compute_group_standings(
    tournament: &mut Tournament,
    events: &mut dyn EventSink,
) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::Setup {
        return Err(TournamentError::InvalidState);
    }

    let mut results = Vec::with_capacity(tournament.groups.len());
    let mut placements = Vec::with_capacity(tournament.groups.len());
    for group in &tournament.groups {
        let mut members = group
            .teams
            .iter()
            .map(|&id| tournament.require_team(id))
            .collect::<Result<Vec<_>, _>>()?;
        rank_by_points_and_head_to_head(&mut members);

        let table = GroupStandingsTable {
            group: group.name.clone(),
            rows: members.iter().map(|t| t.final_stats()).collect(),
        };
        placements.push(members.iter().map(|t| t.id).collect::<Vec<_>>());
        results.push(table);
    }

    for (group, order) in tournament.groups.iter_mut().zip(placements) {
        for (i, &id) in order.iter().enumerate() {
            if let Some(team) = tournament.teams.iter_mut().find(|t| t.id == id) {
                team.group_rank = Some(i as u32 + 1);
            }
        }
        group.placements = order;
    }

    for table in &results {
        log::info!(
            "Group {} final order: {}",
            table.group,
            table
                .rows
                .iter()
                .map(|r| r.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        events.emit(TournamentEvent::GroupStandings(table.clone()));
    }
    tournament.group_results = results;
    tournament.state = TournamentState::GroupStageDone;
    Ok(())
}

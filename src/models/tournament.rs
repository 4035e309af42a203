//! Tournament and TournamentState.

use crate::models::draw::Draw;
use crate::models::event::GroupStandingsTable;
use crate::models::game::MatchOutcome;
use crate::models::group::Group;
use crate::models::report::SimulationReport;
use crate::models::roster::Roster;
use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Team not found in the tournament.
    TeamNotFound(TeamId),
    /// A match needs two different teams.
    SameTeam(TeamId),
    /// Not enough group finishers to fill the bracket.
    NotEnoughTeams { required: usize, found: usize },
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::TeamNotFound(id) => write!(f, "Team not found: {}", id),
            TournamentError::SameTeam(_) => write!(f, "A team cannot play against itself"),
            TournamentError::NotEnoughTeams { required, found } => {
                write!(f, "Need {} teams for the bracket, found {}", required, found)
            }
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament. Phases only move forward.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Roster loaded; no match played.
    #[default]
    Setup,
    /// All group matches played and standings computed.
    GroupStageDone,
    /// Knockout buckets filled.
    Seeded,
    QuarterfinalsDone,
    SemifinalsDone,
    ThirdPlaceDone,
    /// Final played; medals decided.
    FinalDone,
}

/// Full tournament state: teams, groups, retained group results and the draw.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    /// Every team, in roster order. Groups and the draw refer to them by id.
    pub teams: Vec<Team>,
    pub groups: Vec<Group>,
    /// Final group tables, kept for the seeding tiebreak.
    pub group_results: Vec<GroupStandingsTable>,
    pub draw: Option<Draw>,
    pub state: TournamentState,
}

impl Tournament {
    /// Create an empty tournament in Setup state.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            ..Self::default()
        }
    }

    /// Build teams and groups from a roster. Still in Setup until the group stage is played.
    pub fn from_roster(roster: &Roster) -> Self {
        let mut tournament = Self::new();
        for group in &roster.groups {
            let mut ids = Vec::with_capacity(group.teams.len());
            for entry in &group.teams {
                let team = Team::new(&entry.name, &entry.code, entry.rank, &group.name);
                ids.push(team.id);
                tournament.teams.push(team);
            }
            tournament.groups.push(Group::new(&group.name, ids));
        }
        tournament
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Look up a team that must exist.
    pub(crate) fn require_team(&self, id: TeamId) -> Result<&Team, TournamentError> {
        self.team(id).ok_or(TournamentError::TeamNotFound(id))
    }

    /// Mutable references to two different teams at once.
    pub fn team_pair_mut(
        &mut self,
        a: TeamId,
        b: TeamId,
    ) -> Result<(&mut Team, &mut Team), TournamentError> {
        if a == b {
            return Err(TournamentError::SameTeam(a));
        }
        let ia = self
            .teams
            .iter()
            .position(|t| t.id == a)
            .ok_or(TournamentError::TeamNotFound(a))?;
        let ib = self
            .teams
            .iter()
            .position(|t| t.id == b)
            .ok_or(TournamentError::TeamNotFound(b))?;
        if ia < ib {
            let (left, right) = self.teams.split_at_mut(ib);
            Ok((&mut left[ia], &mut right[0]))
        } else {
            let (left, right) = self.teams.split_at_mut(ia);
            Ok((&mut right[0], &mut left[ib]))
        }
    }

    /// Apply a result without simulating it, exactly as a played match would be recorded.
    pub fn record_result(
        &mut self,
        winner: TeamId,
        loser: TeamId,
        winner_score: i32,
        loser_score: i32,
    ) -> Result<MatchOutcome, TournamentError> {
        let outcome = MatchOutcome::new(winner, loser, winner_score, loser_score);
        let (w, l) = self.team_pair_mut(winner, loser)?;
        w.apply_outcome(l, &outcome);
        Ok(outcome)
    }

    /// Snapshot of the run for serialization.
    pub fn report(&self, seed: Option<u64>) -> SimulationReport {
        SimulationReport::from_tournament(self, seed)
    }
}

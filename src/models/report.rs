//! Serializable end-of-run snapshot.

use crate::models::draw::{BracketSeed, MedalResult};
use crate::models::event::GroupStandingsTable;
use crate::models::game::Fixture;
use crate::models::team::TeamSummary;
use crate::models::tournament::{Tournament, TournamentId, TournamentState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationReport {
    pub tournament: TournamentId,
    pub generated_at: DateTime<Utc>,
    /// Seed of the random source, when one was given.
    pub seed: Option<u64>,
    pub state: TournamentState,
    /// Every team's record at the end of the run, in roster order.
    pub teams: Vec<TeamSummary>,
    pub groups: Vec<GroupStandingsTable>,
    pub seeds: Vec<BracketSeed>,
    pub knockout: Vec<Fixture>,
    pub medals: Option<MedalResult>,
}

impl SimulationReport {
    pub fn from_tournament(tournament: &Tournament, seed: Option<u64>) -> Self {
        let draw = tournament.draw.as_ref();
        Self {
            tournament: tournament.id,
            generated_at: Utc::now(),
            seed,
            state: tournament.state,
            teams: tournament.teams.iter().map(|t| t.summary()).collect(),
            groups: tournament.group_results.clone(),
            seeds: draw.map(|d| d.seeds.clone()).unwrap_or_default(),
            knockout: draw
                .map(|d| d.fixtures().cloned().collect())
                .unwrap_or_default(),
            medals: draw.and_then(|d| d.medals.clone()),
        }
    }
}

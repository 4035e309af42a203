//! Result events emitted by the simulation for whoever presents them.

use crate::models::draw::{BracketSeed, MedalResult, SeedBucket};
use crate::models::game::RoundType;
use crate::models::team::{TeamFinalStats, TeamInfo};
use serde::{Deserialize, Serialize};

/// One played match, as shown to a reader.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub round: RoundType,
    pub home: TeamInfo,
    pub away: TeamInfo,
    /// Name of the winning team.
    pub winner: String,
    pub winner_score: i32,
    pub loser_score: i32,
}

/// Final table of one group, rows in placement order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupStandingsTable {
    pub group: String,
    pub rows: Vec<TeamFinalStats>,
}

impl GroupStandingsTable {
    pub fn row(&self, name: &str) -> Option<&TeamFinalStats> {
        self.rows.iter().find(|r| r.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TournamentEvent {
    GroupStarted { group: String },
    MatchPlayed(MatchReport),
    GroupStandings(GroupStandingsTable),
    /// Buckets D/E/F/G and the seeds placed in them.
    DrawSeeded {
        buckets: Vec<SeedBucket>,
        seeds: Vec<BracketSeed>,
    },
    RoundStarted { round: RoundType },
    Medals(MedalResult),
}

/// Receives events as the tournament progresses.
pub trait EventSink {
    fn emit(&mut self, event: TournamentEvent);
}

/// Collects every event in order.
impl EventSink for Vec<TournamentEvent> {
    fn emit(&mut self, event: TournamentEvent) {
        self.push(event);
    }
}

/// Discards events.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl EventSink for Silent {
    fn emit(&mut self, _event: TournamentEvent) {}
}

//! Data structures for the tournament: teams, groups, fixtures, draw, events.

mod draw;
mod event;
mod game;
mod group;
mod report;
mod roster;
mod team;
mod tournament;

pub use draw::{BracketSeed, BucketLabel, Draw, MedalResult, Medalist, SeedBucket, BRACKET_SIZE};
pub use event::{EventSink, GroupStandingsTable, MatchReport, Silent, TournamentEvent};
pub use game::{Fixture, MatchId, MatchOutcome, RoundType};
pub use group::Group;
pub use report::SimulationReport;
pub use roster::{Roster, RosterEntry, RosterGroup};
pub use team::{
    MatchRecord, Team, TeamFinalStats, TeamId, TeamInfo, TeamSummary, LOSS_POINTS, WIN_POINTS,
};
pub use tournament::{Tournament, TournamentError, TournamentId, TournamentState};

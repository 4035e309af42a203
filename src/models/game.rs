//! Fixture (a scheduled or played match), MatchOutcome, and RoundType.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a fixture.
pub type MatchId = Uuid;

/// Phase of the tournament a fixture belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundType {
    GroupStage,
    Quarterfinal,
    Semifinal,
    ThirdPlace,
    Final,
}

impl RoundType {
    /// Heading used when a knockout round starts.
    pub fn title(self) -> &'static str {
        match self {
            RoundType::GroupStage => "Group Stage Matches:",
            RoundType::Quarterfinal => "Quarterfinals Matches:",
            RoundType::Semifinal => "Semifinal Matches:",
            RoundType::ThirdPlace => "Match for third place:",
            RoundType::Final => "Final Match:",
        }
    }
}

/// Result of one played match. Folded into both teams' records as soon as it exists.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: TeamId,
    pub loser: TeamId,
    pub winner_score: i32,
    pub loser_score: i32,
}

impl MatchOutcome {
    pub fn new(winner: TeamId, loser: TeamId, winner_score: i32, loser_score: i32) -> Self {
        Self {
            winner,
            loser,
            winner_score,
            loser_score,
        }
    }

    /// Winner's score minus loser's score (never zero for simulated matches).
    pub fn difference(&self) -> i32 {
        self.winner_score - self.loser_score
    }
}

/// A single match between two teams: `home` is the side whose `play_match` was called.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: MatchId,
    pub home: TeamId,
    pub away: TeamId,
    /// None if not yet played.
    pub outcome: Option<MatchOutcome>,
    pub round: RoundType,
}

impl Fixture {
    pub fn new(home: TeamId, away: TeamId, round: RoundType) -> Self {
        Self {
            id: Uuid::new_v4(),
            home,
            away,
            outcome: None,
            round,
        }
    }

    pub fn winner(&self) -> Option<TeamId> {
        self.outcome.map(|o| o.winner)
    }

    pub fn loser(&self) -> Option<TeamId> {
        self.outcome.map(|o| o.loser)
    }
}

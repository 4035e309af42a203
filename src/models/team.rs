//! Team, its match records, and the stats views handed to collaborators.

use crate::logic::win_model::{simulate_score, win_probability};
use crate::models::event::{EventSink, MatchReport, TournamentEvent};
use crate::models::game::{MatchOutcome, RoundType};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in fixtures, groups and the draw).
pub type TeamId = Uuid;

/// Tournament points for a win.
pub const WIN_POINTS: u32 = 3;
/// Tournament points for a loss (points-for-participation).
pub const LOSS_POINTS: u32 = 1;

/// One entry of a team's win or loss list, seen from that team's side.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub opponent: String,
    pub scored: i32,
    pub allowed: i32,
    /// `scored - allowed`: positive in the win list, negative in the loss list.
    pub difference: i32,
}

impl MatchRecord {
    pub fn new(opponent: impl Into<String>, scored: i32, allowed: i32) -> Self {
        Self {
            opponent: opponent.into(),
            scored,
            allowed,
            difference: scored - allowed,
        }
    }

    /// Score as "own-opponent", e.g. "87-80".
    pub fn score_line(&self) -> String {
        format!("{}-{}", self.scored, self.allowed)
    }
}

/// Identity of a team (for API / display).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub id: TeamId,
    pub name: String,
    pub code: String,
    pub rank: u32,
    pub group: String,
}

/// Running record of a team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub points: u32,
    pub group_rank: Option<u32>,
    pub draw_rank: Option<u32>,
}

/// One row of a group's final table.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamFinalStats {
    pub id: TeamId,
    pub name: String,
    pub code: String,
    pub wins: u32,
    pub losses: u32,
    pub points: u32,
    pub points_scored: i32,
    pub points_allowed: i32,
    pub difference: i32,
}

/// A team in the tournament. The same value is used from the group stage through the final.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// ISO country code.
    pub code: String,
    /// Strength rank; lower is stronger.
    pub rank: u32,
    /// Label of the group the team was drawn into.
    pub group: String,
    pub wins: Vec<MatchRecord>,
    pub losses: Vec<MatchRecord>,
    pub points: u32,
    /// Set once group standings are computed.
    pub group_rank: Option<u32>,
    /// Set once the knockout draw is seeded.
    pub draw_rank: Option<u32>,
}

impl Team {
    /// Create a new team with an empty record.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        rank: u32,
        group: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            code: code.into(),
            rank,
            group: group.into(),
            wins: Vec::new(),
            losses: Vec::new(),
            points: 0,
            group_rank: None,
            draw_rank: None,
        }
    }

    pub fn info(&self) -> TeamInfo {
        TeamInfo {
            id: self.id,
            name: self.name.clone(),
            code: self.code.clone(),
            rank: self.rank,
            group: self.group.clone(),
        }
    }

    pub fn summary(&self) -> TeamSummary {
        TeamSummary {
            name: self.name.clone(),
            wins: self.win_count(),
            losses: self.loss_count(),
            points: self.points,
            group_rank: self.group_rank,
            draw_rank: self.draw_rank,
        }
    }

    /// Totals over every recorded match.
    pub fn final_stats(&self) -> TeamFinalStats {
        let (points_scored, points_allowed, difference) = self
            .wins
            .iter()
            .chain(self.losses.iter())
            .fold((0, 0, 0), |(s, a, d), m| {
                (s + m.scored, a + m.allowed, d + m.difference)
            });
        TeamFinalStats {
            id: self.id,
            name: self.name.clone(),
            code: self.code.clone(),
            wins: self.win_count(),
            losses: self.loss_count(),
            points: self.points,
            points_scored,
            points_allowed,
            difference,
        }
    }

    pub fn win_count(&self) -> u32 {
        self.wins.len() as u32
    }

    pub fn loss_count(&self) -> u32 {
        self.losses.len() as u32
    }

    pub fn matches_played(&self) -> u32 {
        self.win_count() + self.loss_count()
    }

    /// Whether this team has a recorded win over the named opponent.
    pub fn has_beaten(&self, opponent: &str) -> bool {
        self.wins.iter().any(|m| m.opponent == opponent)
    }

    /// Record a win for this team.
    pub fn record_win(&mut self, opponent: &str, scored: i32, allowed: i32) {
        self.wins.push(MatchRecord::new(opponent, scored, allowed));
        self.points += WIN_POINTS;
    }

    /// Record a loss for this team.
    pub fn record_loss(&mut self, opponent: &str, scored: i32, allowed: i32) {
        self.losses.push(MatchRecord::new(opponent, scored, allowed));
        self.points += LOSS_POINTS;
    }

    /// Fold an outcome into both teams' records. `self` and `opponent` must be the two sides of it.
    pub fn apply_outcome(&mut self, opponent: &mut Team, outcome: &MatchOutcome) {
        let (winner, loser) = if outcome.winner == self.id {
            (self, opponent)
        } else {
            (opponent, self)
        };
        winner.record_win(&loser.name, outcome.winner_score, outcome.loser_score);
        loser.record_loss(&winner.name, outcome.loser_score, outcome.winner_score);
    }

    /// Simulate a match against `opponent`, record it on both teams and report it to `events`.
    ///
    /// `p` is always the weaker side's chance, and `self` takes the win when the draw falls
    /// below it, whichever of the two is actually weaker. The score is drawn independently.
    pub fn play_match<R: Rng + ?Sized>(
        &mut self,
        opponent: &mut Team,
        round: RoundType,
        rng: &mut R,
        events: &mut dyn EventSink,
    ) -> MatchOutcome {
        let (stronger, weaker) = if self.rank < opponent.rank {
            (self.rank, opponent.rank)
        } else {
            (opponent.rank, self.rank)
        };
        let p = win_probability(weaker, stronger);
        let r: f64 = rng.gen();
        let self_wins = r < p;

        let (winner_score, loser_score) = simulate_score(rng);
        let outcome = if self_wins {
            MatchOutcome::new(self.id, opponent.id, winner_score, loser_score)
        } else {
            MatchOutcome::new(opponent.id, self.id, winner_score, loser_score)
        };
        self.apply_outcome(opponent, &outcome);

        let winner_name = if self_wins { &self.name } else { &opponent.name };
        log::debug!(
            "{:?}: {} vs {} -> {} ({}:{}), p={:.4} r={:.4}",
            round,
            self.name,
            opponent.name,
            winner_name,
            winner_score,
            loser_score,
            p,
            r
        );
        events.emit(TournamentEvent::MatchPlayed(MatchReport {
            round,
            home: self.info(),
            away: opponent.info(),
            winner: winner_name.clone(),
            winner_score,
            loser_score,
        }));
        outcome
    }
}

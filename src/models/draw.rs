//! Knockout draw: seed buckets, bracket fixtures and medals.

use crate::models::game::Fixture;
use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};

/// Teams that enter the knockout bracket.
pub const BRACKET_SIZE: usize = 8;

/// Label of a seed bucket; buckets are filled in this order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum BucketLabel {
    D,
    E,
    F,
    G,
}

impl BucketLabel {
    pub const ALL: [BucketLabel; 4] = [BucketLabel::D, BucketLabel::E, BucketLabel::F, BucketLabel::G];
}

/// A seeded candidate for the knockout stage.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketSeed {
    /// 1-based draw rank.
    pub seed: u32,
    pub team: TeamId,
    pub name: String,
    pub code: String,
    pub group: String,
    pub points: u32,
    /// Points scored during the group stage (seeding tiebreak).
    pub points_scored: i32,
}

/// Two teams sharing a bucket, higher seed first.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeedBucket {
    pub label: BucketLabel,
    pub teams: [TeamId; 2],
}

/// One step on the podium.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Medalist {
    pub team: TeamId,
    pub name: String,
    pub code: String,
}

impl Medalist {
    pub fn from_team(team: &Team) -> Self {
        Self {
            team: team.id,
            name: team.name.clone(),
            code: team.code.clone(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MedalResult {
    pub gold: Medalist,
    pub silver: Medalist,
    pub bronze: Medalist,
}

/// Bracket state from seeding until the final has been played.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Draw {
    /// Every candidate in seed order (top three of each group).
    pub seeds: Vec<BracketSeed>,
    pub buckets: Vec<SeedBucket>,
    pub quarterfinals: Vec<Fixture>,
    /// Quarterfinal winners in quarterfinal order.
    pub semifinal_slots: Vec<TeamId>,
    pub semifinals: Vec<Fixture>,
    pub third_place: Option<Fixture>,
    #[serde(rename = "final")]
    pub final_match: Option<Fixture>,
    pub medals: Option<MedalResult>,
}

impl Draw {
    pub fn bucket(&self, label: BucketLabel) -> Option<&SeedBucket> {
        self.buckets.iter().find(|b| b.label == label)
    }

    /// Every knockout fixture in the order it was played.
    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.quarterfinals
            .iter()
            .chain(self.semifinals.iter())
            .chain(self.third_place.iter())
            .chain(self.final_match.iter())
    }

    /// Ids of the teams in the buckets, bucket by bucket.
    pub fn bracket_teams(&self) -> Vec<TeamId> {
        self.buckets.iter().flat_map(|b| b.teams).collect()
    }
}

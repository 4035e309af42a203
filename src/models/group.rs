//! Group: a pool of teams that play each other once.

use crate::models::game::Fixture;
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    /// Member ids in roster order.
    pub teams: Vec<TeamId>,
    /// Member ids in final order; empty until standings are computed.
    pub placements: Vec<TeamId>,
    /// Group-stage fixtures in the order they were played.
    pub fixtures: Vec<Fixture>,
}

impl Group {
    pub fn new(name: impl Into<String>, teams: Vec<TeamId>) -> Self {
        Self {
            name: name.into(),
            teams,
            placements: Vec::new(),
            fixtures: Vec::new(),
        }
    }

    /// Team at 1-based `place`, if standings are computed and the group is large enough.
    pub fn placed(&self, place: usize) -> Option<TeamId> {
        place
            .checked_sub(1)
            .and_then(|i| self.placements.get(i))
            .copied()
    }

    pub fn first(&self) -> Option<TeamId> {
        self.placed(1)
    }

    pub fn second(&self) -> Option<TeamId> {
        self.placed(2)
    }

    pub fn third(&self) -> Option<TeamId> {
        self.placed(3)
    }

    pub fn fourth(&self) -> Option<TeamId> {
        self.placed(4)
    }
}

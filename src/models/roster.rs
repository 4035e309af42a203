//! Roster: the teams of each group as supplied by the loader.

use serde::{Deserialize, Serialize};

/// One team record of the roster document.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "Team")]
    pub name: String,
    #[serde(rename = "ISOCode")]
    pub code: String,
    #[serde(rename = "FIBARanking")]
    pub rank: u32,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, code: impl Into<String>, rank: u32) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            rank,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RosterGroup {
    pub name: String,
    pub teams: Vec<RosterEntry>,
}

/// Groups in document order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub groups: Vec<RosterGroup>,
}

impl Roster {
    pub fn team_count(&self) -> usize {
        self.groups.iter().map(|g| g.teams.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

//! Roster loading: JSON (`{"A": [{"Team", "ISOCode", "FIBARanking"}, ...], ...}`) or CSV
//! (`Group,Team,ISOCode,FIBARanking`).

use crate::models::{Roster, RosterEntry, RosterGroup};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Errors that can occur while loading a roster.
#[derive(Debug)]
pub enum RosterError {
    /// The roster file could not be read.
    Io(std::io::Error),
    /// Malformed JSON, or a team record missing a field.
    Json(serde_json::Error),
    /// Malformed CSV, or a row missing a field.
    Csv(csv::Error),
    /// A team record with an unusable value.
    InvalidTeam { group: String, reason: String },
    /// Team names must be unique across the roster.
    DuplicateTeam(String),
    /// No groups in the document.
    Empty,
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::Io(e) => write!(f, "Unable to read roster: {}", e),
            RosterError::Json(e) => write!(f, "Unable to parse JSON: {}", e),
            RosterError::Csv(e) => write!(f, "Unable to parse CSV: {}", e),
            RosterError::InvalidTeam { group, reason } => {
                write!(f, "Invalid team in group {}: {}", group, reason)
            }
            RosterError::DuplicateTeam(name) => write!(f, "Team listed more than once: {}", name),
            RosterError::Empty => write!(f, "Roster has no groups"),
        }
    }
}

impl std::error::Error for RosterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterError::Io(e) => Some(e),
            RosterError::Json(e) => Some(e),
            RosterError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RosterError {
    fn from(e: std::io::Error) -> Self {
        RosterError::Io(e)
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(e: serde_json::Error) -> Self {
        RosterError::Json(e)
    }
}

impl From<csv::Error> for RosterError {
    fn from(e: csv::Error) -> Self {
        RosterError::Csv(e)
    }
}

/// Parse a JSON roster. Groups keep document order.
pub fn parse_json_roster(input: &str) -> Result<Roster, RosterError> {
    let document: serde_json::Map<String, serde_json::Value> = serde_json::from_str(input)?;
    let mut groups = Vec::with_capacity(document.len());
    for (name, value) in document {
        let teams: Vec<RosterEntry> = serde_json::from_value(value)?;
        groups.push(RosterGroup { name, teams });
    }
    validate(Roster { groups })
}

#[derive(Deserialize)]
struct CsvRow {
    #[serde(rename = "Group")]
    group: String,
    #[serde(rename = "Team")]
    name: String,
    #[serde(rename = "ISOCode")]
    code: String,
    #[serde(rename = "FIBARanking")]
    rank: u32,
}

/// Parse a CSV roster. Groups appear in the order their label is first seen.
pub fn parse_csv_roster<R: std::io::Read>(reader: R) -> Result<Roster, RosterError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut groups: Vec<RosterGroup> = Vec::new();
    for row in rdr.deserialize::<CsvRow>() {
        let CsvRow {
            group,
            name,
            code,
            rank,
        } = row?;
        let entry = RosterEntry::new(name, code, rank);
        match groups.iter_mut().find(|g| g.name == group) {
            Some(g) => g.teams.push(entry),
            None => groups.push(RosterGroup {
                name: group,
                teams: vec![entry],
            }),
        }
    }
    validate(Roster { groups })
}

/// Parse roster text, picking the format from the file extension (`.csv`, otherwise JSON).
pub fn parse_roster(path: &Path, contents: &str) -> Result<Roster, RosterError> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        parse_csv_roster(contents.as_bytes())
    } else {
        parse_json_roster(contents)
    }
}

/// Read and parse a roster file.
pub async fn load_roster(path: impl AsRef<Path>) -> Result<Roster, RosterError> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path).await?;
    let roster = parse_roster(path, &contents)?;
    log::info!(
        "Loaded {} teams in {} groups from {}",
        roster.team_count(),
        roster.groups.len(),
        path.display()
    );
    Ok(roster)
}

fn validate(roster: Roster) -> Result<Roster, RosterError> {
    if roster.is_empty() {
        return Err(RosterError::Empty);
    }
    let mut seen = HashSet::new();
    for group in &roster.groups {
        for entry in &group.teams {
            let invalid = |reason: &str| RosterError::InvalidTeam {
                group: group.name.clone(),
                reason: reason.to_string(),
            };
            if entry.name.trim().is_empty() {
                return Err(invalid("missing team name"));
            }
            if entry.code.trim().is_empty() {
                return Err(invalid(&format!("{} has no country code", entry.name)));
            }
            if !seen.insert(entry.name.clone()) {
                return Err(RosterError::DuplicateTeam(entry.name.clone()));
            }
        }
    }
    Ok(roster)
}

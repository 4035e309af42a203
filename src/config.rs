//! Run configuration from environment variables: ROSTER_PATH, SIM_SEED, REPORT_PATH.

use std::path::PathBuf;

fn default_roster_path() -> PathBuf {
    PathBuf::from("groups.json")
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SimulationConfig {
    /// Roster file; `.csv` is read as CSV, anything else as JSON.
    pub roster_path: PathBuf,
    /// Seed for the random source; entropy when absent.
    pub seed: Option<u64>,
    /// Where to write the JSON report, if anywhere.
    pub report_path: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            roster_path: default_roster_path(),
            seed: None,
            report_path: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset; an unparsable seed is ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let seed = get("SIM_SEED").and_then(|s| match s.trim().parse() {
            Ok(seed) => Some(seed),
            Err(_) => {
                log::warn!("Ignoring SIM_SEED={:?}: not an unsigned integer", s);
                None
            }
        });
        Self {
            roster_path: get("ROSTER_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(default_roster_path),
            seed,
            report_path: get("REPORT_PATH").map(PathBuf::from),
        }
    }
}

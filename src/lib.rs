//! Basketball tournament simulator: library with models and business logic.

pub mod config;
pub mod logic;
pub mod models;

pub use config::SimulationConfig;
pub use logic::{
    compute_group_standings, load_roster, parse_csv_roster, parse_json_roster, parse_roster,
    play_final, play_group_stage, play_quarterfinals, play_semifinals, play_third_place,
    quarterfinal_pairings, rank_by_points_and_head_to_head, rank_seeds, resolve_score,
    round_robin_fixtures, run_knockout, seed_draw, simulate_score, simulate_tournament,
    unplaced_bracket_teams, win_probability, win_probability_with_base, RosterError,
};
pub use models::{
    BracketSeed, BucketLabel, Draw, EventSink, Fixture, Group, GroupStandingsTable, MatchId,
    MatchOutcome, MatchRecord, MatchReport, MedalResult, Medalist, Roster, RosterEntry,
    RosterGroup, RoundType, SeedBucket, Silent, SimulationReport, Team, TeamFinalStats, TeamId,
    TeamInfo, TeamSummary, Tournament, TournamentError, TournamentEvent, TournamentId,
    TournamentState, BRACKET_SIZE, LOSS_POINTS, WIN_POINTS,
};

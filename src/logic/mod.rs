//! Tournament logic: win model, group stage, draw, roster loading.

pub mod draw;
pub mod group_stage;
pub mod roster;
mod simulation;
pub mod win_model;

pub use draw::{
    play_final, play_quarterfinals, play_semifinals, play_third_place, quarterfinal_pairings,
    rank_seeds, run_knockout, seed_draw, unplaced_bracket_teams,
};
pub use group_stage::{
    compute_group_standings, play_group_stage, rank_by_points_and_head_to_head,
    round_robin_fixtures,
};
pub use roster::{load_roster, parse_csv_roster, parse_json_roster, parse_roster, RosterError};
pub use simulation::simulate_tournament;
pub use win_model::{resolve_score, simulate_score, win_probability, win_probability_with_base};

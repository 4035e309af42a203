//! Whole-tournament run: group stage, standings, seeding and knockout in one call.

use crate::logic::draw::{run_knockout, seed_draw};
use crate::logic::group_stage::{compute_group_standings, play_group_stage};
use crate::models::{EventSink, MedalResult, Tournament, TournamentError};
use rand::Rng;

/// Run a freshly built tournament to the medal table.
pub fn simulate_tournament<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
    events: &mut dyn EventSink,
) -> Result<MedalResult, TournamentError> {
    log::info!(
        "Simulating tournament {} ({} teams, {} groups)",
        tournament.id,
        tournament.teams.len(),
        tournament.groups.len()
    );
    play_group_stage(tournament, rng, events)?;
    compute_group_standings(tournament, events)?;
    seed_draw(tournament, events)?;
    run_knockout(tournament, rng, events)
}

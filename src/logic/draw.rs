//! Knockout stage: seeding the draw from group finishers, then quarterfinals, semifinals,
//! the third-place match and the final.

use crate::models::{
    BracketSeed, BucketLabel, Draw, EventSink, Fixture, MedalResult, Medalist, RoundType,
    SeedBucket, Team, TeamId, Tournament, TournamentError, TournamentEvent, TournamentState,
    BRACKET_SIZE,
};
use rand::Rng;

/// Group places that qualify for the draw.
const QUALIFYING_PLACES: usize = 3;

/// Group-stage points scored, looked up in the retained group tables (0 if absent).
fn group_points_scored(tournament: &Tournament, name: &str) -> i32 {
    tournament
        .group_results
        .iter()
        .find_map(|table| table.row(name))
        .map_or(0, |row| row.points_scored)
}

/// Order candidates by points, then by group-stage points scored, and number the seeds.
///
/// The sort is stable: a full tie keeps the place-major pooling order.
pub fn rank_seeds(candidates: &mut [BracketSeed]) {
    candidates.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.points_scored.cmp(&a.points_scored))
    });
    for (i, c) in candidates.iter_mut().enumerate() {
        c.seed = i as u32 + 1;
    }
}

/// Build the draw: pool the top three of every group, rank them, and fill buckets D/E/F/G
/// two seeds at a time.
pub fn seed_draw(
    tournament: &mut Tournament,
    events: &mut dyn EventSink,
) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::GroupStageDone {
        return Err(TournamentError::InvalidState);
    }

    // All first-placed teams, then all seconds, then all thirds.
    let mut candidates = Vec::new();
    for place in 1..=QUALIFYING_PLACES {
        for group in &tournament.groups {
            let Some(id) = group.placed(place) else {
                continue;
            };
            let team = tournament.require_team(id)?;
            candidates.push(BracketSeed {
                seed: 0,
                team: team.id,
                name: team.name.clone(),
                code: team.code.clone(),
                group: team.group.clone(),
                points: team.points,
                points_scored: group_points_scored(tournament, &team.name),
            });
        }
    }
    if candidates.len() < BRACKET_SIZE {
        return Err(TournamentError::NotEnoughTeams {
            required: BRACKET_SIZE,
            found: candidates.len(),
        });
    }

    rank_seeds(&mut candidates);
    for seed in &candidates {
        if let Some(team) = tournament.team_mut(seed.team) {
            team.draw_rank = Some(seed.seed);
        }
    }

    let buckets: Vec<SeedBucket> = BucketLabel::ALL
        .iter()
        .zip(candidates[..BRACKET_SIZE].chunks_exact(2))
        .map(|(&label, pair)| SeedBucket {
            label,
            teams: [pair[0].team, pair[1].team],
        })
        .collect();
    for seed in &candidates[..BRACKET_SIZE] {
        log::info!("Seed {}: {} ({}, {} pts)", seed.seed, seed.name, seed.group, seed.points);
    }
    events.emit(TournamentEvent::DrawSeeded {
        buckets: buckets.clone(),
        seeds: candidates[..BRACKET_SIZE].to_vec(),
    });

    tournament.draw = Some(Draw {
        seeds: candidates,
        buckets,
        ..Draw::default()
    });
    tournament.state = TournamentState::Seeded;
    Ok(())
}

/// Quarterfinal pairings for one orientation of the cross draw.
///
/// `flip == false`: D0-G1, D1-G0, E0-F1, E1-F0. `flip == true`: D1-G0, D0-G1, E1-F0, E0-F1.
pub fn quarterfinal_pairings(buckets: &[SeedBucket], flip: bool) -> Vec<(TeamId, TeamId)> {
    let (a, b) = if flip { (1, 0) } else { (0, 1) };
    let find = |label: BucketLabel| buckets.iter().find(|x| x.label == label).map(|x| x.teams);
    match (
        find(BucketLabel::D),
        find(BucketLabel::E),
        find(BucketLabel::F),
        find(BucketLabel::G),
    ) {
        (Some(d), Some(e), Some(f), Some(g)) => vec![
            (d[a], g[b]),
            (d[b], g[a]),
            (e[a], f[b]),
            (e[b], f[a]),
        ],
        _ => Vec::new(),
    }
}

/// Play one knockout fixture between two teams of the tournament.
fn play_knockout<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    home: TeamId,
    away: TeamId,
    round: RoundType,
    rng: &mut R,
    events: &mut dyn EventSink,
) -> Result<Fixture, TournamentError> {
    let (h, a) = tournament.team_pair_mut(home, away)?;
    let mut fixture = Fixture::new(home, away, round);
    fixture.outcome = Some(h.play_match(a, round, rng, events));
    Ok(fixture)
}

fn draw_mut(tournament: &mut Tournament) -> Result<&mut Draw, TournamentError> {
    tournament.draw.as_mut().ok_or(TournamentError::InvalidState)
}

/// Winner and loser of a played fixture.
fn result_of(fixture: &Fixture) -> Result<(TeamId, TeamId), TournamentError> {
    fixture
        .outcome
        .map(|o| (o.winner, o.loser))
        .ok_or(TournamentError::InvalidState)
}

/// One coin flip decides the cross orientation for all four quarterfinals.
/// Winners fill the semifinal slots in quarterfinal order.
pub fn play_quarterfinals<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
    events: &mut dyn EventSink,
) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::Seeded {
        return Err(TournamentError::InvalidState);
    }
    let flip = rng.gen_bool(0.5);
    let pairings = quarterfinal_pairings(&draw_mut(tournament)?.buckets, flip);
    if pairings.len() != 4 {
        return Err(TournamentError::InvalidState);
    }

    log::info!("Quarterfinals (flipped orientation: {})", flip);
    events.emit(TournamentEvent::RoundStarted {
        round: RoundType::Quarterfinal,
    });
    let mut fixtures = Vec::with_capacity(pairings.len());
    for (home, away) in pairings {
        fixtures.push(play_knockout(
            tournament,
            home,
            away,
            RoundType::Quarterfinal,
            rng,
            events,
        )?);
    }

    let draw = draw_mut(tournament)?;
    draw.semifinal_slots = fixtures
        .iter()
        .map(|f| result_of(f).map(|(w, _)| w))
        .collect::<Result<_, _>>()?;
    draw.quarterfinals = fixtures;
    tournament.state = TournamentState::QuarterfinalsDone;
    Ok(())
}

/// Slot 0 plays slot 3 and slot 1 plays slot 2; no reseeding.
pub fn play_semifinals<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
    events: &mut dyn EventSink,
) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::QuarterfinalsDone {
        return Err(TournamentError::InvalidState);
    }
    let slots = draw_mut(tournament)?.semifinal_slots.clone();
    if slots.len() != 4 {
        return Err(TournamentError::InvalidState);
    }

    events.emit(TournamentEvent::RoundStarted {
        round: RoundType::Semifinal,
    });
    let first = play_knockout(tournament, slots[0], slots[3], RoundType::Semifinal, rng, events)?;
    let second = play_knockout(tournament, slots[1], slots[2], RoundType::Semifinal, rng, events)?;

    draw_mut(tournament)?.semifinals = vec![first, second];
    tournament.state = TournamentState::SemifinalsDone;
    Ok(())
}

/// Semifinal losers play for bronze.
pub fn play_third_place<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
    events: &mut dyn EventSink,
) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::SemifinalsDone {
        return Err(TournamentError::InvalidState);
    }
    let semis = draw_mut(tournament)?.semifinals.clone();
    let [first, second] = semis.as_slice() else {
        return Err(TournamentError::InvalidState);
    };
    let (_, home) = result_of(first)?;
    let (_, away) = result_of(second)?;

    events.emit(TournamentEvent::RoundStarted {
        round: RoundType::ThirdPlace,
    });
    let fixture = play_knockout(tournament, home, away, RoundType::ThirdPlace, rng, events)?;
    draw_mut(tournament)?.third_place = Some(fixture);
    tournament.state = TournamentState::ThirdPlaceDone;
    Ok(())
}

/// Semifinal winners play for gold. Settles the medal table.
pub fn play_final<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
    events: &mut dyn EventSink,
) -> Result<MedalResult, TournamentError> {
    if tournament.state != TournamentState::ThirdPlaceDone {
        return Err(TournamentError::InvalidState);
    }
    let draw = draw_mut(tournament)?;
    let [first, second] = draw.semifinals.as_slice() else {
        return Err(TournamentError::InvalidState);
    };
    let (home, _) = result_of(first)?;
    let (away, _) = result_of(second)?;
    let (bronze, _) = draw
        .third_place
        .as_ref()
        .ok_or(TournamentError::InvalidState)
        .and_then(result_of)?;

    events.emit(TournamentEvent::RoundStarted {
        round: RoundType::Final,
    });
    let fixture = play_knockout(tournament, home, away, RoundType::Final, rng, events)?;
    let (gold, silver) = result_of(&fixture)?;

    let medalist = |id| tournament.require_team(id).map(Medalist::from_team);
    let medals = MedalResult {
        gold: medalist(gold)?,
        silver: medalist(silver)?,
        bronze: medalist(bronze)?,
    };
    log::info!(
        "Medals: gold {}, silver {}, bronze {}",
        medals.gold.name,
        medals.silver.name,
        medals.bronze.name
    );
    events.emit(TournamentEvent::Medals(medals.clone()));

    let draw = draw_mut(tournament)?;
    draw.final_match = Some(fixture);
    draw.medals = Some(medals.clone());
    tournament.state = TournamentState::FinalDone;
    Ok(medals)
}

/// Play every remaining knockout round from a seeded draw.
pub fn run_knockout<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
    events: &mut dyn EventSink,
) -> Result<MedalResult, TournamentError> {
    play_quarterfinals(tournament, rng, events)?;
    play_semifinals(tournament, rng, events)?;
    play_third_place(tournament, rng, events)?;
    play_final(tournament, rng, events)
}

/// Teams of the draw that did not reach the podium.
pub fn unplaced_bracket_teams<'a>(tournament: &'a Tournament) -> Vec<&'a Team> {
    let Some(draw) = tournament.draw.as_ref() else {
        return Vec::new();
    };
    let medalled: Vec<TeamId> = draw
        .medals
        .iter()
        .flat_map(|m| [m.gold.team, m.silver.team, m.bronze.team])
        .collect();
    draw.bracket_teams()
        .into_iter()
        .filter(|id| !medalled.contains(id))
        .filter_map(|id| tournament.team(id))
        .collect()
}

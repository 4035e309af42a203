//! Integration tests for seeding the draw and running the knockout bracket.

use hoops_tournament::{
    compute_group_standings, play_final, play_quarterfinals, play_semifinals, play_third_place,
    quarterfinal_pairings, rank_seeds, run_knockout, seed_draw, unplaced_bracket_teams,
    BracketSeed, BucketLabel, RoundType, Roster, RosterEntry, RosterGroup, Silent, TeamId,
    Tournament, TournamentError, TournamentEvent, TournamentState, BRACKET_SIZE,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

const GROUPS: [&str; 4] = ["A", "B", "C", "D"];
/// Winning score of each group's first-placed team, for the points-scored tiebreak.
const LEADER_SCORES: [i32; 4] = [70, 80, 65, 60];

fn roster(groups: &[&str]) -> Roster {
    Roster {
        groups: groups
            .iter()
            .enumerate()
            .map(|(gi, name)| RosterGroup {
                name: name.to_string(),
                teams: (1..=4)
                    .map(|i| RosterEntry::new(format!("{name}{i}"), format!("C{name}{i}"), (gi * 4 + i) as u32))
                    .collect(),
            })
            .collect(),
    }
}

fn id(t: &Tournament, name: &str) -> TeamId {
    t.team_by_name(name).unwrap().id
}

fn name(t: &Tournament, id: TeamId) -> String {
    t.team(id).unwrap().name.clone()
}

fn scripted_group_stage(groups: &[&str]) -> Tournament {
    scripted_with_leader_scores(groups, &LEADER_SCORES)
}

/// In every group X: X1 > X2 > X3 > X4, with X1 winning each game by its group's leader score.
fn scripted_with_leader_scores(groups: &[&str], leader_scores: &[i32]) -> Tournament {
    let mut t = Tournament::from_roster(&roster(groups));
    for (gi, g) in groups.iter().enumerate() {
        let lead = leader_scores[gi % leader_scores.len()];
        for (w, l, ws, ls) in [
            (1, 2, lead, 50),
            (1, 3, lead, 50),
            (1, 4, lead, 50),
            (2, 3, 70, 60),
            (2, 4, 70, 60),
            (3, 4, 70, 60),
        ] {
            let (w, l) = (id(&t, &format!("{g}{w}")), id(&t, &format!("{g}{l}")));
            t.record_result(w, l, ws, ls).unwrap();
        }
    }
    compute_group_standings(&mut t, &mut Silent).unwrap();
    t
}

fn seeded() -> Tournament {
    let mut t = scripted_group_stage(&GROUPS);
    seed_draw(&mut t, &mut Silent).unwrap();
    t
}

fn bucket_names(t: &Tournament, label: BucketLabel) -> [String; 2] {
    let bucket = t.draw.as_ref().unwrap().bucket(label).unwrap();
    [name(t, bucket.teams[0]), name(t, bucket.teams[1])]
}

fn seed(points: u32, points_scored: i32) -> BracketSeed {
    let team = Uuid::new_v4();
    BracketSeed {
        seed: 0,
        team,
        name: team.to_string(),
        code: String::new(),
        group: String::new(),
        points,
        points_scored,
    }
}

#[test]
fn seeding_fills_buckets_in_seed_order() {
    let t = seeded();
    assert_eq!(t.state, TournamentState::Seeded);

    // Leaders tie on 9 points and are ordered by points scored: B1 240, A1 210, C1 195, D1 180.
    assert_eq!(bucket_names(&t, BucketLabel::D), ["B1", "A1"]);
    assert_eq!(bucket_names(&t, BucketLabel::E), ["C1", "D1"]);
    assert_eq!(bucket_names(&t, BucketLabel::F), ["A2", "B2"]);
    assert_eq!(bucket_names(&t, BucketLabel::G), ["C2", "D2"]);

    let draw = t.draw.as_ref().unwrap();
    assert_eq!(draw.seeds.len(), 12);
    assert_eq!(draw.bracket_teams().len(), BRACKET_SIZE);
    let scored: Vec<i32> = draw.seeds[..4].iter().map(|s| s.points_scored).collect();
    assert_eq!(scored, [240, 210, 195, 180]);

    assert_eq!(t.team_by_name("B1").unwrap().draw_rank, Some(1));
    assert_eq!(t.team_by_name("A1").unwrap().draw_rank, Some(2));
    assert_eq!(t.team_by_name("D3").unwrap().draw_rank, Some(12));
    assert_eq!(t.team_by_name("A4").unwrap().draw_rank, None);
}

#[test]
fn seeding_orders_a_four_way_tie_by_points_scored() {
    // Leaders on 9 points with 180/210/240/270 scored; seconds and thirds fully tied.
    let mut t = scripted_with_leader_scores(&GROUPS, &[60, 70, 80, 90]);
    seed_draw(&mut t, &mut Silent).unwrap();

    assert_eq!(bucket_names(&t, BucketLabel::D), ["D1", "C1"]);
    assert_eq!(bucket_names(&t, BucketLabel::E), ["B1", "A1"]);
    assert_eq!(bucket_names(&t, BucketLabel::F), ["A2", "B2"]);
    assert_eq!(bucket_names(&t, BucketLabel::G), ["C2", "D2"]);
    let scored: Vec<i32> = t.draw.as_ref().unwrap().seeds[..4]
        .iter()
        .map(|s| s.points_scored)
        .collect();
    assert_eq!(scored, [270, 240, 210, 180]);
}

#[test]
fn seeding_emits_buckets_with_their_seeds() {
    let mut t = scripted_group_stage(&GROUPS);
    let mut events: Vec<TournamentEvent> = Vec::new();
    seed_draw(&mut t, &mut events).unwrap();
    match events.as_slice() {
        [TournamentEvent::DrawSeeded { buckets, seeds }] => {
            assert_eq!(buckets.len(), 4);
            assert_eq!(seeds.len(), BRACKET_SIZE);
            assert_eq!(buckets[0].label, BucketLabel::D);
            assert_eq!(buckets[0].teams, [seeds[0].team, seeds[1].team]);
        }
        other => panic!("unexpected events: {other:?}"),
    }
}

#[test]
fn rank_seeds_prefers_points_then_points_scored() {
    let mut seeds = vec![seed(7, 100), seed(9, 150), seed(9, 200), seed(7, 120)];
    let expected: Vec<TeamId> = [2, 1, 3, 0].iter().map(|&i| seeds[i].team).collect();
    rank_seeds(&mut seeds);
    let order: Vec<TeamId> = seeds.iter().map(|s| s.team).collect();
    assert_eq!(order, expected);
    let ranks: Vec<u32> = seeds.iter().map(|s| s.seed).collect();
    assert_eq!(ranks, [1, 2, 3, 4]);
}

#[test]
fn rank_seeds_resolves_three_way_tie_fully() {
    let mut seeds = vec![seed(9, 100), seed(9, 150), seed(9, 200)];
    rank_seeds(&mut seeds);
    let scored: Vec<i32> = seeds.iter().map(|s| s.points_scored).collect();
    assert_eq!(scored, [200, 150, 100]);
}

#[test]
fn rank_seeds_keeps_order_on_full_tie() {
    let mut seeds = vec![seed(9, 150), seed(9, 150)];
    let expected: Vec<TeamId> = seeds.iter().map(|s| s.team).collect();
    rank_seeds(&mut seeds);
    let order: Vec<TeamId> = seeds.iter().map(|s| s.team).collect();
    assert_eq!(order, expected);
}

#[test]
fn seeding_needs_eight_finishers() {
    let mut t = scripted_group_stage(&["A", "B"]);
    assert_eq!(
        seed_draw(&mut t, &mut Silent),
        Err(TournamentError::NotEnoughTeams {
            required: 8,
            found: 6
        })
    );
}

#[test]
fn seeding_requires_standings() {
    let mut t = Tournament::from_roster(&roster(&GROUPS));
    assert_eq!(seed_draw(&mut t, &mut Silent), Err(TournamentError::InvalidState));
}

#[test]
fn quarterfinal_orientations_mirror_each_other() {
    let t = seeded();
    let buckets = &t.draw.as_ref().unwrap().buckets;
    let names = |pairs: Vec<(TeamId, TeamId)>| -> Vec<(String, String)> {
        pairs.into_iter().map(|(a, b)| (name(&t, a), name(&t, b))).collect()
    };
    let pair = |a: &str, b: &str| (a.to_string(), b.to_string());

    assert_eq!(
        names(quarterfinal_pairings(buckets, false)),
        [pair("B1", "D2"), pair("A1", "C2"), pair("C1", "B2"), pair("D1", "A2")]
    );
    assert_eq!(
        names(quarterfinal_pairings(buckets, true)),
        [pair("A1", "C2"), pair("B1", "D2"), pair("D1", "A2"), pair("C1", "B2")]
    );
}

#[test]
fn knockout_rounds_must_run_in_order() {
    let mut t = seeded();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    assert_eq!(
        play_semifinals(&mut t, &mut rng, &mut Silent),
        Err(TournamentError::InvalidState)
    );
    play_quarterfinals(&mut t, &mut rng, &mut Silent).unwrap();
    assert_eq!(
        play_quarterfinals(&mut t, &mut rng, &mut Silent),
        Err(TournamentError::InvalidState)
    );
    assert!(play_final(&mut t, &mut rng, &mut Silent).is_err());
    play_semifinals(&mut t, &mut rng, &mut Silent).unwrap();
    play_third_place(&mut t, &mut rng, &mut Silent).unwrap();
    play_final(&mut t, &mut rng, &mut Silent).unwrap();
    assert_eq!(t.state, TournamentState::FinalDone);
}

#[test]
fn knockout_advances_only_winners() {
    let mut orientations = [false; 2];
    for s in 0..20 {
        let mut t = seeded();
        let mut rng = ChaCha8Rng::seed_from_u64(s);
        let medals = run_knockout(&mut t, &mut rng, &mut Silent).unwrap();
        let draw = t.draw.as_ref().unwrap();

        let qf: Vec<(TeamId, TeamId)> = draw.quarterfinals.iter().map(|f| (f.home, f.away)).collect();
        if qf == quarterfinal_pairings(&draw.buckets, false) {
            orientations[0] = true;
        } else if qf == quarterfinal_pairings(&draw.buckets, true) {
            orientations[1] = true;
        } else {
            panic!("quarterfinals match neither orientation: {qf:?}");
        }
        let qf_winners: Vec<TeamId> = draw.quarterfinals.iter().map(|f| f.winner().unwrap()).collect();
        assert_eq!(draw.semifinal_slots, qf_winners);

        let slots = &draw.semifinal_slots;
        assert_eq!((draw.semifinals[0].home, draw.semifinals[0].away), (slots[0], slots[3]));
        assert_eq!((draw.semifinals[1].home, draw.semifinals[1].away), (slots[1], slots[2]));

        let third = draw.third_place.as_ref().unwrap();
        assert_eq!(third.round, RoundType::ThirdPlace);
        assert_eq!(
            (third.home, third.away),
            (draw.semifinals[0].loser().unwrap(), draw.semifinals[1].loser().unwrap())
        );
        let fin = draw.final_match.as_ref().unwrap();
        assert_eq!(
            (fin.home, fin.away),
            (draw.semifinals[0].winner().unwrap(), draw.semifinals[1].winner().unwrap())
        );

        assert_eq!(medals.gold.team, fin.winner().unwrap());
        assert_eq!(medals.silver.team, fin.loser().unwrap());
        assert_eq!(medals.bronze.team, third.winner().unwrap());
        assert_eq!(draw.medals.as_ref(), Some(&medals));
        assert_eq!(draw.fixtures().count(), 8);
        assert_eq!(unplaced_bracket_teams(&t).len(), 5);
    }
    assert_eq!(orientations, [true, true], "coin flip never chose one orientation");
}

#[test]
fn knockout_keeps_group_stage_records() {
    let mut t = seeded();
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let medals = run_knockout(&mut t, &mut rng, &mut Silent).unwrap();

    // Gold and silver played three group games plus quarterfinal, semifinal and final.
    assert_eq!(t.team(medals.gold.team).unwrap().matches_played(), 6);
    assert_eq!(t.team(medals.silver.team).unwrap().matches_played(), 6);
    assert_eq!(t.team(medals.bronze.team).unwrap().matches_played(), 6);
    // Retained group tables are not touched by the knockout.
    let table = t.group_results.iter().find(|g| g.group == "B").unwrap();
    assert_eq!(table.row("B1").unwrap().points_scored, 240);
}

#[test]
fn knockout_emits_round_headers_and_medals() {
    let mut t = seeded();
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut events: Vec<TournamentEvent> = Vec::new();
    run_knockout(&mut t, &mut rng, &mut events).unwrap();

    let rounds: Vec<RoundType> = events
        .iter()
        .filter_map(|e| match e {
            TournamentEvent::RoundStarted { round } => Some(*round),
            _ => None,
        })
        .collect();
    assert_eq!(
        rounds,
        [
            RoundType::Quarterfinal,
            RoundType::Semifinal,
            RoundType::ThirdPlace,
            RoundType::Final
        ]
    );
    let matches = events
        .iter()
        .filter(|e| matches!(e, TournamentEvent::MatchPlayed(_)))
        .count();
    assert_eq!(matches, 8);
    assert!(matches!(events.last(), Some(TournamentEvent::Medals(_))));
}

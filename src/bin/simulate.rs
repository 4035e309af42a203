//! Single run of the tournament: load the roster, simulate, print results to the console.
//! Run with: cargo run --bin simulate
//! Configure with env: ROSTER_PATH (default groups.json), SIM_SEED, REPORT_PATH.

use hoops_tournament::{
    load_roster, simulate_tournament, EventSink, SimulationConfig, Tournament, TournamentEvent,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufWriter;

const SMALL_DIVIDER: &str = "--------------------------------------------------------";
const BIG_DIVIDER: &str = "========================================================";

/// Renders tournament events as plain console text.
struct ConsolePrinter;

impl EventSink for ConsolePrinter {
    fn emit(&mut self, event: TournamentEvent) {
        match event {
            TournamentEvent::GroupStarted { group } => {
                println!("\n{}\nGroup {} has started!", BIG_DIVIDER, group);
            }
            TournamentEvent::MatchPlayed(m) => {
                println!(
                    "{} ({}) VS {} ({})",
                    m.home.name, m.home.code, m.away.name, m.away.code
                );
                println!("Winner: {} ({} : {})", m.winner, m.winner_score, m.loser_score);
                println!("{}", SMALL_DIVIDER);
            }
            TournamentEvent::GroupStandings(table) => {
                println!(
                    "\nGroup {}: Name / Wins / Losses / Points / Points Scored / Points Allowed / Difference",
                    table.group
                );
                for (i, row) in table.rows.iter().enumerate() {
                    println!(
                        "{}. {}   {} / {} / {} / {} / {} / {}",
                        i + 1,
                        row.name,
                        row.wins,
                        row.losses,
                        row.points,
                        row.points_scored,
                        row.points_allowed,
                        row.difference
                    );
                }
            }
            TournamentEvent::DrawSeeded { buckets, seeds } => {
                let names: HashMap<_, _> = seeds.iter().map(|s| (s.team, s.name.as_str())).collect();
                println!("\nDraw:");
                for bucket in &buckets {
                    let [a, b] = bucket.teams;
                    println!(
                        "    Bucket {:?}: {}, {}",
                        bucket.label,
                        names.get(&a).copied().unwrap_or("?"),
                        names.get(&b).copied().unwrap_or("?")
                    );
                }
            }
            TournamentEvent::RoundStarted { round } => {
                println!("\n{}", round.title());
            }
            TournamentEvent::Medals(medals) => {
                println!(
                    "\nMedals:\n1. Gold - {} ({})\n2. Silver - {} ({})\n3. Bronze - {} ({})",
                    medals.gold.name,
                    medals.gold.code,
                    medals.silver.name,
                    medals.silver.code,
                    medals.bronze.name,
                    medals.bronze.code
                );
            }
        }
    }
}

fn write_report(
    tournament: &Tournament,
    config: &SimulationConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = config.report_path.as_ref() else {
        return Ok(());
    };
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &tournament.report(config.seed))?;
    log::info!("Report written to {}", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = SimulationConfig::from_env();
    let roster = match load_roster(&config.roster_path).await {
        Ok(roster) => roster,
        Err(e) => {
            // Nothing to simulate without teams.
            log::error!("{}", e);
            return Ok(());
        }
    };

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let mut tournament = Tournament::from_roster(&roster);
    let mut printer = ConsolePrinter;
    if let Err(e) = simulate_tournament(&mut tournament, &mut rng, &mut printer) {
        log::warn!("Tournament stopped at {:?}: {}", tournament.state, e);
    }

    write_report(&tournament, &config)
}

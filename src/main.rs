use broadside::cli::{format_coord, print_match_view, print_outcome};
use broadside::{
    init_logging, AttackOutcome, Board, CliGunner, Coord, GameError, Gunner, HuntAi, Match, Phase,
    Shot, Side,
};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Skip manual placement and place your fleet at random")]
        auto_place: bool,
    },
    /// Watch the computer play against a second computer gunner.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0, help = "Pause between shots in milliseconds")]
        delay_ms: u64,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, auto_place } => {
            let mut rng = make_rng(seed);
            let mut gunner = CliGunner::stdin();
            let mut game = Match::new();
            if auto_place {
                game.randomize_human_fleet(&mut rng)?;
            } else if !gunner.place_fleet(&mut game, &mut rng)? {
                println!("Bye.");
                return Ok(());
            }
            game.start(&mut rng)?;
            println!("\nBattle stations! You fire first.");
            run(&mut game, &mut gunner, &mut rng, Duration::ZERO)?;
        }
        Commands::Watch { seed, delay_ms } => {
            let mut rng = make_rng(seed);
            let mut game = Match::new();
            game.randomize_human_fleet(&mut rng)?;
            game.start(&mut rng)?;
            let mut gunner = Narrated(HuntAi::new());
            run(&mut game, &mut gunner, &mut rng, Duration::from_millis(delay_ms))?;
        }
    }
    Ok(())
}

/// Alternate turns until the match ends or the human side gives up.
fn run(
    game: &mut Match,
    gunner: &mut dyn Gunner,
    rng: &mut SmallRng,
    pace: Duration,
) -> anyhow::Result<()> {
    while game.phase() == Phase::Active {
        match game.turn() {
            Side::Human => match game.human_turn(gunner, rng) {
                Ok(_) => {}
                Err(GameError::Abandoned(_)) => break,
                Err(e) => return Err(e.into()),
            },
            Side::Computer => {
                println!("\nComputer is thinking...");
                for shot in game.computer_turn(rng)? {
                    thread::sleep(pace);
                    report_computer_shot(game, shot);
                }
                print_match_view(game);
            }
        }
    }
    print_match_view(game);
    print_outcome(game);
    Ok(())
}

fn report_computer_shot(game: &Match, shot: Shot) {
    let at = format_coord(shot.at);
    match shot.outcome {
        AttackOutcome::Hit => println!("Computer hits at {}!", at),
        AttackOutcome::Sunk => {
            let name = game
                .human()
                .board()
                .ship_at(shot.at)
                .ok()
                .flatten()
                .map_or("ship", |s| s.name());
            println!("Computer sank your {} at {}!", name, at);
        }
        AttackOutcome::Miss => println!("Computer misses at {}.", at),
        AttackOutcome::AlreadyAttacked => {}
    }
}

/// Hunt AI driving the human side, announcing each of its shots.
struct Narrated(HuntAi);

impl Gunner for Narrated {
    fn select_target(&mut self, rng: &mut SmallRng, opponent: &Board) -> Option<Coord> {
        self.0.select_target(rng, opponent)
    }

    fn handle_outcome(&mut self, rng: &mut SmallRng, at: Coord, outcome: AttackOutcome) {
        println!("Autopilot fires at {}: {:?}", format_coord(at), outcome);
        self.0.handle_outcome(rng, at, outcome);
    }
}

use broadside::{HuntAi, Match, Phase, Side};
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

#[derive(Serialize)]
struct GameSummary {
    seed: u64,
    winner: Option<Side>,
    turns: usize,
    human_shots: usize,
    computer_shots: usize,
}

#[derive(Serialize)]
struct Report {
    games: usize,
    human_wins: usize,
    computer_wins: usize,
    results: Vec<GameSummary>,
}

/// Play one match with a hunt AI standing in for the human.
fn play(seed: u64) -> anyhow::Result<GameSummary> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Match::new();
    game.randomize_human_fleet(&mut rng)?;
    game.start(&mut rng)?;

    let mut stand_in = HuntAi::new();
    while game.phase() == Phase::Active {
        match game.turn() {
            Side::Human => {
                game.human_turn(&mut stand_in, &mut rng)?;
            }
            Side::Computer => {
                game.computer_turn(&mut rng)?;
            }
        }
    }

    Ok(GameSummary {
        seed,
        winner: game.winner(),
        turns: game.turn_count(),
        human_shots: game.computer().board().shots_fired(),
        computer_shots: game.human().board().shots_fired(),
    })
}

fn main() -> anyhow::Result<()> {
    broadside::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let results = (0..games as u64)
        .map(|i| play(seed.wrapping_add(i)))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let human_wins = results
        .iter()
        .filter(|r| r.winner == Some(Side::Human))
        .count();
    let computer_wins = results
        .iter()
        .filter(|r| r.winner == Some(Side::Computer))
        .count();

    let report = Report {
        games,
        human_wins,
        computer_wins,
        results,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

#![cfg(feature = "std")]

use std::io::{self, BufRead, StdinLock, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::cli::{format_coord, legend, parse_coord, render_board};
use crate::core::{AttackOutcome, Board, Coord, Orientation, NUM_SHIPS};
use crate::game::{GameError, Match};

use super::Gunner;

/// Interactive gunner reading board notation from a line-based input.
pub struct CliGunner<I: BufRead> {
    input: I,
}

impl CliGunner<StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<I: BufRead> CliGunner<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    /// Next trimmed input line; `None` once the input is closed.
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Walk the human through placing the fleet ship by ship. An empty line
    /// places the rest of the fleet at random. Returns `false` if the player
    /// quit before the fleet was complete.
    pub fn place_fleet(&mut self, game: &mut Match, rng: &mut SmallRng) -> Result<bool, GameError> {
        println!("\nPlace your ships: <COLUMN><ROW> <H|V>, e.g. A5 H");
        println!("Ships may not touch, not even diagonally. ENTER places them at random.\n");
        while let Some(def) = game.next_ship_to_place() {
            print!("{}", render_board(game.human().board(), true, &[]));
            println!("{}", legend(true));
            let placed = game.human().board().ships().len();
            let prompt = format!(
                "Ship {}/{}: {} (length {}) > ",
                placed + 1,
                NUM_SHIPS,
                def.name(),
                def.length()
            );
            let Some(line) = self.read_line(&prompt) else {
                return Ok(false);
            };
            if line.eq_ignore_ascii_case("quit") {
                return Ok(false);
            }
            if line.is_empty() {
                game.randomize_human_fleet(rng)?;
                println!("Fleet placed at random.");
                break;
            }

            let mut parts = line.split_whitespace();
            let origin = match parts.next().map(parse_coord) {
                Some(Ok(at)) => at,
                Some(Err(e)) => {
                    println!("Invalid coordinate: {}", e);
                    continue;
                }
                None => continue,
            };
            let orientation = match parts.next().map(|s| s.to_ascii_uppercase()) {
                None => Orientation::Horizontal,
                Some(s) if s == "H" => Orientation::Horizontal,
                Some(s) if s == "V" => Orientation::Vertical,
                Some(s) => {
                    println!("Invalid orientation '{}' - use H or V", s);
                    continue;
                }
            };

            match game.place_next_ship(origin, orientation) {
                Ok(_) => println!("{} placed at {}", def.name(), format_coord(origin)),
                Err(GameError::Board(e)) => {
                    let preview =
                        game.human()
                            .board()
                            .footprint(def.length(), origin, orientation);
                    print!("{}", render_board(game.human().board(), true, &preview));
                    println!("Cannot place {} there: {}", def.name(), e);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(true)
    }
}

impl<I: BufRead> Gunner for CliGunner<I> {
    fn select_target(&mut self, _rng: &mut SmallRng, opponent: &Board) -> Option<Coord> {
        println!("\nEnemy waters:");
        print!("{}", render_board(opponent, false, &[]));
        println!("{}", legend(false));
        loop {
            let line = self.read_line("Target (e.g. B7, 'quit' to leave) > ")?;
            if line.eq_ignore_ascii_case("quit") {
                return None;
            }
            match parse_coord(&line) {
                Ok(at) if opponent.is_attacked(at) => {
                    println!("You already fired at {}. Choose another target.", format_coord(at));
                }
                Ok(at) => return Some(at),
                Err(e) => println!("Invalid coordinate: {}", e),
            }
        }
    }

    fn handle_outcome(&mut self, _rng: &mut SmallRng, at: Coord, outcome: AttackOutcome) {
        let at = format_coord(at);
        match outcome {
            AttackOutcome::Hit => println!("HIT at {}! Fire again.", at),
            AttackOutcome::Sunk => println!("SUNK! Your shot at {} finished off a ship. Fire again.", at),
            AttackOutcome::Miss => println!("Miss at {}. The computer is up.", at),
            AttackOutcome::AlreadyAttacked => println!("You already fired at {}.", at),
        }
    }
}

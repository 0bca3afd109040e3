//! Text rendering of boards for the terminal.

use std::fmt::Write;
use std::string::String;

use crate::core::{Board, Cell, Coord, BOARD_SIZE};
use crate::game::{Match, Phase};
use crate::player::Side;

/// Render a board as text. With `reveal` unhit ships are shown, otherwise
/// only what the attacker has learned. Sunk ships are drawn with `#`, and
/// cells in `preview` with `?`.
pub fn render_board(board: &Board, reveal: bool, preview: &[Coord]) -> String {
    let mut out = String::new();
    out.push_str("    ");
    for x in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + x as u8) as char);
    }
    out.push('\n');
    for y in 0..BOARD_SIZE {
        let _ = write!(out, "  {:2}", y + 1);
        for x in 0..BOARD_SIZE {
            let at = Coord::new(x, y);
            let ch = if preview.contains(&at) {
                '?'
            } else {
                match board.cell(at) {
                    Ok(Cell::Hit(id)) if board.ship(id).is_ok_and(|s| s.is_sunk()) => '#',
                    Ok(Cell::Hit(_)) => 'X',
                    Ok(Cell::Miss) => 'o',
                    Ok(Cell::Occupied(_)) if reveal => 'S',
                    _ => '.',
                }
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Symbol legend matching `render_board`.
pub fn legend(reveal: bool) -> &'static str {
    if reveal {
        "    Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Water"
    } else {
        "    Legend: X=Hit  #=Sunk  o=Miss  .=Unknown"
    }
}

/// Fleet status lines: name, length and damage of every ship on `board`.
pub fn render_fleet(board: &Board) -> String {
    let mut out = String::new();
    for ship in board.ships() {
        let status = if ship.is_sunk() {
            String::from("SUNK")
        } else {
            format!("{}/{} hits", ship.hit_count(), ship.length())
        };
        let _ = writeln!(out, "      {} ({}): {}", ship.name(), ship.length(), status);
    }
    out
}

/// Display the enemy waters (top) and the human's own board (bottom).
pub fn print_match_view(game: &Match) {
    let reveal_enemy = game.phase() == Phase::Ended;
    println!("Enemy waters:");
    print!("{}", render_board(game.computer().board(), reveal_enemy, &[]));
    println!("{}", legend(reveal_enemy));
    println!("\nYour fleet:");
    print!("{}", render_board(game.human().board(), true, &[]));
    println!("{}", legend(true));
    print!("{}", render_fleet(game.human().board()));
    println!("Turn {}", game.turn_count());
}

/// Short banner for the end of a match.
pub fn print_outcome(game: &Match) {
    match game.winner() {
        Some(Side::Human) => println!("\nVICTORY! You sank the whole enemy fleet."),
        Some(Side::Computer) => println!("\nDEFEAT. All your ships have been destroyed."),
        None => println!("\nMatch abandoned."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Orientation, ShipDef};

    #[test]
    fn hidden_ships_stay_hidden() {
        let mut board = Board::new();
        board
            .place_ship(ShipDef::new("Destroyer", 2), Coord::new(0, 0), Orientation::Horizontal)
            .unwrap();
        board.resolve_attack(Coord::new(5, 5)).unwrap();

        let hidden = render_board(&board, false, &[]);
        assert!(!hidden.contains('S'));
        assert!(hidden.contains('o'));
        assert!(render_board(&board, true, &[]).contains('S'));
    }

    #[test]
    fn sunk_ship_is_drawn_whole() {
        let mut board = Board::new();
        board
            .place_ship(ShipDef::new("Destroyer", 2), Coord::new(3, 3), Orientation::Vertical)
            .unwrap();
        board.resolve_attack(Coord::new(3, 3)).unwrap();
        assert!(render_board(&board, false, &[]).contains('X'));

        board.resolve_attack(Coord::new(3, 4)).unwrap();
        let text = render_board(&board, false, &[]);
        assert_eq!(text.matches('#').count(), 2);
        assert!(!text.contains('X'));
    }
}

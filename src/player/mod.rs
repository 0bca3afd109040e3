//! Players and target selection
//!
//! This module defines the two sides of a match and the seam through which
//! shots are chosen:
//! - Player: one side's own board plus, for the computer, its hunting state
//! - Gunner: anything that can pick the next coordinate to fire at
//! - HuntAi: the computer's hunt-and-target strategy
//! - CliGunner: interactive command-line gunner

use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::{AttackOutcome, Board, BoardError, Coord, ShipDef};
use crate::game::GameError;

/// Which side of the match a player is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// One resolved shot, as reported to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub at: Coord,
    pub outcome: AttackOutcome,
}

/// Interface implemented by anything that chooses where to fire.
pub trait Gunner {
    /// Choose the next coordinate to attack on `opponent`. `None` means the
    /// gunner has given up (e.g. its input was closed).
    fn select_target(&mut self, rng: &mut SmallRng, opponent: &Board) -> Option<Coord>;

    /// Inform the gunner of the result of its last shot.
    fn handle_outcome(&mut self, _rng: &mut SmallRng, _at: Coord, _outcome: AttackOutcome) {}
}

/// One side of the match: its own fleet and, for the computer, its AI state.
#[derive(Debug)]
pub struct Player {
    side: Side,
    board: Board,
    ai: Option<HuntAi>,
}

impl Player {
    pub fn human() -> Self {
        Self {
            side: Side::Human,
            board: Board::new(),
            ai: None,
        }
    }

    pub fn computer() -> Self {
        Self {
            side: Side::Computer,
            board: Board::new(),
            ai: Some(HuntAi::new()),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// This player's own board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for manual ship placement.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The computer's hunting state; `None` for the human.
    pub fn ai(&self) -> Option<&HuntAi> {
        self.ai.as_ref()
    }

    /// Place every ship of `fleet`, in order, at random valid positions.
    pub fn randomize_placement<R: Rng + ?Sized>(
        &mut self,
        fleet: &[ShipDef],
        rng: &mut R,
    ) -> Result<(), BoardError> {
        for def in fleet {
            self.board.place_randomly(*def, rng)?;
        }
        Ok(())
    }

    /// Fire at `at` on the opponent's board.
    pub fn attack(&self, opponent: &mut Board, at: Coord) -> Result<AttackOutcome, BoardError> {
        opponent.resolve_attack(at)
    }

    /// Let the AI pick a target on `opponent`, fire at it and update its
    /// hunting state from the outcome.
    pub fn computer_attack<R: Rng + ?Sized>(
        &mut self,
        opponent: &mut Board,
        rng: &mut R,
    ) -> Result<Shot, GameError> {
        let ai = self.ai.as_mut().ok_or(GameError::NoAutopilot(self.side))?;
        Ok(ai.fire(opponent, rng)?)
    }
}

pub mod ai;
pub use ai::HuntAi;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliGunner;

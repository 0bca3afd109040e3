//! Common types for the engine: coordinates, attack outcomes and board errors.

use core::fmt;

use crate::core::bitboard::BitBoardError;
use crate::core::config::BOARD_SIZE;
use crate::core::ship::ShipId;

/// A cell position. `x` is the column, `y` is the row, both zero based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns `true` if the coordinate lies on a `BOARD_SIZE` board.
    pub fn in_bounds(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// The coordinate shifted by (`dx`, `dy`), or `None` if that leaves the board.
    pub fn offset(&self, dx: isize, dy: isize) -> Option<Coord> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        let c = Coord { x, y };
        c.in_bounds().then_some(c)
    }

    /// The up/down/left/right neighbours that lie on the board.
    pub fn orthogonal_neighbours(self) -> impl Iterator<Item = Coord> {
        [(0, -1), (0, 1), (-1, 0), (1, 0)]
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Result of resolving one attack against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// The cell was empty water.
    Miss,
    /// A ship segment was hit and the ship is still afloat.
    Hit,
    /// A ship segment was hit and that was its last one.
    Sunk,
    /// The cell had been attacked before; nothing changed.
    AlreadyAttacked,
}

impl AttackOutcome {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(&self) -> bool {
        matches!(self, AttackOutcome::Hit | AttackOutcome::Sunk)
    }
}

/// Errors returned by board and ship operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error(transparent)]
    BitBoard(#[from] BitBoardError),
    /// Coordinate or ship segment lies outside the board.
    #[error("({x}, {y}) is outside the board")]
    OutOfBounds { x: usize, y: usize },
    /// Ship would overlap or touch (diagonals included) an already placed ship.
    #[error("ship would touch another ship")]
    TooClose,
    /// Ship coordinates were already assigned.
    #[error("ship is already placed on the board")]
    ShipAlreadyPlaced,
    /// No ship with this id is registered on the board.
    #[error("no ship with id {0:?}")]
    UnknownShip(ShipId),
    /// Internal state contradicts itself.
    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),
}

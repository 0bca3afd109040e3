//! Game board: the cell grid, the ship registry and attack resolution.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::core::bitboard::BitBoard;
use crate::core::common::{AttackOutcome, BoardError, Coord};
use crate::core::config::BOARD_SIZE;
use crate::core::ship::{Orientation, Ship, ShipDef, ShipId};

type BB = BitBoard<u128, BOARD_SIZE>;

/// State of a single cell. Occupied and hit cells keep the id of the ship
/// they belong to, so a sunk ship can always be traced back from its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Occupied(ShipId),
    Hit(ShipId),
    Miss,
}

impl Cell {
    /// `true` for cells that have already received an attack.
    pub fn is_attacked(&self) -> bool {
        matches!(self, Cell::Hit(_) | Cell::Miss)
    }

    /// The ship on this cell, hit or not.
    pub fn ship(&self) -> Option<ShipId> {
        match self {
            Cell::Occupied(id) | Cell::Hit(id) => Some(*id),
            Cell::Empty | Cell::Miss => None,
        }
    }
}

pub struct Board {
    /// Indexed `[y][x]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<Ship>,
    /// Union of all placed ship cells.
    footprint: BB,
    shots: usize,
}

impl Board {
    /// Create an empty board (no ships placed, nothing attacked).
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
            footprint: BB::new(),
            shots: 0,
        }
    }

    /// Registered ships, indexed by `ShipId`.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Result<&Ship, BoardError> {
        self.ships.get(id.0).ok_or(BoardError::UnknownShip(id))
    }

    /// The ship covering `at`, if any.
    pub fn ship_at(&self, at: Coord) -> Result<Option<&Ship>, BoardError> {
        match self.cell(at)?.ship() {
            Some(id) => self.ship(id).map(Some),
            None => Ok(None),
        }
    }

    /// Ships that have been sunk, with their coordinates for rendering.
    pub fn sunk_ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(|s| s.is_sunk())
    }

    pub fn cell(&self, at: Coord) -> Result<Cell, BoardError> {
        if !at.in_bounds() {
            return Err(BoardError::OutOfBounds { x: at.x, y: at.y });
        }
        Ok(self.cells[at.y][at.x])
    }

    /// Whether `at` has already been attacked. Cells off the board never are.
    pub fn is_attacked(&self, at: Coord) -> bool {
        self.cell(at).map(|c| c.is_attacked()).unwrap_or(false)
    }

    /// Number of attacks that changed a cell (hits and misses).
    pub fn shots_fired(&self) -> usize {
        self.shots
    }

    /// Whether every cell has been attacked.
    pub fn fully_attacked(&self) -> bool {
        self.shots == BOARD_SIZE * BOARD_SIZE
    }

    /// Returns `true` when all registered ships are sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    /// In-bounds cells a ship of `length` at `origin` would cover. Used for
    /// placement previews, so segments past the edge are dropped silently.
    pub fn footprint(&self, length: usize, origin: Coord, orientation: Orientation) -> Vec<Coord> {
        orientation
            .segments(origin, length)
            .filter(|c| c.in_bounds())
            .collect()
    }

    /// Whether a ship of `length` could be placed at `origin`.
    pub fn can_place(&self, length: usize, origin: Coord, orientation: Orientation) -> bool {
        self.check_placement(length, origin, orientation).is_ok()
    }

    /// Validate a placement: a positive length, every segment on the board and
    /// no segment on or next to (diagonals included) an already placed ship.
    fn check_placement(
        &self,
        length: usize,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<BB, BoardError> {
        if length == 0 {
            return Err(BoardError::InvariantViolation("ship length must be positive"));
        }
        if let Some(off) = orientation
            .segments(origin, length)
            .find(|c| !c.in_bounds())
        {
            return Err(BoardError::OutOfBounds { x: off.x, y: off.y });
        }
        let mask = BB::from_coords(orientation.segments(origin, length))?;
        if !(mask.halo() & self.footprint).is_empty() {
            return Err(BoardError::TooClose);
        }
        Ok(mask)
    }

    /// Place a ship built from `def` with its first segment at `origin`.
    /// On error the board is left untouched.
    pub fn place_ship(
        &mut self,
        def: ShipDef,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        let mask = self.check_placement(def.length(), origin, orientation)?;
        let id = ShipId(self.ships.len());
        let coords: Vec<Coord> = orientation.segments(origin, def.length()).collect();

        let mut ship = Ship::new(def);
        ship.set_coordinates(coords.clone())?;
        for c in &coords {
            self.cells[c.y][c.x] = Cell::Occupied(id);
        }
        self.footprint |= mask;
        self.ships.push(ship);
        debug!(
            "placed {} at {} {:?} as {:?}",
            def.name(),
            origin,
            orientation,
            id
        );
        Ok(id)
    }

    /// Place a ship at a uniformly random anchor and orientation, resampling
    /// until the placement is valid.
    pub fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        def: ShipDef,
        rng: &mut R,
    ) -> Result<ShipId, BoardError> {
        loop {
            let origin = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match self.place_ship(def, origin, orientation) {
                Ok(id) => return Ok(id),
                Err(BoardError::OutOfBounds { .. } | BoardError::TooClose) => {
                    trace!("rejected {} at {} {:?}", def.name(), origin, orientation);
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Resolve an attack at `at`.
    ///
    /// Attacking a cell twice yields `AlreadyAttacked` and changes nothing.
    /// An off-board coordinate is a caller bug and returns `OutOfBounds`.
    pub fn resolve_attack(&mut self, at: Coord) -> Result<AttackOutcome, BoardError> {
        let outcome = match self.cell(at)? {
            Cell::Hit(_) | Cell::Miss => return Ok(AttackOutcome::AlreadyAttacked),
            Cell::Empty => {
                self.cells[at.y][at.x] = Cell::Miss;
                AttackOutcome::Miss
            }
            Cell::Occupied(id) => {
                let ship = self
                    .ships
                    .get_mut(id.0)
                    .ok_or(BoardError::UnknownShip(id))?;
                ship.register_hit()?;
                self.cells[at.y][at.x] = Cell::Hit(id);
                if ship.is_sunk() {
                    AttackOutcome::Sunk
                } else {
                    AttackOutcome::Hit
                }
            }
        };
        self.shots += 1;
        debug!("attack at {} -> {:?}", at, outcome);
        Ok(outcome)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for row in &self.cells {
            write!(f, "  ")?;
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(_) => 'S',
                    Cell::Hit(_) => 'X',
                    Cell::Miss => 'o',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  ships: {:?}", self.ships)?;
        write!(f, "}}")
    }
}

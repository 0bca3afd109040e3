//! Ship definitions and per-ship damage tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::core::common::{BoardError, Coord};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Segments extend towards `+x`.
    Horizontal,
    /// Segments extend towards `+y`.
    Vertical,
}

impl Orientation {
    /// Segment positions of a ship of `length` anchored at `origin`. Positions
    /// past the board edge are yielded as-is; callers check bounds. Stops early
    /// if a position would overflow `usize`.
    pub fn segments(self, origin: Coord, length: usize) -> impl Iterator<Item = Coord> {
        (0..length).map_while(move |i| match self {
            Orientation::Horizontal => origin.x.checked_add(i).map(|x| Coord::new(x, origin.y)),
            Orientation::Vertical => origin.y.checked_add(i).map(|y| Coord::new(origin.x, y)),
        })
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipDef {
    name: &'static str,
    length: usize,
}

impl ShipDef {
    /// Create a new ship definition.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Index of a ship in its board's registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A single vessel: its definition, the cells it covers and the damage taken.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    def: ShipDef,
    coords: Vec<Coord>,
    hits: usize,
}

impl Ship {
    /// An unplaced ship built from `def`.
    pub fn new(def: ShipDef) -> Self {
        Self {
            def,
            coords: Vec::new(),
            hits: 0,
        }
    }

    /// Assign the cells this ship covers. Only valid once.
    pub(crate) fn set_coordinates(&mut self, coords: Vec<Coord>) -> Result<(), BoardError> {
        if self.is_placed() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        if coords.len() != self.def.length() {
            return Err(BoardError::InvariantViolation(
                "segment count does not match ship length",
            ));
        }
        self.coords = coords;
        Ok(())
    }

    /// Record one more damaged segment.
    ///
    /// Fails with `InvariantViolation` when the ship is already sunk; the board
    /// never routes a second hit to the same segment, so this is unreachable in
    /// correct use.
    pub fn register_hit(&mut self) -> Result<(), BoardError> {
        if self.is_sunk() {
            return Err(BoardError::InvariantViolation("hit registered on a sunk ship"));
        }
        self.hits += 1;
        Ok(())
    }

    /// `true` once every segment has been hit.
    pub fn is_sunk(&self) -> bool {
        self.hits >= self.def.length()
    }

    pub fn hit_count(&self) -> usize {
        self.hits
    }

    pub fn length(&self) -> usize {
        self.def.length()
    }

    pub fn name(&self) -> &'static str {
        self.def.name()
    }

    pub fn def(&self) -> ShipDef {
        self.def
    }

    /// Whether coordinates have been assigned.
    pub fn is_placed(&self) -> bool {
        !self.coords.is_empty()
    }

    /// Covered cells in placement order, empty until placed.
    pub fn coordinates(&self) -> &[Coord] {
        &self.coords
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, hits: {}, coords: {:?} }}",
            self.def.name(),
            self.def.length(),
            self.hits,
            self.coords,
        )
    }
}

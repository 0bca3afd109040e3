//! Core battleship rules engine (no_std compatible)
//!
//! Board representation, ship placement validation and attack resolution.
//! Needs only `alloc`, so it can be built without the standard library.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod ship;

// Re-export commonly used types
pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, Cell};
pub use common::{AttackOutcome, BoardError, Coord};
pub use config::*;
pub use ship::{Orientation, Ship, ShipDef, ShipId};

//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackOutcome, Board, Coord, Gunner, HuntAi, Match, Orientation, Phase, Player, Shot, Side,
    FLEET,
};

#[cfg(feature = "std")]
pub use crate::cli::{format_coord, parse_coord, print_match_view, print_outcome};
#[cfg(feature = "std")]
pub use crate::{init_logging, CliGunner};

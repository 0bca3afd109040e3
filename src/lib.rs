#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod cli;
pub mod core;
pub mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;

pub use crate::core::*;
pub use game::*;
pub use player::*;
#[cfg(feature = "std")]
pub use logging::init_logging;

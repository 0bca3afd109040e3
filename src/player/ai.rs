//! Hunt-and-target shooting for the computer opponent.
//!
//! Random shots until something is hit, then the orthogonal neighbours of each
//! hit are stacked and tried before going back to random search. Once two hits
//! line up, only neighbours along that axis are stacked.

use alloc::vec::Vec;

use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::{AttackOutcome, Board, BoardError, Coord, Orientation, BOARD_SIZE};

use super::{Gunner, Shot};

/// Target-hunting state of the computer opponent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HuntAi {
    /// Pending candidates, tried last-in first-out.
    hunt_stack: Vec<Coord>,
    /// Confirmed hits on the ship currently being chased.
    recent_hits: Vec<Coord>,
}

impl HuntAi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hunt_stack(&self) -> &[Coord] {
        &self.hunt_stack
    }

    pub fn recent_hits(&self) -> &[Coord] {
        &self.recent_hits
    }

    /// `true` while there are leads left to follow.
    pub fn is_hunting(&self) -> bool {
        !self.hunt_stack.is_empty()
    }

    /// Axis of the ship being chased, inferred from the two most recent hits.
    pub fn inferred_orientation(&self) -> Option<Orientation> {
        let [.., a, b] = self.recent_hits.as_slice() else {
            return None;
        };
        if a.x == b.x {
            Some(Orientation::Vertical)
        } else if a.y == b.y {
            Some(Orientation::Horizontal)
        } else {
            None
        }
    }

    /// Pick the next coordinate to fire at on `opponent`.
    ///
    /// Stacked candidates come first; stale ones (already attacked or off the
    /// board) are dropped. With the stack exhausted, cells are sampled
    /// uniformly until an unattacked one turns up, so the board must not be
    /// fully attacked.
    pub fn choose_target<R: Rng + ?Sized>(&mut self, opponent: &Board, rng: &mut R) -> Coord {
        debug_assert!(!opponent.fully_attacked(), "no cell left to attack");
        while let Some(at) = self.hunt_stack.pop() {
            if at.in_bounds() && !opponent.is_attacked(at) {
                trace!("hunting at {}", at);
                return at;
            }
            trace!("dropping stale candidate {}", at);
        }
        loop {
            let at = Coord::new(
                rng.random_range(0..BOARD_SIZE),
                rng.random_range(0..BOARD_SIZE),
            );
            if !opponent.is_attacked(at) {
                trace!("random shot at {}", at);
                return at;
            }
        }
    }

    /// Update the hunting state from the outcome of a shot at `at`.
    pub fn record<R: Rng + ?Sized>(&mut self, at: Coord, outcome: AttackOutcome, rng: &mut R) {
        match outcome {
            AttackOutcome::Hit => {
                self.recent_hits.push(at);
                let orientation = self.inferred_orientation();
                self.push_candidates(at, orientation, rng);
            }
            AttackOutcome::Sunk => {
                debug!(
                    "target sunk at {}, dropping {} leads",
                    at,
                    self.hunt_stack.len()
                );
                self.hunt_stack.clear();
                self.recent_hits.clear();
            }
            AttackOutcome::Miss | AttackOutcome::AlreadyAttacked => {}
        }
    }

    fn push_candidates<R: Rng + ?Sized>(
        &mut self,
        at: Coord,
        orientation: Option<Orientation>,
        rng: &mut R,
    ) {
        let deltas: &[(isize, isize)] = match orientation {
            None => &[(0, -1), (0, 1), (-1, 0), (1, 0)],
            Some(Orientation::Horizontal) => &[(-1, 0), (1, 0)],
            Some(Orientation::Vertical) => &[(0, -1), (0, 1)],
        };
        let mut candidates: Vec<Coord> = deltas
            .iter()
            .filter_map(|&(dx, dy)| at.offset(dx, dy))
            .collect();
        candidates.shuffle(rng);
        debug!(
            "hit at {} ({:?}), stacking {:?}",
            at, orientation, candidates
        );
        self.hunt_stack.extend(candidates);
    }

    /// Choose a target, resolve it on `opponent` and record the outcome.
    pub fn fire<R: Rng + ?Sized>(
        &mut self,
        opponent: &mut Board,
        rng: &mut R,
    ) -> Result<Shot, BoardError> {
        let at = self.choose_target(opponent, rng);
        let outcome = opponent.resolve_attack(at)?;
        self.record(at, outcome, rng);
        Ok(Shot { at, outcome })
    }
}

impl Gunner for HuntAi {
    fn select_target(&mut self, rng: &mut SmallRng, opponent: &Board) -> Option<Coord> {
        Some(self.choose_target(opponent, rng))
    }

    fn handle_outcome(&mut self, rng: &mut SmallRng, at: Coord, outcome: AttackOutcome) {
        self.record(at, outcome, rng);
    }
}

//! Match orchestration: placement, alternating turns and win detection.

use alloc::vec::Vec;

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::core::{AttackOutcome, BoardError, Coord, Orientation, ShipDef, ShipId, FLEET, NUM_SHIPS};
use crate::player::{Gunner, Player, Shot, Side};

/// Lifecycle of a match. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placement,
    Active,
    Ended,
}

/// Errors returned by match operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("operation needs the {expected:?} phase, match is in {actual:?}")]
    WrongPhase { expected: Phase, actual: Phase },
    #[error("it is not the {0:?} side's turn")]
    NotYourTurn(Side),
    #[error("only {placed} of {required} ships placed")]
    FleetIncomplete { placed: usize, required: usize },
    #[error("all ships are already placed")]
    FleetComplete,
    #[error("the {0:?} side has no AI to fire for it")]
    NoAutopilot(Side),
    #[error("the {0:?} side stopped choosing targets")]
    Abandoned(Side),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A human-versus-computer match.
///
/// The human places the fleet ship by ship (or randomly), `start` places the
/// computer fleet and opens fire. A hit or sink lets the same side shoot
/// again; a miss hands the turn over.
#[derive(Debug)]
pub struct Match {
    human: Player,
    computer: Player,
    phase: Phase,
    turn: Side,
    turn_count: usize,
    winner: Option<Side>,
    /// Index into `FLEET` of the next ship the human has to place.
    next_ship: usize,
}

impl Match {
    /// A fresh match in the placement phase. Restarting a game means building
    /// a new one.
    pub fn new() -> Self {
        Self {
            human: Player::human(),
            computer: Player::computer(),
            phase: Phase::Placement,
            turn: Side::Human,
            turn_count: 0,
            winner: None,
            next_ship: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side allowed to fire next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Number of times the turn has passed to the computer.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    /// The fleet definition the human has to place next, if any.
    pub fn next_ship_to_place(&self) -> Option<ShipDef> {
        if self.phase != Phase::Placement {
            return None;
        }
        FLEET.get(self.next_ship).copied()
    }

    /// Place the next fleet ship on the human board. A rejected placement
    /// leaves the cursor where it was so the caller can try again.
    pub fn place_next_ship(
        &mut self,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<ShipId, GameError> {
        self.expect_phase(Phase::Placement)?;
        let def = FLEET.get(self.next_ship).copied().ok_or(GameError::FleetComplete)?;
        let id = self.human.board_mut().place_ship(def, origin, orientation)?;
        self.next_ship += 1;
        Ok(id)
    }

    /// Throw away the human board and place the whole fleet at random.
    pub fn randomize_human_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.expect_phase(Phase::Placement)?;
        let mut human = Player::human();
        human.randomize_placement(&FLEET, rng)?;
        self.human = human;
        self.next_ship = NUM_SHIPS;
        Ok(())
    }

    /// Leave placement: requires the full human fleet, places the computer
    /// fleet at random and gives the first turn to the human.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.expect_phase(Phase::Placement)?;
        if self.next_ship < NUM_SHIPS {
            return Err(GameError::FleetIncomplete {
                placed: self.next_ship,
                required: NUM_SHIPS,
            });
        }
        let mut computer = Player::computer();
        computer.randomize_placement(&FLEET, rng)?;
        self.computer = computer;
        self.phase = Phase::Active;
        self.turn = Side::Human;
        self.turn_count = 0;
        info!("match started");
        Ok(())
    }

    /// Resolve a human shot at `at` on the computer board.
    pub fn human_attack(&mut self, at: Coord) -> Result<Shot, GameError> {
        self.expect_turn(Side::Human)?;
        let outcome = self.human.attack(self.computer.board_mut(), at)?;
        self.apply(Side::Human, outcome);
        Ok(Shot { at, outcome })
    }

    /// Let the computer fire a single shot.
    pub fn computer_attack<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Shot, GameError> {
        self.expect_turn(Side::Computer)?;
        let shot = self.computer.computer_attack(self.human.board_mut(), rng)?;
        self.apply(Side::Computer, shot.outcome);
        Ok(shot)
    }

    /// Run the computer's whole turn: keep firing until a miss hands the turn
    /// back or the match ends. Every shot is returned in order so the caller
    /// can replay them at its own pace.
    pub fn computer_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<Shot>, GameError> {
        self.expect_turn(Side::Computer)?;
        let mut shots = Vec::new();
        while self.phase == Phase::Active && self.turn == Side::Computer {
            shots.push(self.computer_attack(rng)?);
        }
        Ok(shots)
    }

    /// Run the human's whole turn with `gunner` choosing the targets.
    pub fn human_turn(
        &mut self,
        gunner: &mut dyn Gunner,
        rng: &mut SmallRng,
    ) -> Result<Vec<Shot>, GameError> {
        self.expect_turn(Side::Human)?;
        let mut shots = Vec::new();
        while self.phase == Phase::Active && self.turn == Side::Human {
            let at = gunner
                .select_target(rng, self.computer.board())
                .ok_or(GameError::Abandoned(Side::Human))?;
            let shot = self.human_attack(at)?;
            gunner.handle_outcome(rng, shot.at, shot.outcome);
            shots.push(shot);
        }
        Ok(shots)
    }

    fn apply(&mut self, attacker: Side, outcome: AttackOutcome) {
        match outcome {
            AttackOutcome::AlreadyAttacked => {}
            AttackOutcome::Hit | AttackOutcome::Sunk => {
                if self.player(attacker.opponent()).board().all_ships_sunk() {
                    self.finish(attacker);
                }
            }
            AttackOutcome::Miss => {
                self.turn = attacker.opponent();
                if self.turn == Side::Computer {
                    self.turn_count += 1;
                }
                debug!("turn passes to {:?} (turn {})", self.turn, self.turn_count);
            }
        }
    }

    fn finish(&mut self, winner: Side) {
        self.phase = Phase::Ended;
        self.winner = Some(winner);
        info!("match over, {:?} wins after {} turns", winner, self.turn_count);
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase != expected {
            return Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    fn expect_turn(&self, side: Side) -> Result<(), GameError> {
        self.expect_phase(Phase::Active)?;
        if self.turn != side {
            return Err(GameError::NotYourTurn(side));
        }
        Ok(())
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

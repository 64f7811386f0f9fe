use alloc::vec::Vec;

use crate::{
    board::BattleField,
    common::{BoardError, Coordinate, ShotResult},
    config::{FLEET_SIZE, SHIP_SIZE},
    generator::populate_fleet,
    player::Player,
};
use rand::rngs::SmallRng;

/// Which side fired a shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Player,
    Computer,
}

/// Outcome of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub shooter: Side,
    pub target: Coordinate,
    pub result: ShotResult,
    /// The shot sank a ship that was still afloat.
    pub sunk: bool,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    ComputerWon,
    /// A player stopped providing targets.
    Abandoned,
}

/// A human-vs-computer session owning both fields.
pub struct Game {
    player_field: BattleField,
    computer_field: BattleField,
    rounds: usize,
    abandoned: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game with two empty fields.
    pub fn new() -> Self {
        Self::from_fields(BattleField::new(), BattleField::new())
    }

    /// A game over fields prepared by the caller.
    pub fn from_fields(player_field: BattleField, computer_field: BattleField) -> Self {
        Self {
            player_field,
            computer_field,
            rounds: 0,
            abandoned: false,
        }
    }

    /// Place the player's fleet, then the computer's, from the same RNG.
    pub fn setup(rng: &mut SmallRng) -> Result<Self, BoardError> {
        let mut game = Self::new();
        populate_fleet(&mut game.player_field, rng)?;
        populate_fleet(&mut game.computer_field, rng)?;
        log::info!("both fleets placed ({} ships of length {})", FLEET_SIZE, SHIP_SIZE);
        Ok(game)
    }

    pub fn player_field(&self) -> &BattleField {
        &self.player_field
    }

    pub fn computer_field(&self) -> &BattleField {
        &self.computer_field
    }

    /// Completed rounds.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Apply a shot from `shooter` to the opposing field.
    pub fn fire(&mut self, shooter: Side, target: Coordinate) -> Result<TurnReport, BoardError> {
        let field = match shooter {
            Side::Player => &mut self.computer_field,
            Side::Computer => &mut self.player_field,
        };
        let afloat = field.ships_remaining();
        let result = field.resolve_shot(target)?;
        let sunk = field.ships_remaining() < afloat;
        Ok(TurnReport {
            shooter,
            target,
            result,
            sunk,
        })
    }

    /// Play one round: the human fires first, then the computer.
    ///
    /// The computer does not fire if the human's shot ended the game. If
    /// either side provides no target the game is marked abandoned and the
    /// round is not counted.
    pub fn play_round<H, C>(
        &mut self,
        human: &mut H,
        computer: &mut C,
        rng: &mut SmallRng,
    ) -> Result<Vec<TurnReport>, BoardError>
    where
        H: Player + ?Sized,
        C: Player + ?Sized,
    {
        let mut reports = Vec::with_capacity(2);
        if self.status() != GameStatus::InProgress {
            return Ok(reports);
        }

        let Some(target) = human.select_target(rng, &self.computer_field) else {
            log::info!("player left the game after {} round(s)", self.rounds);
            self.abandoned = true;
            return Ok(reports);
        };
        let report = self.fire(Side::Player, target)?;
        human.handle_shot_result(report.target, report.result, report.sunk);
        computer.handle_opponent_shot(report.target, report.result, report.sunk);
        reports.push(report);

        if self.status() == GameStatus::InProgress {
            let Some(target) = computer.select_target(rng, &self.player_field) else {
                log::warn!("computer produced no target in round {}", self.rounds + 1);
                self.abandoned = true;
                return Ok(reports);
            };
            let report = self.fire(Side::Computer, target)?;
            computer.handle_shot_result(report.target, report.result, report.sunk);
            human.handle_opponent_shot(report.target, report.result, report.sunk);
            reports.push(report);
        }
        self.rounds += 1;
        Ok(reports)
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.abandoned {
            GameStatus::Abandoned
        } else if Self::defeated(&self.computer_field) {
            GameStatus::PlayerWon
        } else if Self::defeated(&self.player_field) {
            GameStatus::ComputerWon
        } else {
            GameStatus::InProgress
        }
    }

    fn defeated(field: &BattleField) -> bool {
        !field.ships().is_empty() && !field.has_ships_remaining()
    }
}

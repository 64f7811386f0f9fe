use crate::{
    board::BattleField,
    common::{Coordinate, ShotResult},
    generator::ShipGenerator,
};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Computer player that fires at uniformly random cells.
///
/// It keeps no memory of earlier shots, so it may fire at the same cell
/// more than once.
#[derive(Debug, Default)]
pub struct RandomPlayer {
    shots_fired: usize,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }
}

impl Player for RandomPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, _opponent: &BattleField) -> Option<Coordinate> {
        self.shots_fired += 1;
        Some(ShipGenerator::random_coordinate(rng))
    }

    fn handle_shot_result(&mut self, target: Coordinate, result: ShotResult, sunk: bool) {
        log::debug!("computer shot {} -> {:?} (sunk: {})", target, result, sunk);
    }
}
